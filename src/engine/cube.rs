use nalgebra::{Point2, Vector2};

use crate::engine::color::Color;
use crate::engine::surface::Surface;

const TOP_DEPTH_SCALE: f32 = 0.6;
const SIDE_DEPTH_SCALE: f32 = 0.4;
const LIT: f32 = 0.2;
const SHADOWED: f32 = -0.2;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Screen-space faces of a fake isometric block.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeFaces {
    pub top: Rect,
    pub front: Rect,
    pub side: [Point2<f32>; 4],
    pub top_edge: [Point2<f32>; 4],
}

/// Computes the faces of a block whose front face sits at `(x, y, w, h)` and
/// which recedes by `d` pixels up and to the right.
pub fn cube_faces(x: f32, y: f32, w: f32, h: f32, d: f32) -> CubeFaces {
    let top_h = d * TOP_DEPTH_SCALE;
    let recede = Vector2::new(d * SIDE_DEPTH_SCALE, -d * SIDE_DEPTH_SCALE);

    let front_tl = Point2::new(x, y);
    let front_tr = Point2::new(x + w, y);
    let front_br = Point2::new(x + w, y + h);

    CubeFaces {
        top: Rect { x, y: y - top_h, w, h: top_h },
        front: Rect { x, y, w, h },
        side: [front_tr, front_tr + recede, front_br + recede, front_br],
        top_edge: [front_tl, front_tl + recede, front_tr + recede, front_tr],
    }
}

/// Draws a shaded pseudo-3D block: lit top, shadowed right side, base front.
pub fn draw_cube<S: Surface + ?Sized>(surface: &mut S, x: f32, y: f32, w: f32, h: f32, d: f32, color: Color) {
    let faces = cube_faces(x, y, w, h, d);
    let lit = color.shade(LIT);

    surface.set_fill(lit);
    surface.fill_rect(faces.top.x, faces.top.y, faces.top.w, faces.top.h);

    surface.set_fill(color.shade(SHADOWED));
    surface.fill_polygon(&faces.side);

    surface.set_fill(lit);
    surface.fill_polygon(&faces.top_edge);

    // Front last so the receding faces never overdraw it
    surface.set_fill(color);
    surface.fill_rect(faces.front.x, faces.front.y, faces.front.w, faces.front.h);
}
