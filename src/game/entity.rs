use crate::engine::color::Color;
use crate::engine::cube::draw_cube;
use crate::engine::surface::Surface;
use crate::game::player::Player;

/// Margin past the canvas edge before a vehicle is discarded.
pub const OFFSCREEN_MARGIN: f32 = 100.0;

/// Cell size in pixels that sprite offsets are laid out on. Drawing scales
/// them by `grid / SPRITE_CELL`.
pub const SPRITE_CELL: f32 = 40.0;

const SHADOW: Color = Color::rgba(0, 0, 0, 77);
const WHEEL: Color = Color::hex(0x222222);
const TRUNK: Color = Color::hex(0x8b4513);
const LEAVES: Color = Color::hex(0x228b22);

#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub direction: i32,
    pub color: Color,
}

impl Vehicle {
    pub fn advance(&mut self) {
        self.x += self.speed * self.direction as f32;
    }

    /// True once the vehicle has fully left a canvas of `canvas_width`
    /// pixels in its direction of travel, with margin.
    pub fn is_off_screen(&self, canvas_width: f32) -> bool {
        (self.direction > 0 && self.x > canvas_width + OFFSCREEN_MARGIN)
            || (self.direction < 0 && self.x + self.width < -OFFSCREEN_MARGIN)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, y: f32, grid: f32) {
        let k = grid / SPRITE_CELL;
        surface.set_fill(SHADOW);
        surface.fill_rect(self.x + 5.0 * k, y + 25.0 * k, self.width - 10.0 * k, 10.0 * k);

        draw_cube(surface, self.x, y + 5.0 * k, self.width, 20.0 * k, 20.0 * k, self.color);
        let cabin_w = self.width * 0.6;
        let cabin_x = self.x + (self.width - cabin_w) / 2.0;
        let cabin = self.color.shade(0.4);
        draw_cube(surface, cabin_x, y - 10.0 * k, cabin_w, 15.0 * k, 15.0 * k, cabin);

        let wheel = 8.0 * k;
        surface.set_fill(WHEEL);
        surface.fill_rect(self.x + 5.0 * k, y + 20.0 * k, wheel, wheel);
        surface.fill_rect(self.x + self.width - 5.0 * k - wheel, y + 20.0 * k, wheel, wheel);
    }
}

/// A static obstacle filling one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tree {
    pub col: i32,
}

impl Tree {
    /// Draws the tree in the cell at `(x, y)`; the canopy rises above it.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, x: f32, y: f32, size: f32) {
        let k = size / SPRITE_CELL;
        draw_cube(surface, x + 12.0 * k, y + 10.0 * k, 16.0 * k, 30.0 * k, 16.0 * k, TRUNK);
        draw_cube(surface, x, y - 20.0 * k, size, 30.0 * k, 30.0 * k, LEAVES);
        let top = LEAVES.shade(0.1);
        draw_cube(surface, x + 5.0 * k, y - 45.0 * k, 30.0 * k, 25.0 * k, 25.0 * k, top);
    }
}

/// One entry of the per-frame painter's list.
pub enum Drawable<'a> {
    Player(&'a Player),
    Vehicle { vehicle: &'a Vehicle, y: f32, grid: f32 },
    Tree { tree: &'a Tree, x: f32, y: f32, size: f32 },
}

impl Drawable<'_> {
    /// Bottom edge of the sprite; used as the depth key.
    pub fn render_y(&self) -> f32 {
        match self {
            Drawable::Player(player) => player.render_y(),
            Drawable::Vehicle { vehicle, y, .. } => y + vehicle.height,
            Drawable::Tree { y, size, .. } => y + size,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Drawable::Player(player) => player.draw(surface),
            Drawable::Vehicle { vehicle, y, grid } => vehicle.draw(surface, *y, *grid),
            Drawable::Tree { tree, x, y, size } => tree.draw(surface, *x, *y, *size),
        }
    }
}

/// Sorts back-to-front by render-y. Stable, so equal keys keep insertion order.
pub fn sort_for_painting(list: &mut [Drawable<'_>]) {
    list.sort_by(|a, b| a.render_y().total_cmp(&b.render_y()));
}
