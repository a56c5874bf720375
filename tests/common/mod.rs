#![allow(dead_code)]

use lane_hopper::engine::color::Color;
use lane_hopper::engine::surface::Surface;
use lane_hopper::game::config::GameConfig;
use lane_hopper::game::lane::{Ground, Lane};
use lane_hopper::game::world::World;
use nalgebra::Point2;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Color),
    Rect(f32, f32, f32, f32),
    Polygon(Vec<Point2<f32>>),
}

/// Surface that records every call instead of painting.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Surface for Recorder {
    fn set_fill(&mut self, color: Color) {
        self.ops.push(Op::Fill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(Op::Rect(x, y, w, h));
    }

    fn fill_polygon(&mut self, points: &[Point2<f32>]) {
        self.ops.push(Op::Polygon(points.to_vec()));
    }
}

pub fn seeded(seed: u64) -> GameConfig {
    GameConfig { seed: Some(seed), ..GameConfig::default() }
}

/// All-safe, tree-free world for deterministic movement tests.
pub fn open_field(config: &GameConfig) -> World {
    World::from_lanes(
        (0..config.rows).map(|r| Lane::empty(r, Ground::Safe)).collect(),
        config.rows,
    )
}
