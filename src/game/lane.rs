use rand::Rng;

use crate::engine::color::Color;
use crate::engine::surface::Surface;
use crate::game::config::GameConfig;
use crate::game::entity::{Tree, Vehicle};
use crate::game::player::Player;

const EDGE_STRIP: f32 = 5.0;
const COLLISION_INSET: i32 = 5;
/// A new vehicle waits until the previous one is this many cells clear of
/// the spawn edge.
const SPAWN_CLEARANCE_CELLS: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ground {
    Road,
    Safe,
}

impl Ground {
    /// Top color and darker bottom-edge color of the strip.
    pub fn colors(self) -> (Color, Color) {
        match self {
            Ground::Road => (Color::hex(0x555555), Color::hex(0x444444)),
            Ground::Safe => (Color::hex(0x7cfc00), Color::hex(0x5bb800)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Lane {
    pub row: i32,
    pub ground: Ground,
    pub speed: f32,
    pub direction: i32,
    vehicles: Vec<Vehicle>,
    trees: Vec<Tree>,
}

impl Lane {
    /// Generates the lane for `row`, scaling traffic speed by `score`.
    pub fn generate<R: Rng + ?Sized>(row: i32, score: u32, config: &GameConfig, rng: &mut R) -> Self {
        let speed = (rng.gen_range(2.0..4.0) * config.difficulty(score)) as f32;
        let direction = if rng.gen_bool(0.5) { 1 } else { -1 };
        let ground = if config.is_start_row(row) || !rng.gen_bool(config.road_chance) {
            Ground::Safe
        } else {
            Ground::Road
        };

        let mut trees = Vec::new();
        if ground == Ground::Safe && rng.gen_bool(config.tree_lane_chance) {
            let (start_col, start_row) = config.start_cell();
            let count = rng.gen_range(0..=config.max_trees);
            for _ in 0..count {
                let col = rng.gen_range(0..config.cols);
                if row == start_row && col == start_col {
                    continue;
                }
                if !trees.iter().any(|t: &Tree| t.col == col) {
                    trees.push(Tree { col });
                }
            }
        }

        Lane { row, ground, speed, direction, vehicles: Vec::new(), trees }
    }

    pub fn empty(row: i32, ground: Ground) -> Self {
        Lane { row, ground, speed: 0.0, direction: 1, vehicles: Vec::new(), trees: Vec::new() }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn push_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn push_tree(&mut self, tree: Tree) {
        if !self.tree_at(tree.col) {
            self.trees.push(tree);
        }
    }

    pub fn tree_at(&self, col: i32) -> bool {
        self.trees.iter().any(|t| t.col == col)
    }

    pub fn y(&self, grid: i32) -> i32 {
        self.row * grid
    }

    /// One frame of traffic: maybe spawn, advance, cull.
    pub fn update<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        if self.ground != Ground::Road {
            return;
        }
        let grid = config.grid_size as f32;
        let canvas_width = config.width() as f32;

        if rng.gen_bool(config.spawn_chance) && self.spawn_edge_clear(grid, canvas_width) {
            let width = grid * if rng.gen_bool(0.3) { 2.5 } else { 1.5 };
            let x = if self.direction > 0 { -width } else { canvas_width };
            let color = Color::hsl(rng.gen_range(0.0..360.0), 0.7, 0.5);
            log::debug!("row {} spawns vehicle at x={}", self.row, x);
            self.vehicles.push(Vehicle {
                x,
                width,
                height: grid - 2.0 * COLLISION_INSET as f32,
                speed: self.speed,
                direction: self.direction,
                color,
            });
        }

        for vehicle in &mut self.vehicles {
            vehicle.advance();
        }
        self.vehicles.retain(|v| !v.is_off_screen(canvas_width));
    }

    fn spawn_edge_clear(&self, grid: f32, canvas_width: f32) -> bool {
        let clearance = grid * SPAWN_CLEARANCE_CELLS;
        self.vehicles.iter().all(|v| {
            if self.direction > 0 {
                v.x >= clearance
            } else {
                v.x <= canvas_width - clearance
            }
        })
    }

    /// Whether any vehicle in this lane hits the player. Both rectangles are
    /// shrunk by a small inset so grazes are forgiven.
    pub fn collides_with(&self, player: &Player, grid: i32) -> bool {
        let lane_y = self.y(grid);
        let band_overlap = player.y() < lane_y + grid - COLLISION_INSET
            && player.y() + player.height() > lane_y + COLLISION_INSET;
        if !band_overlap {
            return false;
        }
        let inset = COLLISION_INSET as f32;
        let left = player.x() as f32 + inset;
        let right = (player.x() + player.width()) as f32 - inset;
        self.vehicles
            .iter()
            .any(|car| left < car.x + car.width - inset && right > car.x + inset)
    }

    pub fn draw_ground<S: Surface + ?Sized>(&self, surface: &mut S, config: &GameConfig) {
        let (top, edge) = self.ground.colors();
        let grid = config.grid_size as f32;
        let width = config.width() as f32;
        let y = self.y(config.grid_size) as f32;
        surface.set_fill(top);
        surface.fill_rect(0.0, y, width, grid);
        surface.set_fill(edge);
        surface.fill_rect(0.0, y + grid - EDGE_STRIP, width, EDGE_STRIP);
    }
}
