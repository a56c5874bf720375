use std::collections::VecDeque;

use rand::Rng;

use crate::game::config::GameConfig;
use crate::game::lane::Lane;

/// The visible window of lanes, ordered top (row 0) to bottom.
#[derive(Clone, Debug)]
pub struct World {
    lanes: VecDeque<Lane>,
    rows: i32,
}

impl World {
    /// Fills every visible row with a freshly generated lane.
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, score: u32, rng: &mut R) -> Self {
        let lanes = (0..config.rows)
            .map(|row| Lane::generate(row, score, config, rng))
            .collect();
        World { lanes, rows: config.rows }
    }

    /// Builds a world from prepared lanes. They must cover `0..rows` in order.
    pub fn from_lanes(lanes: Vec<Lane>, rows: i32) -> Self {
        debug_assert!(lanes.iter().map(|l| l.row).eq(0..rows));
        World { lanes: lanes.into(), rows }
    }

    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    pub fn lanes_mut(&mut self) -> impl Iterator<Item = &mut Lane> {
        self.lanes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn lane_at(&self, row: i32) -> Option<&Lane> {
        let idx = usize::try_from(row).ok()?;
        self.lanes.get(idx).filter(|l| l.row == row)
    }

    pub fn lane_at_mut(&mut self, row: i32) -> Option<&mut Lane> {
        let idx = usize::try_from(row).ok()?;
        self.lanes.get_mut(idx).filter(|l| l.row == row)
    }

    /// Whether a tree occupies the cell at `(col, row)`.
    pub fn is_blocked(&self, col: i32, row: i32) -> bool {
        self.lane_at(row).is_some_and(|lane| lane.tree_at(col))
    }

    /// Row index of every lane, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = i32> + '_ {
        self.lanes.iter().map(|l| l.row)
    }

    /// Moves the window one row forward: every lane slides down one row, the
    /// bottom lane drops off and a new lane is generated at the top.
    pub fn scroll<R: Rng + ?Sized>(&mut self, score: u32, config: &GameConfig, rng: &mut R) {
        for lane in &mut self.lanes {
            lane.row += 1;
        }
        while self.lanes.back().is_some_and(|l| l.row >= self.rows) {
            self.lanes.pop_back();
        }
        self.lanes.push_front(Lane::generate(0, score, config, rng));
        log::debug!("world scrolled, score {}", score);
    }

    pub fn update<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        for lane in &mut self.lanes {
            lane.update(config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Tree;
    use crate::game::lane::Ground;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn generate_tiles_the_screen() {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let world = World::generate(&config, 0, &mut rng);
        assert_eq!(world.len(), 16);
        assert!(world.rows().eq(0..16));
    }

    #[test]
    fn scroll_keeps_tiling_and_moves_contents() {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut lanes: Vec<Lane> = (0..config.rows).map(|r| Lane::empty(r, Ground::Safe)).collect();
        lanes[3].push_tree(Tree { col: 7 });
        let mut world = World::from_lanes(lanes, config.rows);

        world.scroll(0, &config, &mut rng);

        assert!(world.rows().eq(0..16));
        assert!(world.is_blocked(7, 4));
        assert!(!world.is_blocked(7, 3));
    }

    #[test]
    fn lookup_rejects_out_of_range_rows() {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let world = World::generate(&config, 0, &mut rng);
        assert!(world.lane_at(-1).is_none());
        assert!(world.lane_at(16).is_none());
        assert_eq!(world.lane_at(5).map(|l| l.row), Some(5));
    }
}
