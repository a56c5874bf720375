pub mod config;
pub mod entity;
pub mod input;
pub mod lane;
pub mod player;
pub mod world;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::engine::surface::Surface;
use crate::game::config::GameConfig;
use crate::game::entity::{sort_for_painting, Drawable};
use crate::game::input::Key;
use crate::game::player::{Character, Facing, Player};
use crate::game::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver,
}

/// One play session: world, player, score and mode.
pub struct Game {
    config: GameConfig,
    rng: SmallRng,
    mode: Mode,
    world: World,
    player: Player,
    selected: Character,
    score: u32,
    distance: u32,
    frame_count: u64,
}

impl Game {
    /// A session sitting in the menu with ambient traffic running.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let selected = config.character;
        let world = World::generate(&config, 0, &mut rng);
        let (col, row) = config.start_cell();
        let player = Player::new(selected, col, row, config.grid_size);
        Game {
            config,
            rng,
            mode: Mode::Menu,
            world,
            player,
            selected,
            score: 0,
            distance: 0,
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn selected_character(&self) -> Character {
        self.selected
    }

    /// Takes effect on the next `init_entities`.
    pub fn set_selected_character(&mut self, character: Character) {
        self.selected = character;
    }

    /// Resets score, distance and frame count, regenerates the whole world
    /// and places a fresh player on the start cell.
    pub fn init_entities(&mut self) {
        self.score = 0;
        self.distance = 0;
        self.frame_count = 0;
        self.world = World::generate(&self.config, 0, &mut self.rng);
        let (col, row) = self.config.start_cell();
        self.player = Player::new(self.selected, col, row, self.config.grid_size);
    }

    pub fn show_menu(&mut self) {
        self.init_entities();
        self.mode = Mode::Menu;
    }

    pub fn start_game(&mut self) {
        self.init_entities();
        self.mode = Mode::Playing;
        log::info!("game started as {}", self.selected);
    }

    pub fn restart(&mut self) {
        self.start_game();
    }

    /// Applies the keys that went down this tick.
    pub fn handle_input(&mut self, pressed: &[Key]) {
        for &key in pressed {
            match (self.mode, key) {
                (Mode::Playing, _) => {
                    if let Some((dx, dy)) = key.step() {
                        self.move_player(dx, dy);
                    }
                }
                (Mode::Menu, Key::Confirm) => self.start_game(),
                (Mode::GameOver, Key::Confirm | Key::Restart) => self.restart(),
                _ => {}
            }
        }
    }

    /// Moves the player one cell. Ignored outside `Playing`; blocked or
    /// out-of-bounds steps are dropped silently.
    pub fn move_player(&mut self, dx: i32, dy: i32) {
        if self.mode != Mode::Playing {
            return;
        }
        let Some(facing) = Facing::from_step(dx, dy) else {
            return;
        };
        self.player.facing = facing;
        let mut moved = false;

        if dx != 0 {
            let col = self.player.col + dx;
            if (0..self.config.cols).contains(&col) && !self.world.is_blocked(col, self.player.row) {
                self.player.col = col;
                moved = true;
            }
        }

        if dy != 0 {
            let row = self.player.row + dy;
            if !self.world.is_blocked(self.player.col, row) {
                if dy < 0 {
                    self.distance += 1;
                    self.score = self.score.max(self.distance);
                    if row < self.config.scroll_threshold_row {
                        self.world.scroll(self.score, &self.config, &mut self.rng);
                        moved = true;
                    } else if row >= 0 {
                        self.player.row = row;
                        moved = true;
                    }
                } else if row < self.config.rows {
                    self.player.row = row;
                    self.distance = self.distance.saturating_sub(1);
                    moved = true;
                }
            }
        }

        if moved {
            self.player.hop();
        }
    }

    pub fn update(&mut self) {
        if self.mode == Mode::GameOver {
            return;
        }
        self.frame_count += 1;
        self.world.update(&self.config, &mut self.rng);
        self.player.tick();

        if self.mode == Mode::Playing {
            let grid = self.config.grid_size;
            if self.world.lanes().any(|lane| lane.collides_with(&self.player, grid)) {
                self.mode = Mode::GameOver;
                log::info!("game over, score {}", self.score);
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for lane in self.world.lanes() {
            lane.draw_ground(surface, &self.config);
        }

        let grid = self.config.grid_size;
        let mut list = Vec::new();
        if matches!(self.mode, Mode::Menu | Mode::Playing) {
            list.push(Drawable::Player(&self.player));
        }
        for lane in self.world.lanes() {
            let y = lane.y(grid) as f32;
            for vehicle in lane.vehicles() {
                list.push(Drawable::Vehicle { vehicle, y, grid: grid as f32 });
            }
            for tree in lane.trees() {
                let x = (tree.col * grid) as f32;
                list.push(Drawable::Tree { tree, x, y, size: grid as f32 });
            }
        }

        sort_for_painting(&mut list);
        for item in &list {
            item.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Tree;
    use crate::game::lane::{Ground, Lane};

    fn open_field(config: &GameConfig) -> World {
        World::from_lanes(
            (0..config.rows).map(|r| Lane::empty(r, Ground::Safe)).collect(),
            config.rows,
        )
    }

    fn playing() -> Game {
        let config = GameConfig { seed: Some(17), ..GameConfig::default() };
        let mut game = Game::new(config);
        game.start_game();
        let field = open_field(game.config());
        *game.world_mut() = field;
        game
    }

    #[test]
    fn starts_in_menu_and_ignores_moves() {
        let mut game = Game::new(GameConfig { seed: Some(1), ..GameConfig::default() });
        assert_eq!(game.mode(), Mode::Menu);
        let before = (game.player().col, game.player().row);
        game.move_player(0, -1);
        assert_eq!((game.player().col, game.player().row), before);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn menu_keeps_traffic_running() {
        let mut game = Game::new(GameConfig { seed: Some(2), ..GameConfig::default() });
        for _ in 0..10 {
            game.update();
        }
        assert_eq!(game.frame_count(), 10);
        assert_eq!(game.mode(), Mode::Menu);
    }

    #[test]
    fn sideways_move_respects_edges() {
        let mut game = playing();
        for _ in 0..20 {
            game.move_player(-1, 0);
        }
        assert_eq!(game.player().col, 0);
        assert_eq!(game.player().facing, Facing::Left);
        for _ in 0..20 {
            game.move_player(1, 0);
        }
        assert_eq!(game.player().col, 11);
    }

    #[test]
    fn backward_move_stops_at_bottom_and_keeps_score() {
        let mut game = playing();
        game.move_player(0, -1);
        game.move_player(0, -1);
        assert_eq!((game.score(), game.distance()), (2, 2));
        for _ in 0..5 {
            game.move_player(0, 1);
        }
        assert_eq!(game.player().row, 15);
        assert_eq!(game.distance(), 0);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn tree_blocks_forward_step_without_scoring() {
        let mut game = playing();
        let (col, row) = (game.player().col, game.player().row);
        game.world_mut().lane_at_mut(row - 1).unwrap().push_tree(Tree { col });
        game.move_player(0, -1);
        assert_eq!(game.player().row, row);
        assert_eq!(game.score(), 0);
        assert_eq!(game.player().facing, Facing::Up);
    }

    #[test]
    fn tree_blocks_backward_step_without_losing_distance() {
        let mut game = playing();
        game.move_player(0, -1);
        let (col, row) = (game.player().col, game.player().row);
        assert_eq!(game.distance(), 1);
        game.world_mut().lane_at_mut(row + 1).unwrap().push_tree(Tree { col });

        game.move_player(0, 1);
        assert_eq!(game.player().row, row);
        assert_eq!(game.distance(), 1);
        assert_eq!(game.score(), 1);
        assert_eq!(game.player().facing, Facing::Down);
    }

    #[test]
    fn input_drives_mode_transitions() {
        let mut game = Game::new(GameConfig { seed: Some(4), ..GameConfig::default() });
        game.handle_input(&[Key::Up]);
        assert_eq!(game.mode(), Mode::Menu);
        game.handle_input(&[Key::Confirm]);
        assert_eq!(game.mode(), Mode::Playing);
        let field = open_field(game.config());
        *game.world_mut() = field;
        game.handle_input(&[Key::Up]);
        assert_eq!(game.score(), 1);
        game.handle_input(&[Key::Restart]);
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn selection_applies_on_next_start() {
        let mut game = Game::new(GameConfig { seed: Some(5), ..GameConfig::default() });
        game.set_selected_character(Character::Cow);
        assert_eq!(game.player().character, Character::Pig);
        game.start_game();
        assert_eq!(game.player().character, Character::Cow);
        assert_eq!(game.selected_character(), Character::Cow);
    }
}
