use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::color::Color;
use crate::engine::cube::draw_cube;
use crate::engine::surface::Surface;
use crate::error::ConfigError;
use crate::game::entity::SPRITE_CELL;

const HOP_FRAMES: u8 = 8;
const HOP_HEIGHT: f32 = 6.0;
const INSET: i32 = 5;

const EYE_WHITE: Color = Color::WHITE;
const ORANGE: Color = Color::hex(0xff9800);
const RED: Color = Color::hex(0xff0000);
const NOSTRIL: Color = Color::hex(0xb04060);
const HORN: Color = Color::hex(0xdddddd);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    Pig,
    Chicken,
    Duck,
    Cow,
}

pub struct Palette {
    pub body: Color,
    pub dark: Color,
    pub detail: Color,
    pub eye: Color,
}

impl Character {
    pub const ALL: [Character; 4] = [Character::Pig, Character::Chicken, Character::Duck, Character::Cow];

    pub fn name(self) -> &'static str {
        match self {
            Character::Pig => "pig",
            Character::Chicken => "chicken",
            Character::Duck => "duck",
            Character::Cow => "cow",
        }
    }

    pub fn palette(self) -> Palette {
        let (body, dark, detail) = match self {
            Character::Pig => (0xffb6c1, 0xe08ba3, 0xff69b4),
            Character::Chicken => (0xffffff, 0xdddddd, 0xff0000),
            Character::Duck => (0xffeb3b, 0xfdd835, 0xff9800),
            Character::Cow => (0xeeeeee, 0xbdbdbd, 0x222222),
        };
        Palette {
            body: Color::hex(body),
            dark: Color::hex(dark),
            detail: Color::hex(detail),
            eye: Color::BLACK,
        }
    }

    fn is_bird(self) -> bool {
        matches!(self, Character::Chicken | Character::Duck)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Character {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Character::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownCharacter(s.to_string()))
    }
}

/// Which way the sprite looks. `Down` faces the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing for a one-cell step; `None` for a zero step.
    pub fn from_step(dx: i32, dy: i32) -> Option<Facing> {
        if dy < 0 {
            Some(Facing::Up)
        } else if dy > 0 {
            Some(Facing::Down)
        } else if dx < 0 {
            Some(Facing::Left)
        } else if dx > 0 {
            Some(Facing::Right)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub col: i32,
    pub row: i32,
    pub facing: Facing,
    pub character: Character,
    grid: i32,
    hop_frame: u8,
}

impl Player {
    pub fn new(character: Character, col: i32, row: i32, grid: i32) -> Self {
        Player { col, row, facing: Facing::Down, character, grid, hop_frame: 0 }
    }

    pub fn x(&self) -> i32 {
        self.col * self.grid
    }

    pub fn y(&self) -> i32 {
        self.row * self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid - 2 * INSET
    }

    pub fn height(&self) -> i32 {
        self.grid - 2 * INSET
    }

    pub fn render_y(&self) -> f32 {
        (self.y() + self.height()) as f32
    }

    pub fn hop(&mut self) {
        self.hop_frame = HOP_FRAMES;
    }

    pub fn tick(&mut self) {
        self.hop_frame = self.hop_frame.saturating_sub(1);
    }

    /// Vertical draw offset of the hop animation; zero or negative (upward).
    pub fn offset_y(&self) -> f32 {
        if self.hop_frame == 0 {
            return 0.0;
        }
        let t = 1.0 - self.hop_frame as f32 / HOP_FRAMES as f32;
        -(t * std::f32::consts::PI).sin() * HOP_HEIGHT * self.scale()
    }

    /// Ratio of the configured cell to the cell the sprite is laid out on.
    fn scale(&self) -> f32 {
        self.grid as f32 / SPRITE_CELL
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let k = self.scale();
        let cx = self.x() as f32 + INSET as f32 * k;
        let cy = self.y() as f32 + INSET as f32 * k + self.offset_y();
        let pal = self.character.palette();
        let rect = |surface: &mut S, color: Color, x: f32, y: f32, w: f32, h: f32| {
            surface.set_fill(color);
            surface.fill_rect(cx + x * k, cy + y * k, w * k, h * k);
        };
        let cube = |surface: &mut S, color: Color, x: f32, y: f32, w: f32, h: f32, d: f32| {
            draw_cube(surface, cx + x * k, cy + y * k, w * k, h * k, d * k, color);
        };

        // Legs
        let leg = if self.character.is_bird() { ORANGE } else { pal.dark };
        cube(surface, leg, 4.0, 22.0, 6.0, 8.0, 4.0);
        cube(surface, leg, 20.0, 22.0, 6.0, 8.0, 4.0);

        cube(surface, pal.body, 0.0, 0.0, 32.0, 24.0, 20.0);

        match self.facing {
            Facing::Down => {
                rect(surface, EYE_WHITE, 4.0, 6.0, 8.0, 5.0);
                rect(surface, EYE_WHITE, 20.0, 6.0, 8.0, 5.0);
                if self.character == Character::Cow {
                    rect(surface, pal.eye, 4.0, 7.0, 3.0, 3.0);
                    rect(surface, pal.eye, 25.0, 7.0, 3.0, 3.0);
                } else {
                    rect(surface, pal.eye, 6.0, 7.0, 4.0, 4.0);
                    rect(surface, pal.eye, 22.0, 7.0, 4.0, 4.0);
                }
                match self.character {
                    Character::Pig => {
                        rect(surface, pal.detail, 10.0, 14.0, 12.0, 6.0);
                        rect(surface, NOSTRIL, 12.0, 16.0, 3.0, 3.0);
                        rect(surface, NOSTRIL, 17.0, 16.0, 3.0, 3.0);
                    }
                    Character::Chicken => {
                        // wattles under the beak
                        rect(surface, RED, 14.0, 16.0, 4.0, 6.0);
                        rect(surface, ORANGE, 12.0, 12.0, 8.0, 5.0);
                    }
                    Character::Duck => rect(surface, pal.detail, 10.0, 14.0, 12.0, 5.0),
                    Character::Cow => {
                        rect(surface, pal.detail, 8.0, 16.0, 16.0, 6.0);
                        cube(surface, HORN, -2.0, -4.0, 6.0, 8.0, 4.0);
                        cube(surface, HORN, 28.0, -4.0, 6.0, 8.0, 4.0);
                    }
                }
            }
            Facing::Left => {
                rect(surface, EYE_WHITE, 8.0, 6.0, 8.0, 5.0);
                rect(surface, pal.eye, 8.0, 7.0, 4.0, 4.0);
                if self.character.is_bird() {
                    rect(surface, ORANGE, 0.0, 14.0, 6.0, 4.0);
                }
            }
            Facing::Right => {
                rect(surface, EYE_WHITE, 16.0, 6.0, 8.0, 5.0);
                rect(surface, pal.eye, 20.0, 7.0, 4.0, 4.0);
                if self.character.is_bird() {
                    rect(surface, ORANGE, 28.0, 14.0, 6.0, 4.0);
                }
            }
            Facing::Up => {
                if self.character == Character::Pig {
                    rect(surface, pal.detail, 14.0, 18.0, 4.0, 4.0);
                }
            }
        }

        if self.character == Character::Chicken {
            // comb
            rect(surface, RED, 12.0, -6.0, 8.0, 6.0);
        }
    }
}
