use thiserror::Error;
use wasm_bindgen::JsValue;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be positive, got {0}")]
    GridSize(i32),
    #[error("playfield needs at least {min} {axis}, got {got}")]
    TooSmall { axis: &'static str, min: i32, got: i32 },
    #[error("scroll threshold row {row} is outside 1..{rows}")]
    ScrollThreshold { row: i32, rows: i32 },
    #[error("{name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
    #[error("playfield of {cols}x{rows} cells at {grid_size} px does not fit in pixels")]
    TooLarge { cols: i32, rows: i32, grid_size: i32 },
    #[error("at most {cols} trees fit in a lane, got {got}")]
    MaxTrees { cols: i32, got: u32 },
    #[error("difficulty step must be a finite non-negative number, got {0}")]
    DifficultyStep(f64),
    #[error("maximum difficulty must be at least 1.0, got {0}")]
    MaxDifficulty(f64),
    #[error("unknown character `{0}`")]
    UnknownCharacter(String),
    #[error("malformed config: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("missing page element `{0}`")]
    MissingElement(&'static str),
    #[error("2D canvas context unavailable")]
    ContextUnavailable,
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
