use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Restart,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value. Letters match case-insensitively.
    pub fn from_dom(name: &str) -> Option<Key> {
        match name.to_ascii_lowercase().as_str() {
            "w" | "arrowup" => Some(Key::Up),
            "s" | "arrowdown" => Some(Key::Down),
            "a" | "arrowleft" => Some(Key::Left),
            "d" | "arrowright" => Some(Key::Right),
            "enter" | " " => Some(Key::Confirm),
            "r" => Some(Key::Restart),
            _ => None,
        }
    }

    /// Grid step for movement keys.
    pub fn step(self) -> Option<(i32, i32)> {
        match self {
            Key::Up => Some((0, -1)),
            Key::Down => Some((0, 1)),
            Key::Left => Some((-1, 0)),
            Key::Right => Some((1, 0)),
            Key::Confirm | Key::Restart => None,
        }
    }

    /// Whether the browser's default action (page scrolling) should be
    /// suppressed for this DOM key.
    pub fn suppresses_default(name: &str) -> bool {
        matches!(
            name.to_ascii_lowercase().as_str(),
            "arrowup" | "arrowdown" | "arrowleft" | "arrowright" | " "
        )
    }
}

/// Raw key state written by event listeners between ticks.
///
/// Held keys are tracked by lowercased DOM name, so `w` and `ArrowUp` are
/// separate physical keys even though both map to [`Key::Up`]. Every
/// released-to-pressed transition latches a tap that survives until the next
/// snapshot, even when the key is released again before the tick.
#[derive(Default, Debug)]
pub struct KeyboardState {
    held: HashSet<String>,
    tapped: HashSet<Key>,
}

/// Keys down at a tick plus the presses latched since the previous tick.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct KeySnapshot {
    pub down: HashSet<Key>,
    pub taps: HashSet<Key>,
}

impl KeyboardState {
    /// Records a keydown. Auto-repeat events for a key already held are ignored.
    pub fn press(&mut self, name: &str) {
        let Some(key) = Key::from_dom(name) else {
            return;
        };
        if self.held.insert(name.to_ascii_lowercase()) {
            self.tapped.insert(key);
        }
    }

    pub fn release(&mut self, name: &str) {
        self.held.remove(&name.to_ascii_lowercase());
    }

    /// Keys considered down for this tick; clears latched taps.
    pub fn snapshot(&mut self) -> KeySnapshot {
        KeySnapshot {
            down: self.held.iter().filter_map(|name| Key::from_dom(name)).collect(),
            taps: std::mem::take(&mut self.tapped),
        }
    }
}

/// Turns per-tick key snapshots into released-to-pressed edges.
#[derive(Default, Debug)]
pub struct InputTracker {
    previous: HashSet<Key>,
}

impl InputTracker {
    pub fn just_pressed(&mut self, current: KeySnapshot) -> Vec<Key> {
        let KeySnapshot { down, mut taps } = current;
        taps.extend(down.difference(&self.previous).copied());
        let mut edges: Vec<Key> = taps.into_iter().collect();
        // HashSet order is arbitrary; keep moves deterministic within a tick
        edges.sort_by_key(|k| *k as u8);
        self.previous = down;
        edges
    }
}
