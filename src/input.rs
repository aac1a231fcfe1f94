use std::io;

use crate::game::Side;

/// Paddle movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::LeftUp, Key::LeftDown, Key::RightUp, Key::RightDown];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One-shot commands from the event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Pause,
    /// Exit key or a request to close the game.
    Exit,
}

/// Snapshot of the paddle keys currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys([bool; 4]);

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: Key) -> Self {
        self.0[key.index()] = true;
        self
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0[key.index()]
    }

    pub fn up(&self, side: Side) -> bool {
        match side {
            Side::Left => self.is_held(Key::LeftUp),
            Side::Right => self.is_held(Key::RightUp),
        }
    }

    pub fn down(&self, side: Side) -> bool {
        match side {
            Side::Left => self.is_held(Key::LeftDown),
            Side::Right => self.is_held(Key::RightDown),
        }
    }
}

pub trait Input {
    /// Paddle keys held right now.
    fn held(&self) -> HeldKeys;

    /// Drain pending events without blocking.
    fn poll(&mut self) -> io::Result<Vec<Signal>>;

    /// Block until the next signal arrives.
    fn wait(&mut self) -> io::Result<Signal>;
}
