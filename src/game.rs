use crate::config::Params;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// State that outlives a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Left paddle's score, right paddle's score
    pub points: (u32, u32),
    pub serve_left: bool,
    pub ai: bool,
    pub ai_level: u8,
    pub sound_enabled: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(None, true)
    }
}

impl Game {
    /// An out-of-range level falls back to `AI_LVL_DEF`.
    pub fn new(ai_level: Option<u8>, sound_enabled: bool) -> Self {
        let level = ai_level
            .filter(|lvl| (1..=Params::AI_LVL_MAX).contains(lvl))
            .unwrap_or(Params::AI_LVL_DEF);

        Self {
            points: (0, 0),
            serve_left: false,
            ai: ai_level.is_some(),
            ai_level: level,
            sound_enabled,
        }
    }

    pub fn is_computer(&self, side: Side) -> bool {
        self.ai && side == Side::Left
    }

    /// Store the scores of a finished round and hand the serve to the other side.
    pub fn record_point(&mut self, points: (u32, u32)) {
        self.points = points;
        self.serve_left = !self.serve_left;
    }
}
