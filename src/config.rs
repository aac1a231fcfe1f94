use std::time::Duration;

use crate::game::Game;

pub const PRG_NAME: &str = "spong";

/// Fixed game tuning values
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const WIN_WIDTH: u16 = 560;
    pub const WIN_HEIGHT: u16 = 320;
    pub const MIN_WIDTH: u16 = 120;
    pub const MIN_HEIGHT: u16 = 80;

    // Net
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_HEIGHT: f32 = 20.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 2.0;
    pub const BALL_SPEED_INCREASE: f32 = 0.2;

    // Paddle
    pub const PADDLE_WIDTH: f32 = Self::BALL_SIZE;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_SPEED: f32 = Self::BALL_SPEED;
    pub const PADDLE_OFFSET: f32 = 30.0;

    // Computer opponent
    pub const AI_LVL_DEF: u8 = 2;
    pub const AI_LVL_MAX: u8 = 4;

    // Timing
    pub const TICK: Duration = Duration::from_millis(10);
    pub const SERVE_DELAY: Duration = Duration::from_millis(1000);
}

/// Physics values handed to the ball and the paddles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub board_width: f32,
    pub board_height: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_speed_increase: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_offset: f32,
    pub ai_level_max: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self::with_board(Params::WIN_WIDTH, Params::WIN_HEIGHT)
    }
}

impl Rules {
    pub fn with_board(width: u16, height: u16) -> Self {
        Self {
            board_width: width as f32,
            board_height: height as f32,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_offset: Params::PADDLE_OFFSET,
            ai_level_max: Params::AI_LVL_MAX,
        }
    }

    pub fn board(&self) -> (f32, f32) {
        (self.board_width, self.board_height)
    }
}

/// Startup options, built once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    /// `Some(level)` when the left paddle is computer controlled.
    pub ai_level: Option<u8>,
    pub sound: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::WIN_WIDTH,
            height: Params::WIN_HEIGHT,
            ai_level: None,
            sound: true,
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules::with_board(self.width, self.height)
    }

    pub fn new_game(&self) -> Game {
        Game::new(self.ai_level, self.sound)
    }
}
