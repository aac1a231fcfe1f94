//! spong - a simple Pong clone for the terminal.
//!
//! The physics live in [`ball`], [`paddle`] and [`round`]; the terminal is
//! reached only through the [`input::Input`], [`display::Display`],
//! [`audio::Audio`] and [`round::Timer`] traits.

pub mod audio;
pub mod ball;
pub mod cli;
pub mod config;
pub mod display;
pub mod game;
pub mod geometry;
pub mod helpers;
pub mod input;
pub mod keyboard;
pub mod paddle;
pub mod round;
pub mod screen;

pub use crate::{
    config::{Config, Params, Rules},
    game::{Game, Side},
    round::{play_match, play_round, Platform, Round, RoundEnd, RoundState},
};
