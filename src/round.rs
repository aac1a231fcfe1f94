use std::{io, thread, time::Duration};

use rand::Rng;

use crate::{
    audio::Audio,
    ball::Ball,
    config::{Params, Rules},
    display::{Display, Scene},
    game::{Game, Side},
    input::{HeldKeys, Input, Signal},
    paddle::Paddle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Running,
    Paused,
    RoundOver,
    Exit,
}

/// How a call to [`play_round`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Scored(Side),
    Exit,
}

pub trait Timer {
    fn wait(&mut self, duration: Duration);
}

#[derive(Debug, Default)]
pub struct SleepTimer;

impl Timer for SleepTimer {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// One serve, played until somebody scores.
#[derive(Debug, Clone)]
pub struct Round {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    state: RoundState,
    start_points: (u32, u32),
}

impl Round {
    pub fn new<R: Rng + ?Sized>(game: &Game, rules: &Rules, rng: &mut R) -> Self {
        Self {
            ball: Ball::serve(rules, game.serve_left, rng),
            left: Paddle::new(Side::Left, rules, game.points.0),
            right: Paddle::new(Side::Right, rules, game.points.1),
            state: RoundState::Running,
            start_points: game.points,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.left.score, self.right.score)
    }

    pub fn handle(&mut self, signal: Signal) {
        self.state = match (self.state, signal) {
            (RoundState::RoundOver, _) | (RoundState::Exit, _) => self.state,
            (_, Signal::Exit) => RoundState::Exit,
            (RoundState::Running, Signal::Pause) => RoundState::Paused,
            (RoundState::Paused, Signal::Pause) => RoundState::Running,
        };

        match self.state {
            RoundState::Paused => tracing::debug!("paused"),
            RoundState::Running => tracing::debug!("resumed"),
            RoundState::Exit => tracing::debug!("exit requested"),
            RoundState::RoundOver => {}
        }
    }

    /// Advance the physics by one tick. Does nothing unless running.
    ///
    /// When a point is scored the round is over and `game` receives the new
    /// scores; the paddles are left untouched on that tick.
    pub fn tick<A: Audio + ?Sized>(
        &mut self,
        game: &mut Game,
        rules: &Rules,
        keys: HeldKeys,
        sfx: &mut A,
    ) -> RoundState {
        if self.state != RoundState::Running {
            return self.state;
        }

        self.ball.advance();
        self.ball.collide_wall(rules, sfx);
        self.ball.collide_end(rules, &mut self.left, &mut self.right);

        if self.scores() != self.start_points {
            game.record_point(self.scores());
            self.state = RoundState::RoundOver;
            return self.state;
        }

        self.left.step(&self.ball, game, keys, rules);
        self.left.collide_ball(&mut self.ball, rules, sfx);
        self.right.step(&self.ball, game, keys, rules);
        self.right.collide_ball(&mut self.ball, rules, sfx);

        self.state
    }

    pub fn scene(&self) -> Scene {
        Scene {
            ball: self.ball.bounds,
            left: self.left.bounds,
            right: self.right.bounds,
            scores: self.scores(),
        }
    }

    fn scorer(&self) -> Side {
        if self.left.score != self.start_points.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Platform pieces the game loop talks to.
pub struct Platform<'a> {
    pub input: &'a mut dyn Input,
    pub display: &'a mut dyn Display,
    pub audio: &'a mut dyn Audio,
    pub timer: &'a mut dyn Timer,
}

/// Run the tick loop for `round` until a point is scored or the player exits.
pub fn play_round(
    mut round: Round,
    game: &mut Game,
    rules: &Rules,
    platform: &mut Platform<'_>,
) -> io::Result<RoundEnd> {
    loop {
        for signal in platform.input.poll()? {
            round.handle(signal);
            while round.state() == RoundState::Paused {
                let signal = platform.input.wait()?;
                round.handle(signal);
            }
            if round.state() == RoundState::Exit {
                return Ok(RoundEnd::Exit);
            }
        }

        let keys = platform.input.held();
        if round.tick(game, rules, keys, &mut *platform.audio) == RoundState::RoundOver {
            let scorer = round.scorer();
            tracing::info!(
                scorer = scorer.name(),
                left = game.points.0,
                right = game.points.1,
                "point scored"
            );
            return Ok(RoundEnd::Scored(scorer));
        }

        platform.display.render(&round.scene())?;
        platform.timer.wait(Params::TICK);
    }
}

/// Play rounds back to back until the player exits.
pub fn play_match<R: Rng + ?Sized>(
    game: &mut Game,
    rules: &Rules,
    platform: &mut Platform<'_>,
    rng: &mut R,
) -> io::Result<()> {
    loop {
        let round = Round::new(game, rules, rng);
        match play_round(round, game, rules, platform)? {
            RoundEnd::Exit => return Ok(()),
            RoundEnd::Scored(_) => platform.timer.wait(Params::SERVE_DELAY),
        }
    }
}
