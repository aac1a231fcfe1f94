use rand::Rng;

use crate::{
    audio::{Audio, Cue},
    config::Rules,
    geometry::Aabb,
    paddle::Paddle,
};

const SERVE_SPEEDS_Y: [f32; 4] = [-2.0, -1.0, 1.0, 2.0];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub bounds: Aabb,
    pub velocity: Velocity,
}

impl Ball {
    pub fn new(x: f32, y: f32, velocity: Velocity, rules: &Rules) -> Self {
        Self {
            bounds: Aabb::new(x, y, rules.ball_size, rules.ball_size),
            velocity,
        }
    }

    /// A ball in the middle of the board, heading away from the serving side.
    pub fn serve<R: Rng + ?Sized>(rules: &Rules, serve_left: bool, rng: &mut R) -> Self {
        let x = if serve_left {
            -rules.ball_speed
        } else {
            rules.ball_speed
        };
        let y = SERVE_SPEEDS_Y[rng.random_range(0..SERVE_SPEEDS_Y.len())];

        Self::new(
            rules.board_width / 2.0 - rules.ball_size / 2.0,
            rules.board_height / 2.0 - rules.ball_size / 2.0,
            Velocity { x, y },
            rules,
        )
    }

    /// Where the ball will be after the next `advance`.
    pub fn next_bounds(&self) -> Aabb {
        self.bounds.translated(self.velocity.x, self.velocity.y)
    }

    pub fn advance(&mut self) {
        self.bounds = self.next_bounds();
    }

    /// Bounce off the top or bottom wall. Returns true if the ball bounced.
    pub fn collide_wall<A: Audio + ?Sized>(&mut self, rules: &Rules, sfx: &mut A) -> bool {
        if self.bounds.top() < 0.0 || self.bounds.bottom() > rules.board_height {
            self.velocity.y = -self.velocity.y;
            sfx.play(Cue::WallBounce);
            tracing::trace!(y = self.bounds.y, "wall bounce");
            return true;
        }
        false
    }

    /// Award a point when the ball has crossed an end wall.
    pub fn collide_end(&self, rules: &Rules, left: &mut Paddle, right: &mut Paddle) {
        if self.bounds.left() < 0.0 {
            right.score += 1;
        } else if self.bounds.right() > rules.board_width {
            left.score += 1;
        }
    }

    /// Horizontal speed grows on every paddle hit, keeping its direction.
    pub fn increase_speed(&mut self, rules: &Rules) {
        if self.velocity.x > 0.0 {
            self.velocity.x += rules.ball_speed_increase;
        } else {
            self.velocity.x -= rules.ball_speed_increase;
        }
    }
}
