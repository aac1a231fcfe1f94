use crate::{
    audio::{Audio, Cue},
    ball::Ball,
    config::Rules,
    game::{Game, Side},
    geometry::Aabb,
    input::HeldKeys,
};

/// Which part of the paddle the ball struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Long edge, ball goes back the way it came.
    Face,
    /// Short edge, only the vertical direction changes.
    Edge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub bounds: Aabb,
    pub score: u32,
    side: Side,
    /// -1 up, +1 down
    direction: i8,
    is_moving: bool,
}

impl Paddle {
    /// A paddle at its starting spot, vertically centered.
    pub fn new(side: Side, rules: &Rules, score: u32) -> Self {
        let x = match side {
            Side::Left => rules.paddle_offset,
            Side::Right => rules.board_width - rules.paddle_width - rules.paddle_offset,
        };
        let y = rules.board_height / 2.0 - rules.paddle_height / 2.0;

        Self {
            bounds: Aabb::new(x, y, rules.paddle_width, rules.paddle_height),
            score,
            side,
            direction: 1,
            is_moving: false,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Move the paddle one tick.
    ///
    /// The computer follows the ball's center, but only once the ball is inside
    /// its reaction zone. A higher level widens the zone. Players steer with the
    /// held keys. Either way the paddle never starts a move past the board edge.
    pub fn step(&mut self, ball: &Ball, game: &Game, keys: HeldKeys, rules: &Rules) {
        self.is_moving = false;

        let can_go_up = self.bounds.top() > 0.0;
        let can_go_down = self.bounds.bottom() < rules.board_height;

        let (wants_up, wants_down) = if game.is_computer(self.side) {
            let zone = rules.board_width * game.ai_level as f32 / rules.ai_level_max as f32;
            let in_zone = ball.bounds.center_x() < zone;
            let paddle_y = self.bounds.center_y();
            let ball_y = ball.bounds.center_y();
            (in_zone && paddle_y > ball_y, in_zone && paddle_y < ball_y)
        } else {
            (keys.up(self.side), keys.down(self.side))
        };

        if can_go_up && wants_up {
            self.direction = -1;
            self.is_moving = true;
        }
        if can_go_down && wants_down {
            self.direction = 1;
            self.is_moving = true;
        }

        if self.is_moving {
            self.bounds = self
                .bounds
                .translated(0.0, self.direction as f32 * rules.paddle_speed);
        }
    }

    /// Bounce the ball if it is about to run into the paddle.
    ///
    /// The test uses the ball's position after its next step so a fast ball
    /// cannot pass through the paddle between two ticks.
    pub fn collide_ball<A: Audio + ?Sized>(
        &self,
        ball: &mut Ball,
        rules: &Rules,
        sfx: &mut A,
    ) -> Option<Hit> {
        if !self.bounds.overlaps(&ball.next_bounds()) {
            return None;
        }

        sfx.play(Cue::PaddleBounce);
        ball.increase_speed(rules);

        let behind_face = match self.side {
            Side::Left => ball.bounds.left() < self.bounds.right(),
            Side::Right => ball.bounds.right() > self.bounds.left(),
        };

        let hit = if behind_face {
            ball.velocity.y = -ball.velocity.y;
            Hit::Edge
        } else {
            if self.is_moving {
                ball.velocity.y = self.spin(ball.velocity.y);
            }
            ball.velocity.x = -ball.velocity.x;
            Hit::Face
        };

        tracing::trace!(
            side = self.side.name(),
            ?hit,
            vx = ball.velocity.x,
            vy = ball.velocity.y,
            "paddle hit"
        );
        Some(hit)
    }

    /// Vertical speed after a face hit from a moving paddle. Never zero, so the
    /// ball does not fly straight across.
    fn spin(&self, vy: f32) -> f32 {
        if self.direction < 0 {
            let vy = vy + 1.0;
            if vy == 0.0 {
                vy - 1.0
            } else {
                vy
            }
        } else {
            let vy = vy - 1.0;
            if vy == 0.0 {
                vy + 1.0
            } else {
                vy
            }
        }
    }
}
