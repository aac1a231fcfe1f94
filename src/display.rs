use std::io;

use crate::{
    config::{Params, Rules},
    geometry::Aabb,
};

/// Everything that changes between two frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub ball: Aabb,
    pub left: Aabb,
    pub right: Aabb,
    /// Left paddle's score, right paddle's score
    pub scores: (u32, u32),
}

pub trait Display {
    fn render(&mut self, scene: &Scene) -> io::Result<()>;
}

/// Dashed line down the middle of the board. Decoration only.
pub fn net(rules: &Rules) -> Vec<Aabb> {
    let step = Params::NET_HEIGHT / 2.0;
    let x = rules.board_width / 2.0 - Params::NET_WIDTH / 2.0;

    let mut segments = Vec::new();
    let mut idx = 1.0;
    while idx * step <= rules.board_height {
        segments.push(Aabb::new(x, idx * step, Params::NET_WIDTH, Params::NET_HEIGHT));
        idx += 4.0;
    }
    segments
}
