use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    WallBounce,
    PaddleBounce,
}

/// Fire-and-forget sound effects.
pub trait Audio {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell for every cue that is not muted.
#[derive(Debug)]
pub struct Mixer<W: Write> {
    out: W,
    wall_muted: bool,
    paddle_muted: bool,
}

impl Mixer<io::Stdout> {
    pub fn new(sound_enabled: bool) -> Self {
        Self::with_writer(io::stdout(), sound_enabled)
    }
}

impl<W: Write> Mixer<W> {
    pub fn with_writer(out: W, sound_enabled: bool) -> Self {
        Self {
            out,
            wall_muted: !sound_enabled,
            paddle_muted: !sound_enabled,
        }
    }

    pub fn set_muted(&mut self, cue: Cue, muted: bool) {
        match cue {
            Cue::WallBounce => self.wall_muted = muted,
            Cue::PaddleBounce => self.paddle_muted = muted,
        }
    }

    pub fn is_muted(&self, cue: Cue) -> bool {
        match cue {
            Cue::WallBounce => self.wall_muted,
            Cue::PaddleBounce => self.paddle_muted,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Audio for Mixer<W> {
    fn play(&mut self, cue: Cue) {
        if self.is_muted(cue) {
            return;
        }
        let rung = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = rung {
            tracing::debug!(?cue, error = %e, "could not ring bell");
        }
    }
}
