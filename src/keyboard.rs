use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};

use crate::input::{HeldKeys, Input, Key, Signal};

/// Without release events a key counts as held this long after its last press
/// or auto-repeat.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Terminal keyboard.
///
/// Left paddle: W/S. Right paddle: Up/Down. Space, Pause or P pauses, Esc, Q or
/// Ctrl+C exits.
#[derive(Debug)]
pub struct Keyboard {
    pressed_at: [Option<Instant>; 4],
    /// The terminal reports key releases.
    releases: bool,
}

impl Keyboard {
    pub fn new() -> io::Result<Self> {
        let releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if releases {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
        }
        tracing::debug!(releases, "keyboard ready");

        Ok(Self::with_releases(releases))
    }

    fn with_releases(releases: bool) -> Self {
        Self {
            pressed_at: [None; 4],
            releases,
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) -> Option<Signal> {
        if let Some(key) = paddle_key(key_event.code) {
            match key_event.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.pressed_at[key.index()] = Some(now)
                }
                KeyEventKind::Release => self.pressed_at[key.index()] = None,
            }
            return None;
        }

        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Signal::Exit),
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Signal::Exit)
            }
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Pause => Some(Signal::Pause),
            _ => None,
        }
    }

    fn handle_event(&mut self, event: Event, now: Instant) -> Option<Signal> {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event, now),
            _ => None,
        }
    }

    fn held_at(&self, now: Instant) -> HeldKeys {
        Key::ALL
            .into_iter()
            .filter(|key| match self.pressed_at[key.index()] {
                Some(_) if self.releases => true,
                Some(at) => now.duration_since(at) < HOLD_WINDOW,
                None => false,
            })
            .fold(HeldKeys::none(), HeldKeys::with)
    }
}

impl Input for Keyboard {
    fn held(&self) -> HeldKeys {
        self.held_at(Instant::now())
    }

    fn poll(&mut self) -> io::Result<Vec<Signal>> {
        let mut signals = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(signal) = self.handle_event(event::read()?, Instant::now()) {
                signals.push(signal);
            }
        }
        Ok(signals)
    }

    fn wait(&mut self) -> io::Result<Signal> {
        loop {
            if let Some(signal) = self.handle_event(event::read()?, Instant::now()) {
                return Ok(signal);
            }
        }
    }
}

impl Drop for Keyboard {
    fn drop(&mut self) {
        if self.releases {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
    }
}

fn paddle_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::LeftUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::LeftDown),
        KeyCode::Up => Some(Key::RightUp),
        KeyCode::Down => Some(Key::RightDown),
        _ => None,
    }
}
