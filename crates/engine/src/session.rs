//! Single-writer game session
//!
//! A [`Session`] owns the current [`State`] and applies commands strictly one
//! at a time. Each command computes the successor from the current value and
//! replaces it; a command with no legal effect leaves the state untouched.
//!
//! The gravity step is the ordered fallback chain: move down, else lock and
//! spawn the next piece, else lock and stop (game over).

use serde::Serialize;

use crate::core::{Rules, State};
use crate::types::{Command, LockEvent};

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state advanced
    Applied,
    /// The command was rejected; the state is unchanged
    NoEffect,
    /// The game ended on this command
    GameOver,
}

/// Lifecycle events, for logs and observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Started,
    Locked(LockEvent),
    GameOver { score: u32, lines: u32 },
    Stopped { score: u32, lines: u32 },
}

#[derive(Debug, Clone)]
pub struct Session {
    state: State,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new(rules: Rules) -> Self {
        Self {
            state: State::with_rules(rules),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn into_state(self) -> State {
        self.state
    }

    /// Take the events produced since the last call
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a command
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Tick => self.gravity(),
            Command::MoveLeft => self.replace(self.state.try_move_left()),
            Command::MoveRight => self.replace(self.state.try_move_right()),
            Command::SoftDrop => self.replace(self.state.try_move_down()),
            Command::Rotate => self.replace(self.state.try_rotate()),
        }
    }

    fn replace(&mut self, next: Option<State>) -> Outcome {
        match next {
            Some(state) => {
                self.state = state;
                Outcome::Applied
            }
            None => Outcome::NoEffect,
        }
    }

    /// A running game is never restarted; stop it first
    fn start(&mut self) -> Outcome {
        if self.state.is_running() {
            return Outcome::NoEffect;
        }
        let started = self.state.start();
        self.events.push(SessionEvent::Started);
        match started.new_tetramino() {
            Some(state) => {
                self.state = state;
                Outcome::Applied
            }
            None => self.game_over(started),
        }
    }

    fn stop(&mut self) -> Outcome {
        if !self.state.is_running() {
            return Outcome::NoEffect;
        }
        self.state = self.state.stop();
        self.events.push(SessionEvent::Stopped {
            score: self.state.score(),
            lines: self.state.lines(),
        });
        Outcome::Applied
    }

    fn gravity(&mut self) -> Outcome {
        if !self.state.is_running() {
            return Outcome::NoEffect;
        }

        if let Some(next) = self.state.try_move_down() {
            self.state = next;
            return Outcome::Applied;
        }

        let had_piece = self.state.active().is_some();
        if let Some(next) = self.state.new_tetramino() {
            if had_piece {
                self.record_lock(&next);
            }
            self.state = next;
            return Outcome::Applied;
        }

        // Spawn blocked: land the last piece so the final stage and score
        // include it, then stop.
        let last = match self.state.lock_active() {
            Some(locked) => {
                self.record_lock(&locked);
                locked
            }
            None => self.state.clone(),
        };
        self.game_over(last)
    }

    fn record_lock(&mut self, state: &State) {
        if let Some(lock) = state.last_lock() {
            self.events.push(SessionEvent::Locked(lock));
        }
    }

    fn game_over(&mut self, last: State) -> Outcome {
        self.state = last.stop();
        self.events.push(SessionEvent::GameOver {
            score: self.state.score(),
            lines: self.state.lines(),
        });
        Outcome::GameOver
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
