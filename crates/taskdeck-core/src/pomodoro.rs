//! The focus-timer state machine. It owns no interval handle and performs
//! no I/O: transitions hand back the backend request (and, on completion,
//! the notification) for the caller to execute, which is what makes the
//! 25-minute cycle testable tick by tick.

use std::mem;

use thiserror::Error;
use tracing::{debug, info};

use crate::gateway::{self, ApiRequest};

/// Fixed session length: 25 minutes.
pub const SESSION_SECONDS: u32 = 25 * 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PomodoroError {
    #[error("Select a task")]
    NoTaskSelected,
    #[error("a session is already running")]
    AlreadyRunning,
}

/// User-facing completion notice, emitted exactly once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionNotice {
    pub title: &'static str,
    pub body: &'static str,
}

/// Everything the caller must do when a session ends: stop it on the
/// backend, show the notice, then refresh the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopOutcome {
    pub request: ApiRequest,
    pub notice: SessionNotice,
}

/// Result of one 1-second tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Ticked while idle; nothing to do.
    Ignored,
    /// Still counting down; remaining seconds after the decrement.
    Running(u32),
    /// The session just ended on this tick.
    Finished(StopOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    Running {
        task_id: String,
        session_id: String,
        remaining: u32,
    },
}

/// One countdown session bound to one task at a time.
///
/// Lifecycle: `begin` validates and yields the start request; once the
/// backend answers with a session id, `session_started` enters `Running`;
/// `tick` counts down; the finishing tick or an explicit `stop` yields the
/// single [`StopOutcome`] and returns the machine to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PomodoroTimer {
    state: State,
}

impl PomodoroTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        match &self.state {
            State::Idle => None,
            State::Running { remaining, .. } => Some(*remaining),
        }
    }

    /// Local validation only; the state does not change until the backend
    /// has answered with a session id.
    pub fn begin(&self, task_id: &str) -> Result<ApiRequest, PomodoroError> {
        if self.is_running() {
            return Err(PomodoroError::AlreadyRunning);
        }

        // pomodoro_start only fails validation: no task was selected.
        gateway::pomodoro_start(task_id).map_err(|error| {
            debug!(%error, "pomodoro start rejected locally");
            PomodoroError::NoTaskSelected
        })
    }

    /// Enter `Running` with a fresh 25-minute budget.
    pub fn session_started(&mut self, task_id: &str, session_id: &str) {
        info!(%task_id, %session_id, "pomodoro session started");
        self.state = State::Running {
            task_id: task_id.to_string(),
            session_id: session_id.to_string(),
            remaining: SESSION_SECONDS,
        };
    }

    /// One second elapsed. When the decrement would reach zero the session
    /// finishes instead; the counter never goes negative.
    pub fn tick(&mut self) -> Tick {
        let State::Running { remaining, .. } = &mut self.state else {
            return Tick::Ignored;
        };

        if *remaining <= 1 {
            return match self.finish() {
                Some(outcome) => Tick::Finished(outcome),
                None => Tick::Ignored,
            };
        }

        *remaining -= 1;
        Tick::Running(*remaining)
    }

    /// Explicit stop. Safe to call while idle: that is a no-op and returns
    /// `None`, with no backend call and no state change.
    pub fn stop(&mut self) -> Option<StopOutcome> {
        self.finish()
    }

    /// `MM:SS`, zero-padded; idle shows the full session length.
    pub fn display(&self) -> String {
        let remaining = self.remaining_seconds().unwrap_or(SESSION_SECONDS);
        format!("{:02}:{:02}", remaining / 60, remaining % 60)
    }

    fn finish(&mut self) -> Option<StopOutcome> {
        match mem::take(&mut self.state) {
            State::Idle => None,
            State::Running {
                task_id,
                session_id,
                ..
            } => {
                info!(%task_id, %session_id, "pomodoro session finished");
                Some(StopOutcome {
                    request: gateway::pomodoro_stop(&session_id),
                    notice: SessionNotice {
                        title: "Pomodoro finished",
                        body: "Well done — session logged!",
                    },
                })
            }
        }
    }
}
