//! Dashboard state machine: what the view shows and how outcomes update it.
//!
//! The state is owned by the front-end (a reactive signal in the browser)
//! and mutated only through the methods below:
//!
//! - [`DashboardState::apply_poll`] after every scheduled or follow-up poll
//! - [`DashboardState::begin_command`] when a button is pressed
//! - [`DashboardState::finish_command`] when the command workflow ends
//!
//! Polls are never coordinated with each other: whichever outcome is
//! applied last wins.

use std::fmt;
use std::fmt::Display;

use chrono::TimeZone;

use lamphub_domain::command::{ControlResponse, LightCommand};
use lamphub_domain::error::DeviceError;
use lamphub_domain::log::{self, LogEntry, LogsResponse};
use lamphub_domain::status::{LightState, Status};
use lamphub_domain::time::{duration_suffix, time_of_day};

/// User-facing error banner.
///
/// Every [`DeviceError`] collapses into one of these three messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardError {
    /// A poll failed.
    Connection,
    /// `POST /on` failed.
    TurnOn,
    /// `POST /off` failed.
    TurnOff,
}

impl DashboardError {
    #[must_use]
    pub fn command_failed(command: LightCommand) -> Self {
        match command {
            LightCommand::TurnOn => Self::TurnOn,
            LightCommand::TurnOff => Self::TurnOff,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Connection => "Erro ao conectar com Arduino",
            Self::TurnOn => "Erro ao ligar",
            Self::TurnOff => "Erro ao desligar",
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a successful poll: both records fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub status: Status,
    pub logs: LogsResponse,
}

/// Outcome of a poll, applied with [`DashboardState::apply_poll`].
pub type PollOutcome = Result<Snapshot, DeviceError>;

/// Outcome of a command workflow, applied with [`DashboardState::finish_command`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The command request itself failed; no follow-up poll was made.
    Rejected {
        command: LightCommand,
        error: DeviceError,
    },
    /// The device acknowledged the command, the settle delay elapsed and a
    /// follow-up poll ran.
    Settled {
        command: LightCommand,
        ack: ControlResponse,
        poll: PollOutcome,
    },
}

/// Which control buttons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub turn_on: bool,
    pub turn_off: bool,
}

impl Controls {
    /// Whether the button for `command` is enabled.
    #[must_use]
    pub fn allows(self, command: LightCommand) -> bool {
        match command {
            LightCommand::TurnOn => self.turn_on,
            LightCommand::TurnOff => self.turn_off,
        }
    }
}

/// A history entry prepared for display.
///
/// Hashes over every field: a device reusing an id (after a reboot, or when
/// it fills in a duration) yields a different row, not a stale one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryRow {
    pub id: u64,
    pub state: LightState,
    /// Localised `HH:MM` time of day.
    pub time: String,
    /// `"<n>s"` when the entry carries a duration.
    pub duration: Option<String>,
}

/// Everything the dashboard view renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    status: Option<Status>,
    logs: Vec<LogEntry>,
    error: Option<DashboardError>,
    busy: bool,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successfully polled status, `None` before the first success.
    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Full log list from the last successful poll.
    #[must_use]
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    #[must_use]
    pub fn error(&self) -> Option<DashboardError> {
        self.error
    }

    /// Whether a command is in flight or settling.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Displayed light state; off until a status has been received.
    #[must_use]
    pub fn light_state(&self) -> LightState {
        self.status
            .as_ref()
            .map_or(LightState::Off, Status::light_state)
    }

    /// Button enablement: at most one of the two is enabled, none while busy.
    #[must_use]
    pub fn controls(&self) -> Controls {
        let is_on = self.light_state().is_on();
        Controls {
            turn_on: !self.busy && !is_on,
            turn_off: !self.busy && is_on,
        }
    }

    /// Apply a poll outcome.
    ///
    /// Success replaces status and logs wholesale and clears the banner.
    /// Failure keeps the previous data on screen and shows the connection
    /// banner.
    pub fn apply_poll(&mut self, outcome: PollOutcome) {
        match outcome {
            Ok(snapshot) => {
                self.status = Some(snapshot.status);
                self.logs = snapshot.logs.logs;
                self.error = None;
            }
            Err(_) => self.error = Some(DashboardError::Connection),
        }
    }

    /// Mark `command` as in flight.
    ///
    /// Returns `false`, leaving the state untouched, when the matching button
    /// is disabled.
    pub fn begin_command(&mut self, command: LightCommand) -> bool {
        if !self.controls().allows(command) {
            return false;
        }
        self.busy = true;
        true
    }

    /// Apply the outcome of a command workflow and clear the busy flag.
    pub fn finish_command(&mut self, outcome: CommandOutcome) {
        match outcome {
            CommandOutcome::Rejected { command, .. } => {
                self.error = Some(DashboardError::command_failed(command));
            }
            CommandOutcome::Settled { poll, .. } => self.apply_poll(poll),
        }
        self.busy = false;
    }

    /// First `limit` log entries formatted for display in `tz`.
    #[must_use]
    pub fn history_rows<Tz>(&self, limit: usize, tz: &Tz) -> Vec<HistoryRow>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        log::recent(&self.logs, limit)
            .iter()
            .map(|entry| HistoryRow {
                id: entry.id,
                state: entry.kind,
                time: time_of_day(entry.timestamp, tz),
                duration: duration_suffix(entry.duration),
            })
            .collect()
    }
}
