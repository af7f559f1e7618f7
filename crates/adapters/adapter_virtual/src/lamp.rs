//! Virtual lamp: responds to `TurnOn`, `TurnOff` and distance observations.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use lamphub_app::ports::Lamp;
use lamphub_domain::command::{ControlResponse, LightCommand};
use lamphub_domain::distance::DistanceReading;
use lamphub_domain::log::{LogEntry, LogsResponse};
use lamphub_domain::status::{LightState, Status};

/// Tunables of the simulated firmware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampConfig {
    /// Distance (cm) below which presence is detected in automatic mode.
    pub presence_threshold_cm: f64,
    /// Number of log entries kept in memory.
    pub log_capacity: usize,
    /// Sensor reading reported before any observation.
    pub initial_distance_cm: f64,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            presence_threshold_cm: 50.0,
            log_capacity: 50,
            initial_distance_cm: 120.0,
        }
    }
}

/// A simulated lamp with the firmware's counters and activation log.
pub struct VirtualLamp {
    config: LampConfig,
    booted_at: Instant,
    state: Mutex<LampState>,
}

struct LampState {
    is_on: bool,
    manual_mode: bool,
    total_activations: u64,
    /// Time lit across finished sessions.
    completed_on: Duration,
    session_started: Option<Instant>,
    distance_cm: f64,
    distance_at: Instant,
    /// Newest first.
    logs: VecDeque<LogEntry>,
    recorded: u64,
}

impl Default for VirtualLamp {
    fn default() -> Self {
        Self::new(LampConfig::default())
    }
}

impl VirtualLamp {
    #[must_use]
    pub fn new(config: LampConfig) -> Self {
        let now = Instant::now();
        Self {
            config,
            booted_at: now,
            state: Mutex::new(LampState {
                is_on: false,
                manual_mode: false,
                total_activations: 0,
                completed_on: Duration::ZERO,
                session_started: None,
                distance_cm: config.initial_distance_cm,
                distance_at: now,
                logs: VecDeque::with_capacity(config.log_capacity),
                recorded: 0,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Feed a sensor reading.
    ///
    /// In automatic mode the lamp follows presence: on below the threshold,
    /// off at or above it. In manual mode the reading is only stored.
    /// Returns the new light state when the reading switched the lamp.
    pub fn observe_distance(&self, distance_cm: f64) -> Option<LightState> {
        let now = Instant::now();
        let mut state = self.lock_state();
        state.distance_cm = distance_cm;
        state.distance_at = now;
        if state.manual_mode {
            return None;
        }
        let present = distance_cm < self.config.presence_threshold_cm;
        match (present, state.is_on) {
            (true, false) => {
                self.switch_on(&mut state, now);
                tracing::debug!(distance_cm, "presence detected, lamp on");
                Some(LightState::On)
            }
            (false, true) => {
                self.switch_off(&mut state, now);
                tracing::debug!(distance_cm, "presence lost, lamp off");
                Some(LightState::Off)
            }
            _ => None,
        }
    }

    fn switch_on(&self, state: &mut LampState, now: Instant) {
        state.is_on = true;
        state.total_activations += 1;
        state.session_started = Some(now);
        self.record(state, now, LightState::On, Duration::ZERO);
    }

    fn switch_off(&self, state: &mut LampState, now: Instant) {
        let session = state
            .session_started
            .take()
            .map_or(Duration::ZERO, |started| now - started);
        state.is_on = false;
        state.completed_on += session;
        self.record(state, now, LightState::Off, session);
    }

    fn record(&self, state: &mut LampState, now: Instant, kind: LightState, duration: Duration) {
        state.recorded += 1;
        state.logs.push_front(LogEntry {
            id: state.recorded,
            timestamp: self.device_millis(now),
            duration: duration.as_secs(),
            kind,
        });
        state.logs.truncate(self.config.log_capacity);
    }

    fn device_millis(&self, at: Instant) -> u64 {
        u64::try_from((at - self.booted_at).as_millis()).unwrap_or(u64::MAX)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LampState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Lamp for VirtualLamp {
    fn status(&self) -> Status {
        let now = Instant::now();
        let state = self.lock_state();
        let session = state
            .session_started
            .map_or(Duration::ZERO, |started| now - started);
        let total_on = state.completed_on + session;
        #[allow(clippy::cast_precision_loss)]
        let average_time_on = if state.total_activations == 0 {
            0.0
        } else {
            total_on.as_secs_f64() / state.total_activations as f64
        };
        Status {
            is_on: state.is_on,
            total_activations: state.total_activations,
            total_time_on: total_on.as_secs(),
            uptime: (now - self.booted_at).as_secs(),
            current_distance: state.distance_cm,
            manual_mode: state.manual_mode,
            average_time_on,
            current_session_duration: session.as_secs(),
        }
    }

    fn logs(&self) -> LogsResponse {
        let state = self.lock_state();
        LogsResponse {
            logs: state.logs.iter().cloned().collect(),
            total: state.recorded,
        }
    }

    fn distance(&self) -> DistanceReading {
        let state = self.lock_state();
        DistanceReading {
            distance: state.distance_cm,
            unit: "cm".to_string(),
            timestamp: self.device_millis(state.distance_at),
        }
    }

    fn apply(&self, command: LightCommand) -> ControlResponse {
        let now = Instant::now();
        let mut state = self.lock_state();
        let message = match (command, state.is_on) {
            (LightCommand::TurnOn, false) => {
                self.switch_on(&mut state, now);
                state.manual_mode = true;
                "Lâmpada ligada"
            }
            (LightCommand::TurnOff, true) => {
                self.switch_off(&mut state, now);
                state.manual_mode = false;
                "Lâmpada desligada"
            }
            (LightCommand::TurnOn, true) => "Lâmpada já está ligada",
            (LightCommand::TurnOff, false) => "Lâmpada já está desligada",
        };
        tracing::info!(%command, is_on = state.is_on, "manual command applied");
        ControlResponse {
            success: true,
            message: message.to_string(),
            is_on: state.is_on,
        }
    }
}
