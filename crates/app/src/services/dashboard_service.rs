//! Dashboard service: the poll and command workflows.

use futures::future::try_join;

use lamphub_domain::command::LightCommand;
use lamphub_domain::distance::DistanceReading;
use lamphub_domain::error::DeviceError;

use crate::config::DashboardConfig;
use crate::dashboard::{CommandOutcome, PollOutcome, Snapshot};
use crate::ports::{DeviceApi, Timer};

/// Runs dashboard workflows against a device.
///
/// The service holds no dashboard state: each workflow returns an outcome
/// for the caller to apply to its [`DashboardState`](crate::dashboard::DashboardState).
#[derive(Debug, Clone)]
pub struct DashboardService<D, T> {
    api: D,
    timer: T,
    config: DashboardConfig,
}

impl<D: DeviceApi, T: Timer> DashboardService<D, T> {
    /// Create a new service talking to `api`.
    pub fn new(api: D, timer: T, config: DashboardConfig) -> Self {
        Self { api, timer, config }
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fetch status and logs concurrently.
    ///
    /// Fails as soon as either request fails.
    #[tracing::instrument(skip(self))]
    pub async fn poll(&self) -> PollOutcome {
        match try_join(self.api.fetch_status(), self.api.fetch_logs()).await {
            Ok((status, logs)) => Ok(Snapshot { status, logs }),
            Err(err) => {
                tracing::warn!(error = %err, "poll failed");
                Err(err)
            }
        }
    }

    /// Poll now, then again one refresh interval after each poll, forever.
    ///
    /// Every outcome is handed to `on_poll`; a failed poll never stops the
    /// loop. Drop (or abort) the future to stop polling.
    #[tracing::instrument(skip_all)]
    pub async fn run_polling<F>(&self, mut on_poll: F)
    where
        F: FnMut(PollOutcome),
    {
        loop {
            on_poll(self.poll().await);
            self.timer.sleep(self.config.refresh_interval).await;
        }
    }

    /// Send `command`, wait for the device to settle, then poll.
    ///
    /// When the command request fails the workflow stops immediately and no
    /// poll is made.
    #[tracing::instrument(skip(self))]
    pub async fn run_command(&self, command: LightCommand) -> CommandOutcome {
        let ack = match self.api.send(command).await {
            Ok(ack) => ack,
            Err(error) => {
                tracing::warn!(error = %error, "command failed");
                return CommandOutcome::Rejected { command, error };
            }
        };

        if ack.success {
            tracing::info!(message = %ack.message, "command acknowledged");
        } else {
            tracing::warn!(message = %ack.message, "device reported command failure");
        }

        self.timer.sleep(self.config.settle_delay).await;
        let poll = self.poll().await;
        CommandOutcome::Settled { command, ack, poll }
    }

    /// Read the distance sensor.
    ///
    /// # Errors
    ///
    /// Returns the [`DeviceError`] reported by the device client.
    #[tracing::instrument(skip(self))]
    pub async fn read_distance(&self) -> Result<DistanceReading, DeviceError> {
        self.api
            .fetch_distance()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "distance read failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TokioTimer;
    use lamphub_domain::command::ControlResponse;
    use lamphub_domain::endpoint::Endpoint;
    use lamphub_domain::log::{LogEntry, LogsResponse};
    use lamphub_domain::status::{LightState, Status};
    use std::future::Future;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::Instant;

    /// Scripted device: a shared lamp state plus switches to make calls fail.
    #[derive(Default)]
    struct ScriptedDevice {
        is_on: Mutex<bool>,
        fail_status: Mutex<bool>,
        fail_logs: Mutex<bool>,
        fail_commands: Mutex<bool>,
        calls: Mutex<Vec<(Endpoint, Instant)>>,
    }

    impl ScriptedDevice {
        fn record(&self, endpoint: Endpoint) {
            self.calls.lock().unwrap().push((endpoint, Instant::now()));
        }

        fn calls_to(&self, endpoint: Endpoint) -> Vec<Instant> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|(e, _)| *e == endpoint)
                .map(|(_, at)| *at)
                .collect()
        }

        fn failure(endpoint: Endpoint) -> DeviceError {
            DeviceError::Status {
                endpoint,
                status: 500,
                status_text: "Internal Server Error".to_string(),
            }
        }

        fn command(&self, endpoint: Endpoint, is_on: bool) -> Result<ControlResponse, DeviceError> {
            self.record(endpoint);
            if *self.fail_commands.lock().unwrap() {
                return Err(Self::failure(endpoint));
            }
            *self.is_on.lock().unwrap() = is_on;
            Ok(ControlResponse {
                success: true,
                message: format!("lamp {}", LightState::from_is_on(is_on)),
                is_on,
            })
        }
    }

    impl DeviceApi for ScriptedDevice {
        fn fetch_status(&self) -> impl Future<Output = Result<Status, DeviceError>> {
            self.record(Endpoint::Status);
            let result = if *self.fail_status.lock().unwrap() {
                Err(Self::failure(Endpoint::Status))
            } else {
                Ok(Status {
                    is_on: *self.is_on.lock().unwrap(),
                    ..Status::default()
                })
            };
            async { result }
        }

        fn fetch_logs(&self) -> impl Future<Output = Result<LogsResponse, DeviceError>> {
            self.record(Endpoint::Logs);
            let result = if *self.fail_logs.lock().unwrap() {
                Err(Self::failure(Endpoint::Logs))
            } else {
                Ok(LogsResponse {
                    logs: vec![LogEntry {
                        id: 1,
                        timestamp: 1_700_000_000_000,
                        duration: 12,
                        kind: LightState::On,
                    }],
                    total: 1,
                })
            };
            async { result }
        }

        fn fetch_distance(&self) -> impl Future<Output = Result<DistanceReading, DeviceError>> {
            self.record(Endpoint::Distance);
            async {
                Ok(DistanceReading {
                    distance: 31.5,
                    unit: "cm".to_string(),
                    timestamp: 1000,
                })
            }
        }

        fn turn_on(&self) -> impl Future<Output = Result<ControlResponse, DeviceError>> {
            let result = self.command(Endpoint::On, true);
            async { result }
        }

        fn turn_off(&self) -> impl Future<Output = Result<ControlResponse, DeviceError>> {
            let result = self.command(Endpoint::Off, false);
            async { result }
        }
    }

    fn make_service() -> DashboardService<ScriptedDevice, TokioTimer> {
        DashboardService::new(
            ScriptedDevice::default(),
            TokioTimer,
            DashboardConfig::default(),
        )
    }

    #[tokio::test]
    async fn should_return_snapshot_when_both_requests_succeed() {
        let service = make_service();
        let snapshot = service.poll().await.unwrap();
        assert!(!snapshot.status.is_on);
        assert_eq!(snapshot.logs.logs.len(), 1);
        assert_eq!(service.api.calls_to(Endpoint::Status).len(), 1);
        assert_eq!(service.api.calls_to(Endpoint::Logs).len(), 1);
    }

    #[tokio::test]
    async fn should_fail_poll_when_status_fails() {
        let service = make_service();
        *service.api.fail_status.lock().unwrap() = true;
        let err = service.poll().await.unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Status);
    }

    #[tokio::test]
    async fn should_fail_poll_when_logs_fail() {
        let service = make_service();
        *service.api.fail_logs.lock().unwrap() = true;
        let err = service.poll().await.unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Logs);
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_after_settle_delay_when_command_succeeds() {
        let service = make_service();

        let outcome = service.run_command(LightCommand::TurnOn).await;

        let CommandOutcome::Settled { command, ack, poll } = outcome else {
            panic!("expected settled outcome");
        };
        assert_eq!(command, LightCommand::TurnOn);
        assert!(ack.is_on);
        assert!(poll.unwrap().status.is_on);

        let sent = service.api.calls_to(Endpoint::On);
        let polled = service.api.calls_to(Endpoint::Status);
        assert_eq!(sent.len(), 1);
        assert_eq!(polled.len(), 1);
        assert!(polled[0] - sent[0] >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_poll_when_command_fails() {
        let service = make_service();
        *service.api.fail_commands.lock().unwrap() = true;
        let start = Instant::now();

        let outcome = service.run_command(LightCommand::TurnOff).await;

        assert!(matches!(
            outcome,
            CommandOutcome::Rejected {
                command: LightCommand::TurnOff,
                ..
            }
        ));
        assert!(service.api.calls_to(Endpoint::Status).is_empty());
        assert!(service.api.calls_to(Endpoint::Logs).is_empty());
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn should_report_failed_follow_up_poll() {
        let service = make_service();
        *service.api.fail_status.lock().unwrap() = true;

        let outcome = service.run_command(LightCommand::TurnOn).await;

        let CommandOutcome::Settled { poll, .. } = outcome else {
            panic!("expected settled outcome");
        };
        assert!(poll.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_polling_after_failures() {
        let service = make_service();
        *service.api.fail_status.lock().unwrap() = true;
        let mut outcomes = Vec::new();

        let polling = service.run_polling(|outcome| {
            outcomes.push(outcome.is_ok());
            *service.api.fail_status.lock().unwrap() = outcomes.len() < 2;
        });
        let _ = tokio::time::timeout(Duration::from_millis(9500), polling).await;

        assert_eq!(outcomes, vec![false, false, true, true]);
        let polled = service.api.calls_to(Endpoint::Status);
        assert_eq!(polled.len(), 4);
        assert_eq!(polled[1] - polled[0], Duration::from_millis(3000));
        assert_eq!(polled[3] - polled[2], Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_polling_when_aborted() {
        let service = make_service();
        let (polling, handle) = futures::future::abortable(service.run_polling(|_| {}));

        let (result, ()) = tokio::join!(polling, async {
            tokio::time::sleep(Duration::from_millis(3500)).await;
            handle.abort();
        });
        assert!(result.is_err());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(service.api.calls_to(Endpoint::Status).len(), 2);
    }

    #[tokio::test]
    async fn should_read_distance() {
        let service = make_service();
        let reading = service.read_distance().await.unwrap();
        assert_eq!(reading.unit, "cm");
        assert_eq!(service.api.calls_to(Endpoint::Distance).len(), 1);
    }
}
