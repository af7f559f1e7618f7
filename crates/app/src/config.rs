//! Dashboard timing and display constants.

use std::time::Duration;

use lamphub_domain::log::HISTORY_LIMIT;

/// Interval between two scheduled polls.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(3000);

/// Wait between a command acknowledgement and the follow-up poll, giving the
/// device time to update its own state.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Static dashboard settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub refresh_interval: Duration,
    pub settle_delay: Duration,
    /// Maximum number of history rows shown.
    pub history_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            settle_delay: DEFAULT_SETTLE_DELAY,
            history_limit: HISTORY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_device_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(3));
        assert_eq!(config.settle_delay, Duration::from_millis(500));
        assert_eq!(config.history_limit, 10);
    }
}
