//! Synthetic distance sensor: a triangle wave between two bounds, and the
//! background task feeding it to a lamp.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::lamp::VirtualLamp;

/// Endless sequence of distance readings sweeping back and forth between
/// `min_cm` and `max_cm` in fixed steps.
///
/// Fed to [`VirtualLamp::observe_distance`](crate::VirtualLamp::observe_distance)
/// it simulates someone walking up to the lamp and away again.
#[derive(Debug, Clone)]
pub struct DistanceSweep {
    min_cm: f64,
    max_cm: f64,
    step_cm: f64,
    current: f64,
    rising: bool,
}

impl DistanceSweep {
    /// Start at `max_cm`, walking towards `min_cm`.
    ///
    /// Bounds are swapped when given in the wrong order; a non-positive step
    /// yields a constant reading.
    #[must_use]
    pub fn new(min_cm: f64, max_cm: f64, step_cm: f64) -> Self {
        let (min_cm, max_cm) = if min_cm <= max_cm {
            (min_cm, max_cm)
        } else {
            (max_cm, min_cm)
        };
        Self {
            min_cm,
            max_cm,
            step_cm: step_cm.max(0.0),
            current: max_cm,
            rising: false,
        }
    }
}

impl Iterator for DistanceSweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let reading = self.current;
        if self.rising {
            self.current += self.step_cm;
            if self.current >= self.max_cm {
                self.current = self.max_cm;
                self.rising = false;
            }
        } else {
            self.current -= self.step_cm;
            if self.current <= self.min_cm {
                self.current = self.min_cm;
                self.rising = true;
            }
        }
        Some(reading)
    }
}

/// Spawn a task observing one `sweep` reading every `period`.
///
/// The first reading is taken immediately. Abort the returned handle to
/// stop the sweep.
pub fn spawn_sweep(
    lamp: Arc<VirtualLamp>,
    sweep: DistanceSweep,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        for distance_cm in sweep {
            ticker.tick().await;
            if let Some(state) = lamp.observe_distance(distance_cm) {
                tracing::info!(distance_cm, state = %state, "sensor switched lamp");
            }
        }
    })
}
