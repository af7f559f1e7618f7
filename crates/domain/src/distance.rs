//! Distance sensor reading returned by `GET /distance`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceReading {
    pub distance: f64,
    /// Unit of `distance`, `"cm"` on the stock firmware.
    pub unit: String,
    /// Device clock in milliseconds when the reading was taken.
    pub timestamp: u64,
}

impl DistanceReading {
    /// Reading rendered as `"<value> <unit>"` with one decimal place.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:.1} {}", self.distance, self.unit)
    }
}
