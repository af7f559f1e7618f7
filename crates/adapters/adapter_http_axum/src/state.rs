//! Shared application state for axum handlers.

use std::sync::Arc;

use lamphub_app::ports::Lamp;

/// State shared across all device handlers.
///
/// `Clone` is implemented manually so the lamp type itself does not need to
/// be `Clone`: only the `Arc` wrapper is cloned.
pub struct DeviceState<L> {
    /// The lamp answering the device endpoints.
    pub lamp: Arc<L>,
}

impl<L> Clone for DeviceState<L> {
    fn clone(&self) -> Self {
        Self {
            lamp: Arc::clone(&self.lamp),
        }
    }
}

impl<L: Lamp + 'static> DeviceState<L> {
    /// Create a new state owning `lamp`.
    pub fn new(lamp: L) -> Self {
        Self {
            lamp: Arc::new(lamp),
        }
    }

    /// Create a new state from a lamp already shared with background tasks.
    pub fn from_arc(lamp: Arc<L>) -> Self {
        Self { lamp }
    }
}
