//! Build-time dashboard settings.

use lamphub_domain::endpoint::BaseUrl;
use lamphub_domain::error::ValidationError;

/// Device address used when `LAMPHUB_DEVICE_URL` is not set at build time.
pub const DEFAULT_DEVICE_URL: &str = "http://10.37.0.178";

/// Base URL of the device, baked in at compile time.
///
/// # Errors
///
/// Returns a [`ValidationError`] when `LAMPHUB_DEVICE_URL` is not a valid
/// `http(s)` URL.
pub fn device_url() -> Result<BaseUrl, ValidationError> {
    BaseUrl::parse(option_env!("LAMPHUB_DEVICE_URL").unwrap_or(DEFAULT_DEVICE_URL))
}
