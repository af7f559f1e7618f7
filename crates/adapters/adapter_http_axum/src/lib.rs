//! # lamphub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the lamp device's **JSON contract** (`/status`, `/logs`,
//!   `/distance`, `/on`, `/off`) on top of any [`Lamp`](lamphub_app::ports::Lamp)
//! - Answer cross-origin requests, since the dashboard is served from a
//!   different origin than the device
//! - Optionally serve the built dashboard as static files on every other path
//!
//! ## Dependency rule
//! Depends on `lamphub-app` (for the `Lamp` port) and `lamphub-domain`
//! (for the wire records). Never leaks axum types into the domain.

pub mod api;
pub mod router;
pub mod state;
