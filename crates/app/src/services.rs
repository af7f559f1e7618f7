//! Application services: use-case orchestration.

pub mod dashboard_service;
