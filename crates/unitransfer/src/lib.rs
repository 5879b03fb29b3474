//! Core services for the UniTransfer student credit transfer portal.
//!
//! The `workflows::transfer` module carries the domain model, the persistence
//! seam with its two backends, and the pure view derivations behind the
//! student and admin screens. `config`, `telemetry`, and `error` provide the
//! shared application plumbing consumed by the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
