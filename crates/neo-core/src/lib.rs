//! # neo-core
//!
//! Core types for near-Earth object close-approach search.
//!
//! This crate defines the types shared by the index, query and CLI crates:
//! - [`CelestialBody`]: a tracked object keyed by unique name
//! - [`ApproachEvent`]: one recorded close approach of a body
//! - [`EntityKind`]: which of the two a query targets or returns
//! - Fixed-width date handling ([`date`])
//! - Error hierarchy ([`NeoError`], [`ConfigError`])

pub mod approach;
pub mod body;
pub mod date;
pub mod error;
pub mod kind;

pub use approach::ApproachEvent;
pub use body::{CelestialBody, Diameter, Hazard};
pub use error::{ConfigError, NeoError, Result};
pub use kind::EntityKind;
