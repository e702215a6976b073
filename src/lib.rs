//! Time Metrics Calculation Engine for employee attendance tracking.
//!
//! This crate derives worked-hours metrics (regular, overtime, night differential,
//! late and undertime minutes) from a punch-in/punch-out pair evaluated against a
//! recurring daily shift schedule in an IANA timezone.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
