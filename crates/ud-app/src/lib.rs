//! UniDrop Application Orchestration Layer
//!
//! This crate contains the controller that owns all mutable state and
//! consumes user commands, plus the read-only projections it hands to the
//! presenter.

pub mod controller;
pub mod deps;
pub mod models;
pub mod ports;

pub use controller::DropController;
pub use deps::ControllerDeps;
