//! # Domain Models
//!
//! This crate contains pure page types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no browser bindings or timers, just data, the DOM contract and the
//! one-shot reveal state machine shared by the visibility-driven controllers.

pub mod config;
pub mod constants;
pub mod features;
pub mod registry;
pub mod reveal;
