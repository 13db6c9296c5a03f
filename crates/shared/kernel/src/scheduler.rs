//! Timer port.
//!
//! Controllers never call `setTimeout`/`setInterval` directly; they go through a
//! [`Scheduler`] so the same code runs against the browser (`web::BrowserScheduler`)
//! and against a simulated clock in tests (`testing::ManualScheduler`).

use crate::KernelError;
use std::fmt::Debug;

/// What an interval task wants after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

pub trait Scheduler: Debug {
    /// Runs `task` once after `delay_ms`.
    ///
    /// # Errors
    /// Returns [`KernelError`] if the timer could not be registered.
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Result<(), KernelError>;

    /// Runs `task` every `period_ms` until it returns [`Tick::Stop`].
    ///
    /// # Errors
    /// Returns [`KernelError`] if the timer could not be registered.
    fn interval(&self, period_ms: u32, task: Box<dyn FnMut() -> Tick>) -> Result<(), KernelError>;
}
