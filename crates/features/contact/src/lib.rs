//! Contact feature slice: validates `#contactForm` without sending anything.
//!
//! Submitting checks every field, styles exactly the failing ones and, when all pass,
//! shows a toast for a fixed time and resets the form. Blurring a field re-checks it;
//! typing clears its error styling without re-checking.

mod error;
pub mod validation;
#[cfg(feature = "web")]
pub mod web;

pub use crate::error::{ContactError, ContactErrorExt};
pub use crate::validation::{FieldIssue, FieldKind, is_email, validate};

use folio_domain::config::ContactConfig;
use folio_kernel::KernelError;
use folio_kernel::scheduler::Scheduler;
use std::fmt::Debug;
use tracing::{debug, info, warn};

pub const TOAST_MESSAGE: &str = "✓ Message sent successfully!";
pub const TOAST_STYLE: &str = "position:fixed;top:20px;right:20px;background:#4CAF50;color:white;\
padding:1rem 2rem;border-radius:8px;z-index:10000;font-weight:600;\
animation:slideInRight 0.5s ease;";
pub const ERROR_BORDER_COLOR: &str = "#ff4444";
pub const ERROR_BOX_SHADOW: &str = "0 0 10px rgba(255, 68, 68, 0.2)";

/// One `input` or `textarea` of the form.
pub trait FormField: Debug {
    fn kind(&self) -> FieldKind;

    fn value(&self) -> String;

    /// Applies the error styling, or removes it when `invalid` is `false`.
    ///
    /// # Errors
    /// Returns [`KernelError`] if the style could not be changed.
    fn mark(&self, invalid: bool) -> Result<(), KernelError>;
}

/// The form element and its surroundings.
pub trait FormView: Debug {
    /// # Errors
    /// Returns [`KernelError`] if the form could not be reset.
    fn reset(&self) -> Result<(), KernelError>;

    /// Shows the success toast and returns the closure that removes it.
    ///
    /// # Errors
    /// Returns [`KernelError`] if the toast could not be attached to the page.
    fn show_toast(&self, message: &str) -> Result<Box<dyn FnOnce()>, KernelError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Sent,
    /// Field indices that failed, in document order.
    Rejected { invalid: Vec<usize> },
}

#[folio_derive::controller(name = "contact")]
pub struct ContactForm {
    fields: Vec<Box<dyn FormField>>,
    view: Box<dyn FormView>,
    scheduler: Box<dyn Scheduler>,
    message_min_chars: usize,
    toast_duration_ms: u32,
}

impl ContactForm {
    #[must_use]
    pub fn start(
        fields: Vec<Box<dyn FormField>>,
        view: Box<dyn FormView>,
        scheduler: Box<dyn Scheduler>,
        config: &ContactConfig,
    ) -> Self {
        debug!(fields = fields.len(), "Contact form found");
        Self::new(ContactFormState {
            fields,
            view,
            scheduler,
            message_min_chars: config.message_min_chars,
            toast_duration_ms: config.toast_duration_ms,
        })
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.with(|state| state.fields.len())
    }

    /// Validates and styles every field; on success shows the toast and resets the form.
    pub fn submit(&self) -> Submission {
        self.with(|state| {
            let invalid: Vec<usize> = state
                .fields
                .iter()
                .enumerate()
                .filter_map(|(index, field)| {
                    let valid = state.check(field.as_ref());
                    state.style(field.as_ref(), !valid);
                    (!valid).then_some(index)
                })
                .collect();

            if invalid.is_empty() {
                state.accept();
                Submission::Sent
            } else {
                debug!(?invalid, "Contact form rejected");
                Submission::Rejected { invalid }
            }
        })
    }

    /// Re-validates one field. Returns `None` for an unknown index.
    pub fn blur(&self, index: usize) -> Option<bool> {
        self.with(|state| {
            let field = state.fields.get(index)?;
            let valid = state.check(field.as_ref());
            state.style(field.as_ref(), !valid);
            Some(valid)
        })
    }

    /// Clears one field's error styling while the user types.
    pub fn input(&self, index: usize) {
        self.with(|state| {
            if let Some(field) = state.fields.get(index) {
                state.style(field.as_ref(), false);
            }
        });
    }
}

impl ContactFormState {
    fn check(&self, field: &dyn FormField) -> bool {
        match validate(field.kind(), &field.value(), self.message_min_chars) {
            Ok(()) => true,
            Err(issue) => {
                debug!(kind = %field.kind(), %issue, "Field rejected");
                false
            },
        }
    }

    fn style(&self, field: &dyn FormField, invalid: bool) {
        if let Err(err) = field.mark(invalid) {
            warn!(%err, invalid, "Failed to style field");
        }
    }

    fn accept(&self) {
        info!("Contact form passed validation");
        match self.view.show_toast(TOAST_MESSAGE) {
            Ok(dismiss) => {
                if let Err(err) = self.scheduler.timeout(self.toast_duration_ms, dismiss) {
                    warn!(%err, "Failed to schedule toast removal");
                }
            },
            Err(err) => warn!(%err, "Failed to show toast"),
        }
        if let Err(err) = self.view.reset() {
            warn!(%err, "Failed to reset contact form");
        }
    }
}
