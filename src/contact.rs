//! Contact form core: field data, validation rules, and the
//! submit/auto-reset state machine.
//!
//! Framework-free so any view layer can embed it and tests can drive it
//! without a browser. The Leptos component in `app::contact` is one host.

pub mod controller;
pub mod form;

pub use controller::{ContactFormController, DeliverMessage, DeliveryError, LogDelivery, ResetTimer};
pub use form::{validate, Field, FormFields, SubmissionState, ValidationErrors};
