//! Rule-based reasoning core for preliminary symptom-to-disease triage.
//!
//! The crate splits into a read-only [`knowledge`] catalog and the
//! [`consult`] workflow built on top of it: forward-chaining diagnosis,
//! backward-chaining verification, and descriptive pattern analysis, plus
//! the axum router that exposes them over HTTP.
//!
//! Nothing here is a medical device. The output is preliminary guidance
//! intended to be reviewed by a clinician.

pub mod config;
pub mod consult;
pub mod error;
pub mod knowledge;
pub mod telemetry;

pub use error::AppError;
