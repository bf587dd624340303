//! Lead capture.
//!
//! Emails submitted alongside tool requests are recorded once per
//! (email, tool) pair. Storage sits behind [`LeadRepository`]; the bundled
//! [`InMemoryLeadStore`] keeps leads for the life of the process.

mod capture;
mod store;

pub use capture::{capture_lead, is_valid_email, upgrade_message};
pub use store::{CaptureOutcome, InMemoryLeadStore, LeadRecord, LeadRepository};
