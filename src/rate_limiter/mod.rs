//! Free-tier request quotas.
//!
//! Each (client, tool) pair gets a rolling window of request instants. A
//! request is admitted while the window holds fewer entries than the tool's
//! ceiling; entries age out after the window length (24 hours by default).
//! There is no fixed reset time and no background task: stale entries are
//! dropped when their key is next touched, and idle keys are swept once the
//! table grows past a threshold.

mod quota;
mod window;

pub use quota::{DailyQuota, QuotaDecision};
