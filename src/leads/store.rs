//! Lead storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::tools::ToolKind;

/// A captured lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub email: String,
    pub tool: ToolKind,
    pub timestamp: DateTime<Utc>,
    /// What the lead analysed (URL, domain or keyword).
    pub source: Option<String>,
}

impl LeadRecord {
    pub fn new(email: impl Into<String>, tool: ToolKind, source: Option<String>) -> Self {
        Self {
            email: email.into(),
            tool,
            timestamp: Utc::now(),
            source,
        }
    }
}

/// Result of recording a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureOutcome {
    /// A new record was stored.
    Captured,
    /// The (email, tool) pair was already on file; nothing changed.
    AlreadyCaptured,
}

impl CaptureOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CaptureOutcome::Captured => "Successfully subscribed! Check your email for results.",
            CaptureOutcome::AlreadyCaptured => "Email already registered for this tool",
        }
    }
}

/// Storage for captured leads.
///
/// Implementations must keep at most one record per (email, tool) pair and
/// must decide "new or duplicate" atomically inside [`record`](Self::record).
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Stores `lead` unless its (email, tool) pair already exists.
    async fn record(&self, lead: LeadRecord) -> anyhow::Result<CaptureOutcome>;
    async fn exists(&self, email: &str, tool: ToolKind) -> anyhow::Result<bool>;
    /// Number of leads, optionally for one tool.
    async fn count(&self, tool: Option<ToolKind>) -> anyhow::Result<usize>;
    /// Leads in capture order, optionally for one tool.
    async fn list(&self, tool: Option<ToolKind>) -> anyhow::Result<Vec<LeadRecord>>;
}

/// Process-local lead store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryLeadStore {
    leads: Mutex<Vec<LeadRecord>>,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_tool(lead: &LeadRecord, tool: Option<ToolKind>) -> bool {
    tool.is_none_or(|t| lead.tool == t)
}

#[async_trait]
impl LeadRepository for InMemoryLeadStore {
    async fn record(&self, lead: LeadRecord) -> anyhow::Result<CaptureOutcome> {
        let mut leads = self.leads.lock().await;
        if leads
            .iter()
            .any(|l| l.email == lead.email && l.tool == lead.tool)
        {
            return Ok(CaptureOutcome::AlreadyCaptured);
        }
        leads.push(lead);
        Ok(CaptureOutcome::Captured)
    }

    async fn exists(&self, email: &str, tool: ToolKind) -> anyhow::Result<bool> {
        let leads = self.leads.lock().await;
        Ok(leads.iter().any(|l| l.email == email && l.tool == tool))
    }

    async fn count(&self, tool: Option<ToolKind>) -> anyhow::Result<usize> {
        let leads = self.leads.lock().await;
        Ok(leads.iter().filter(|l| matches_tool(l, tool)).count())
    }

    async fn list(&self, tool: Option<ToolKind>) -> anyhow::Result<Vec<LeadRecord>> {
        let leads = self.leads.lock().await;
        Ok(leads
            .iter()
            .filter(|l| matches_tool(l, tool))
            .cloned()
            .collect())
    }
}
