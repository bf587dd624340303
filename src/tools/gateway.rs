//! Tool orchestration: validate, charge quota, run, capture lead, respond.

use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

use super::kind::ToolKind;
use super::reports::{BacklinkReport, KeywordReport, MetaReport, WebsiteAnalysis};
use super::request::ToolRequest;
use super::validate::{validate_domain, validate_keyword, validate_url};
use crate::error_handling::{
    CounterSet, ErrorType, InfoType, LeadError, ProcessingStats, ToolError, WarningType,
};
use crate::fetch::{fetch_page, FetchResult};
use crate::leads::{
    capture_lead, upgrade_message, CaptureOutcome, InMemoryLeadStore, LeadRepository,
};
use crate::parse::{extract_signals, PageSignals};
use crate::rate_limiter::{DailyQuota, QuotaDecision};
use crate::services::{BacklinkService, KeywordService, MockBacklinkService, MockKeywordService};

/// Outcome of the optional lead capture step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadCaptureStatus {
    Captured,
    AlreadyCaptured,
    InvalidEmail,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadCaptureReport {
    pub status: LeadCaptureStatus,
    pub message: &'static str,
}

impl From<CaptureOutcome> for LeadCaptureReport {
    fn from(outcome: CaptureOutcome) -> Self {
        let status = match outcome {
            CaptureOutcome::Captured => LeadCaptureStatus::Captured,
            CaptureOutcome::AlreadyCaptured => LeadCaptureStatus::AlreadyCaptured,
        };
        Self {
            status,
            message: outcome.message(),
        }
    }
}

/// Successful tool response body.
#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub results: Value,
    pub limitations: Value,
    pub upgrade_benefits: &'static [&'static str],
    pub upgrade_message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_capture: Option<LeadCaptureReport>,
}

/// What a request was about, after validation.
enum Subject {
    Url { url: String, keyword: Option<String> },
    Domain(String),
    Keyword(String),
}

impl Subject {
    fn validate(tool: ToolKind, request: &ToolRequest) -> Result<Self, ToolError> {
        match tool {
            ToolKind::WebsiteAnalyzer => Ok(Subject::Url {
                url: validate_url(request.url.as_deref())?.into(),
                keyword: None,
            }),
            ToolKind::MetaGenerator => Ok(Subject::Url {
                url: validate_url(request.url.as_deref())?.into(),
                keyword: request.meta_keyword().map(str::to_string),
            }),
            ToolKind::KeywordResearch => {
                validate_keyword(request.keyword.as_deref()).map(Subject::Keyword)
            }
            ToolKind::BacklinkChecker => {
                validate_domain(request.domain.as_deref()).map(Subject::Domain)
            }
        }
    }

    /// Value stored as the lead's source.
    fn source(&self) -> &str {
        match self {
            Subject::Url { url, .. } => url,
            Subject::Domain(domain) => domain,
            Subject::Keyword(keyword) => keyword,
        }
    }
}

/// Shared state and logic behind every tool route.
pub struct ToolGateway {
    client: reqwest::Client,
    quota: DailyQuota,
    leads: Arc<dyn LeadRepository>,
    keywords: Arc<dyn KeywordService>,
    backlinks: Arc<dyn BacklinkService>,
    stats: Arc<ProcessingStats>,
    requests: CounterSet<ToolKind>,
    rate_limited: CounterSet<ToolKind>,
}

impl ToolGateway {
    /// A gateway with an in-memory lead store and the mock data services.
    pub fn new(client: reqwest::Client, quota: DailyQuota) -> Self {
        Self {
            client,
            quota,
            leads: Arc::new(InMemoryLeadStore::new()),
            keywords: Arc::new(MockKeywordService),
            backlinks: Arc::new(MockBacklinkService),
            stats: Arc::new(ProcessingStats::new()),
            requests: CounterSet::new(),
            rate_limited: CounterSet::new(),
        }
    }

    pub fn with_leads(mut self, leads: Arc<dyn LeadRepository>) -> Self {
        self.leads = leads;
        self
    }

    pub fn with_keyword_service(mut self, keywords: Arc<dyn KeywordService>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_backlink_service(mut self, backlinks: Arc<dyn BacklinkService>) -> Self {
        self.backlinks = backlinks;
        self
    }

    pub fn leads(&self) -> &Arc<dyn LeadRepository> {
        &self.leads
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn quota(&self) -> &DailyQuota {
        &self.quota
    }

    /// Requests received for `tool`, including rejected ones.
    pub fn request_count(&self, tool: ToolKind) -> usize {
        self.requests.get(tool)
    }

    /// Requests for `tool` turned away by the quota.
    pub fn rate_limited_count(&self, tool: ToolKind) -> usize {
        self.rate_limited.get(tool)
    }

    /// Runs `tool` for the caller identified by `client`.
    ///
    /// Input is validated before the quota is charged, so malformed requests
    /// cost nothing. A rejected request has no side effects beyond counters.
    pub async fn handle(
        &self,
        tool: ToolKind,
        client: &str,
        request: ToolRequest,
    ) -> Result<ToolResponse, ToolError> {
        self.requests.increment(tool);
        let result = self.run(tool, client, &request).await;
        match &result {
            Err(ToolError::Validation(message)) => {
                self.stats.increment_info(InfoType::ValidationRejected);
                debug!("{tool} request from {client} rejected: {message}");
            }
            Err(ToolError::Unexpected { .. }) => {
                self.stats.increment_error(ErrorType::UnexpectedFault);
            }
            _ => {}
        }
        result
    }

    async fn run(
        &self,
        tool: ToolKind,
        client: &str,
        request: &ToolRequest,
    ) -> Result<ToolResponse, ToolError> {
        let subject = Subject::validate(tool, request)?;
        self.charge_quota(tool, client)?;

        let results = match &subject {
            Subject::Url { url, keyword } => {
                let (fetched, signals) = self.fetch_signals(url).await;
                match tool {
                    ToolKind::MetaGenerator => {
                        to_results(tool, MetaReport::new(signals, keyword.as_deref()))?
                    }
                    _ => to_results(tool, WebsiteAnalysis::new(&fetched, signals))?,
                }
            }
            Subject::Keyword(keyword) => {
                let data = self
                    .keywords
                    .analyze(keyword)
                    .await
                    .map_err(|source| ToolError::Unexpected { tool, source })?;
                to_results(tool, KeywordReport::new(keyword, data))?
            }
            Subject::Domain(domain) => {
                let data = self
                    .backlinks
                    .check(domain)
                    .await
                    .map_err(|source| ToolError::Unexpected { tool, source })?;
                to_results(tool, BacklinkReport::new(domain, data))?
            }
        };

        let lead_capture = match request.lead_email() {
            Some(email) => Some(self.capture(tool, email, subject.source()).await?),
            None => None,
        };

        let (url, domain, keyword) = match subject {
            Subject::Url { url, .. } => (Some(url), None, None),
            Subject::Domain(domain) => (None, Some(domain), None),
            Subject::Keyword(keyword) => (None, None, Some(keyword)),
        };
        Ok(ToolResponse {
            success: true,
            url,
            domain,
            keyword,
            results,
            limitations: tool.limitations(),
            upgrade_benefits: tool.upgrade_benefits(),
            upgrade_message: upgrade_message(tool),
            lead_capture,
        })
    }

    fn charge_quota(&self, tool: ToolKind, client: &str) -> Result<(), ToolError> {
        match self.quota.try_acquire(client, tool) {
            QuotaDecision::Allowed { remaining } => {
                debug!("{tool} quota for {client}: {remaining} left");
                Ok(())
            }
            QuotaDecision::Rejected { limit, retry_after } => {
                self.rate_limited.increment(tool);
                self.stats.increment_info(InfoType::RateLimited);
                info!(
                    "{tool} daily limit ({limit}) reached for {client}; next slot in {}s",
                    retry_after.as_secs()
                );
                Err(ToolError::RateLimited { tool, limit })
            }
        }
    }

    async fn fetch_signals(&self, url: &str) -> (FetchResult, PageSignals) {
        let fetched = fetch_page(&self.client, url, &self.stats).await;
        let signals = match &fetched.raw_html {
            Some(html) => {
                let signals = extract_signals(html);
                if signals.title.is_none() {
                    self.stats.increment_warning(WarningType::MissingTitle);
                }
                if signals.meta_description.is_none() {
                    self.stats.increment_warning(WarningType::MissingMetaDescription);
                }
                signals
            }
            None => PageSignals::default(),
        };
        (fetched, signals)
    }

    async fn capture(
        &self,
        tool: ToolKind,
        email: &str,
        source: &str,
    ) -> Result<LeadCaptureReport, ToolError> {
        match capture_lead(self.leads.as_ref(), email, tool, Some(source)).await {
            Ok(outcome) => {
                let info_type = match outcome {
                    CaptureOutcome::Captured => InfoType::LeadCaptured,
                    CaptureOutcome::AlreadyCaptured => InfoType::DuplicateLead,
                };
                self.stats.increment_info(info_type);
                Ok(outcome.into())
            }
            Err(LeadError::InvalidEmail) => {
                self.stats.increment_info(InfoType::InvalidLeadEmail);
                warn!("Ignoring malformed lead email for {tool}");
                Ok(LeadCaptureReport {
                    status: LeadCaptureStatus::InvalidEmail,
                    message: "Invalid email format",
                })
            }
            Err(LeadError::Store(source)) => Err(ToolError::Unexpected { tool, source }),
        }
    }
}

fn to_results<T: Serialize>(tool: ToolKind, report: T) -> Result<Value, ToolError> {
    serde_json::to_value(report).map_err(|e| ToolError::Unexpected {
        tool,
        source: e.into(),
    })
}
