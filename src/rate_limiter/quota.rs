//! Per-(client, tool) daily quota.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;

use super::window::RequestWindow;
use crate::config::{RATE_LIMIT_SWEEP_THRESHOLD, RATE_LIMIT_WINDOW};
use crate::tools::ToolKind;

/// Outcome of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    /// The request was counted.
    Allowed { remaining: u32 },
    /// The window is full; nothing was counted.
    Rejected { limit: u32, retry_after: Duration },
}

impl QuotaDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, QuotaDecision::Allowed { .. })
    }
}

type QuotaKey = (String, ToolKind);

#[derive(Debug)]
struct QuotaTable {
    windows: HashMap<QuotaKey, RequestWindow>,
    /// Key count that triggers the next sweep. Doubles the surviving count
    /// after each sweep so a table of live keys is not rescanned per request.
    sweep_at: usize,
}

impl QuotaTable {
    fn new(sweep_threshold: usize) -> Self {
        Self {
            windows: HashMap::new(),
            sweep_at: sweep_threshold,
        }
    }

    fn sweep_if_due(&mut self, now: Instant, window: Duration, threshold: usize) {
        if self.windows.len() <= self.sweep_at {
            return;
        }
        let before = self.windows.len();
        self.windows.retain(|_, w| {
            w.prune(now, window);
            !w.is_empty()
        });
        self.sweep_at = threshold.max(self.windows.len().saturating_mul(2));
        debug!(
            "Quota sweep dropped {} idle keys; next sweep above {} keys",
            before - self.windows.len(),
            self.sweep_at
        );
    }
}

/// Rolling-window request quota keyed by client identity and tool.
///
/// Check-and-record happens under a single lock, so concurrent requests are
/// never double-admitted or lost. Idle keys are swept lazily once the table
/// passes the sweep threshold, and again only after it has doubled.
#[derive(Debug)]
pub struct DailyQuota {
    window: Duration,
    limit_override: Option<u32>,
    sweep_threshold: usize,
    entries: Mutex<QuotaTable>,
}

impl DailyQuota {
    /// A 24-hour quota. `limit_override` replaces every tool's own ceiling;
    /// an override of 0 disables limiting.
    pub fn new(limit_override: Option<u32>) -> Self {
        Self::with_window(RATE_LIMIT_WINDOW, limit_override)
    }

    pub fn with_window(window: Duration, limit_override: Option<u32>) -> Self {
        Self {
            window,
            limit_override,
            sweep_threshold: RATE_LIMIT_SWEEP_THRESHOLD,
            entries: Mutex::new(QuotaTable::new(RATE_LIMIT_SWEEP_THRESHOLD)),
        }
    }

    /// Sets the key count above which idle keys are swept.
    pub fn sweep_threshold(mut self, threshold: usize) -> Self {
        self.sweep_threshold = threshold;
        self.entries = Mutex::new(QuotaTable::new(threshold));
        self
    }

    /// Ceiling applied to `tool`.
    pub fn limit_for(&self, tool: ToolKind) -> u32 {
        self.limit_override.unwrap_or_else(|| tool.daily_limit())
    }

    /// Counts a request from `client` against `tool` if the window allows it.
    pub fn try_acquire(&self, client: &str, tool: ToolKind) -> QuotaDecision {
        self.try_acquire_at(client, tool, Instant::now())
    }

    /// [`try_acquire`](Self::try_acquire) with an explicit clock reading.
    pub fn try_acquire_at(&self, client: &str, tool: ToolKind, now: Instant) -> QuotaDecision {
        let limit = self.limit_for(tool);
        if limit == 0 {
            return QuotaDecision::Allowed {
                remaining: u32::MAX,
            };
        }

        let mut table = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        table.sweep_if_due(now, self.window, self.sweep_threshold);

        let window = table.windows.entry((client.to_string(), tool)).or_default();
        let (used, admitted) = window.try_admit(now, self.window, limit);
        if admitted {
            let remaining = limit.saturating_sub(u32::try_from(used).unwrap_or(u32::MAX));
            QuotaDecision::Allowed { remaining }
        } else {
            QuotaDecision::Rejected {
                limit,
                retry_after: window.time_until_slot(now, self.window),
            }
        }
    }

    /// Number of (client, tool) keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .windows
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    #[test]
    fn test_n_plus_one_rejected() {
        let quota = DailyQuota::new(None);
        let now = Instant::now();
        let limit = ToolKind::WebsiteAnalyzer.daily_limit();
        for i in 0..limit {
            let decision = quota.try_acquire_at("1.2.3.4", ToolKind::WebsiteAnalyzer, now);
            assert_eq!(
                decision,
                QuotaDecision::Allowed {
                    remaining: limit - i - 1
                }
            );
        }
        let decision = quota.try_acquire_at("1.2.3.4", ToolKind::WebsiteAnalyzer, now);
        assert_eq!(
            decision,
            QuotaDecision::Rejected {
                limit,
                retry_after: DAY
            }
        );
    }

    #[test]
    fn test_window_rolls_over() {
        let quota = DailyQuota::new(Some(1));
        let start = Instant::now();
        assert!(quota
            .try_acquire_at("c", ToolKind::KeywordResearch, start)
            .is_allowed());
        let almost = start + DAY - Duration::from_secs(1);
        match quota.try_acquire_at("c", ToolKind::KeywordResearch, almost) {
            QuotaDecision::Rejected { retry_after, .. } => {
                assert_eq!(retry_after, Duration::from_secs(1))
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(quota
            .try_acquire_at("c", ToolKind::KeywordResearch, start + DAY)
            .is_allowed());
    }

    #[test]
    fn test_rejections_are_not_counted() {
        let quota = DailyQuota::new(Some(1));
        let start = Instant::now();
        assert!(quota.try_acquire_at("c", ToolKind::MetaGenerator, start).is_allowed());
        // Repeated rejections must not push the slot further out
        for hour in 1..24 {
            let at = start + Duration::from_secs(hour * 3600);
            assert!(!quota.try_acquire_at("c", ToolKind::MetaGenerator, at).is_allowed());
        }
        assert!(quota
            .try_acquire_at("c", ToolKind::MetaGenerator, start + DAY)
            .is_allowed());
    }

    #[test]
    fn test_keys_are_independent() {
        let quota = DailyQuota::new(Some(1));
        let now = Instant::now();
        assert!(quota.try_acquire_at("a", ToolKind::BacklinkChecker, now).is_allowed());
        assert!(quota.try_acquire_at("b", ToolKind::BacklinkChecker, now).is_allowed());
        assert!(quota.try_acquire_at("a", ToolKind::KeywordResearch, now).is_allowed());
        assert!(!quota.try_acquire_at("a", ToolKind::BacklinkChecker, now).is_allowed());
        assert_eq!(quota.tracked_keys(), 3);
    }

    #[test]
    fn test_per_tool_default_ceilings() {
        let quota = DailyQuota::new(None);
        assert_eq!(quota.limit_for(ToolKind::KeywordResearch), 10);
        assert_eq!(DailyQuota::new(Some(7)).limit_for(ToolKind::KeywordResearch), 7);
    }

    #[test]
    fn test_zero_override_disables_limit() {
        let quota = DailyQuota::new(Some(0));
        for _ in 0..100 {
            assert!(quota.try_acquire("c", ToolKind::WebsiteAnalyzer).is_allowed());
        }
        assert_eq!(quota.tracked_keys(), 0);
    }

    #[test]
    fn test_sweep_drops_idle_keys() {
        let quota = DailyQuota::new(Some(5)).sweep_threshold(2);
        let start = Instant::now();
        for client in ["a", "b", "c"] {
            quota.try_acquire_at(client, ToolKind::WebsiteAnalyzer, start);
        }
        assert_eq!(quota.tracked_keys(), 3);
        quota.try_acquire_at("d", ToolKind::WebsiteAnalyzer, start + DAY);
        assert_eq!(quota.tracked_keys(), 1);
    }

    #[test]
    fn test_sweep_waits_for_table_to_double() {
        let quota = DailyQuota::new(Some(5)).sweep_threshold(2);
        let start = Instant::now();
        for client in ["a", "b", "c"] {
            quota.try_acquire_at(client, ToolKind::WebsiteAnalyzer, start);
        }
        // Sweeps, but every key is live; the next sweep waits for 6 keys
        quota.try_acquire_at("d", ToolKind::WebsiteAnalyzer, start + Duration::from_secs(1));
        assert_eq!(quota.tracked_keys(), 4);

        // a-d are idle now, yet no sweep runs until the table passes 6 keys
        let later = start + DAY + Duration::from_secs(1);
        for client in ["e", "f", "g"] {
            quota.try_acquire_at(client, ToolKind::WebsiteAnalyzer, later);
        }
        assert_eq!(quota.tracked_keys(), 7);

        quota.try_acquire_at("h", ToolKind::WebsiteAnalyzer, later);
        assert_eq!(quota.tracked_keys(), 4);
    }

    #[test]
    fn test_concurrent_requests_admit_exactly_limit() {
        let quota = Arc::new(DailyQuota::new(Some(50)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let quota = Arc::clone(&quota);
                std::thread::spawn(move || {
                    (0..25)
                        .filter(|_| quota.try_acquire("shared", ToolKind::MetaGenerator).is_allowed())
                        .count()
                })
            })
            .collect();
        let admitted: usize = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .sum();
        assert_eq!(admitted, 50);
    }
}
