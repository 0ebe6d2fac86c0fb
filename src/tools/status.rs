//! Row Service Status Tool
//!
//! Runtime status of the row service plus the usage guide served to clients.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info;
use crate::tools::row_session::{RowSession, SessionStats};

/// Row editing instructions for AI assistants
pub const ROW_INSTRUCTIONS: &str = r#"
# Ingredient Row Instructions

One ingredient row is edited at a time. The row keeps an edit buffer separate
from the saved ingredient, so half-typed values never reach the record until
the field is confirmed.

## Workflow

1. `row_load` with the ingredient (name, calories100g, protein100g, fat100g,
   carbs100g, grams). Any unconfirmed edits of a previous row are discarded.
2. `row_change_field` for each keystroke or pasted value. Values are stored
   exactly as typed, including an empty string.
3. `row_confirm_field` when the user leaves the field. Omit `field` to confirm
   the field currently being edited. Typing into another field confirms the
   previous one automatically.
4. `row_view` to see inputs and derived totals at any time.
5. `row_remove` to delete the row.

## Normalization on Confirm

| Input | Stored |
|-------|--------|
| name "  Rice  " | "Rice" |
| number "" | 0 |
| number "abc" | 0 |
| number "80g" | 80 |
| number "-5" | -5 (or 0 when IROW_CLAMP_NEGATIVE is set) |

## Derived Totals

Each total is `round(per100g / 100 * grams)` to one decimal place.
Example: 130 kcal per 100g, 150 g -> 195 kcal.
Empty or non-numeric buffered values count as 0 for totals only.
"#;

/// Status information for the row service
#[derive(Debug, Clone, Serialize)]
pub struct RowServiceStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub negative_policy: &'static str,
    pub row_loaded: bool,
    pub session: SessionStats,
}

/// Tracks service start time for status reporting
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, session: &RowSession) -> RowServiceStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        RowServiceStatus {
            build_number: build_info::build_number(),
            build_timestamp: build_info::build_timestamp(),
            version: build_info::VERSION,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            negative_policy: session.config().negative_policy.as_str(),
            row_loaded: session.is_loaded(),
            session: session.stats(),
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowConfig;
    use crate::models::Ingredient;

    #[test]
    fn test_status_reports_session() {
        let tracker = StatusTracker::new();
        let mut session = RowSession::new(RowConfig::default());

        let status = tracker.get_status(&session);
        assert!(!status.row_loaded);
        assert_eq!(status.negative_policy, "accept");
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));

        session.load(Ingredient::new("Rice"));
        let status = tracker.get_status(&session);
        assert!(status.row_loaded);
        assert_eq!(status.session.records_loaded, 1);
    }
}
