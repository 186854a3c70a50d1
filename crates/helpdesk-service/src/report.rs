//! Manager reporting over the ticket corpus.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Serialize;

use helpdesk_core::result::AppResult;
use helpdesk_database::repositories::ticket::TicketRepository;
use helpdesk_entity::ticket::TicketStatus;

use crate::context::RequestContext;

/// How far back the per-unit breakdown looks.
const UNIT_REPORT_WINDOW_DAYS: i64 = 30;

/// Ticket count for one lifecycle status.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    /// The lifecycle status.
    pub status: TicketStatus,
    /// Number of tickets in that status.
    pub count: i64,
}

/// Recent ticket count for one organizational unit.
#[derive(Debug, Clone, Serialize)]
pub struct UnitCount {
    /// Unit name; `None` groups tickets filed without a unit.
    pub unit: Option<String>,
    /// Number of tickets filed in the window.
    pub count: i64,
}

/// The manager's overview report.
#[derive(Debug, Clone, Serialize)]
pub struct TicketReport {
    /// All-time ticket counts per status.
    pub by_status: Vec<StatusCount>,
    /// Per-unit counts over the last 30 days.
    pub by_unit_recent: Vec<UnitCount>,
}

/// Builds the manager overview report.
#[derive(Debug, Clone)]
pub struct ReportService {
    ticket_repo: Arc<TicketRepository>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(ticket_repo: Arc<TicketRepository>) -> Self {
        Self { ticket_repo }
    }

    /// The overview report (manager only).
    pub async fn overview(&self, ctx: &RequestContext) -> AppResult<TicketReport> {
        ctx.require_manager()?;

        let by_status = self
            .ticket_repo
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();

        let cutoff = Utc::now() - Duration::days(UNIT_REPORT_WINDOW_DAYS);
        let by_unit_recent = self
            .ticket_repo
            .count_by_unit_since(cutoff)
            .await?
            .into_iter()
            .map(|(unit, count)| UnitCount { unit, count })
            .collect();

        Ok(TicketReport {
            by_status,
            by_unit_recent,
        })
    }
}
