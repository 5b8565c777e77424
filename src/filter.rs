//! Ticket list filtering
//!
//! Derives the visible subset of the board from the sidebar view, the agent
//! filter, the status tab, the priority selector and the search box. Each
//! stage narrows the previous one and board order is kept.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::models::{Priority, Ticket, TicketStatus};

/// Sidebar navigation view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavView {
    #[default]
    Inbox,
    All,
    Mine,
    Team,
    Reports,
}

impl NavView {
    pub fn label(&self) -> &'static str {
        match self {
            NavView::Inbox => "Inbox",
            NavView::All => "All Tickets",
            NavView::Mine => "My Tickets",
            NavView::Team => "Team View",
            NavView::Reports => "Reports",
        }
    }

    /// Unrecognised view names fall back to the unrestricted view.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "inbox" => NavView::Inbox,
            "mine" => NavView::Mine,
            "team" => NavView::Team,
            "reports" => NavView::Reports,
            _ => NavView::All,
        }
    }
}

/// Single-field selector where `all` (or nothing) disables the stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFilter<T> {
    Inactive,
    Only(T),
    /// A value that names no variant. Matches nothing.
    Unmatched(String),
}

impl<T> Default for FieldFilter<T> {
    fn default() -> Self {
        FieldFilter::Inactive
    }
}

impl<T: FromStr> FieldFilter<T> {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == "all" {
            return FieldFilter::Inactive;
        }
        match raw.parse() {
            Ok(value) => FieldFilter::Only(value),
            Err(_) => FieldFilter::Unmatched(raw.to_string()),
        }
    }
}

impl<T: PartialEq> FieldFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FieldFilter::Inactive => true,
            FieldFilter::Only(expected) => expected == value,
            FieldFilter::Unmatched(_) => false,
        }
    }
}

/// Active filter parameters for one list request
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub view: NavView,
    /// Empty means inactive.
    pub agent: String,
    pub status: FieldFilter<TicketStatus>,
    pub priority: FieldFilter<Priority>,
    /// Empty means inactive.
    pub search: String,
}

/// Raw query string form of [`TicketFilter`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub view: Option<String>,
    pub agent: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub q: Option<String>,
}

impl From<FilterParams> for TicketFilter {
    fn from(params: FilterParams) -> Self {
        Self {
            view: params.view.as_deref().map(NavView::parse_lenient).unwrap_or_default(),
            agent: params.agent.unwrap_or_default(),
            status: params.status.as_deref().map(FieldFilter::parse).unwrap_or_default(),
            priority: params.priority.as_deref().map(FieldFilter::parse).unwrap_or_default(),
            search: params.q.unwrap_or_default(),
        }
    }
}

/// Tab badge counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub new: usize,
    pub open: usize,
    pub pending: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl StatusCounts {
    fn tally<'a>(tickets: impl IntoIterator<Item = &'a Arc<Ticket>>) -> Self {
        let mut counts = Self::default();
        for t in tickets {
            counts.all += 1;
            match t.status {
                TicketStatus::New => counts.new += 1,
                TicketStatus::Open => counts.open += 1,
                TicketStatus::Pending => counts.pending += 1,
                TicketStatus::Resolved => counts.resolved += 1,
                TicketStatus::Closed => counts.closed += 1,
            }
        }
        counts
    }
}

/// Result of running a [`TicketFilter`]
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub tickets: Vec<Arc<Ticket>>,
    /// Counted before the status, priority and search stages.
    pub status_counts: StatusCounts,
    pub total: usize,
}

/// Sidebar view and agent stages. `current_agent` is who "mine" refers to.
pub fn scope<'a>(
    tickets: &'a [Arc<Ticket>],
    view: NavView,
    agent: &'a str,
    current_agent: &'a str,
) -> impl Iterator<Item = &'a Arc<Ticket>> + 'a {
    tickets
        .iter()
        .filter(move |t| match view {
            NavView::Mine => t.is_assigned_to(current_agent),
            NavView::Inbox => t.status != TicketStatus::Closed,
            NavView::All | NavView::Team | NavView::Reports => true,
        })
        .filter(move |t| agent.is_empty() || t.is_assigned_to(agent))
}

/// Case-insensitive match over subject, customer, tags and ticket number.
pub fn matches_search(ticket: &Ticket, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    ticket.subject.to_lowercase().contains(&q)
        || ticket.customer_name.to_lowercase().contains(&q)
        || ticket.customer_email.to_lowercase().contains(&q)
        || ticket.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
        || ticket.number.to_string().contains(&q)
}

pub fn apply(tickets: &[Arc<Ticket>], filter: &TicketFilter, current_agent: &str) -> FilterOutcome {
    let scoped: Vec<&Arc<Ticket>> = scope(tickets, filter.view, &filter.agent, current_agent).collect();
    let status_counts = StatusCounts::tally(scoped.iter().copied());

    let visible: Vec<Arc<Ticket>> = scoped
        .into_iter()
        .filter(|t| filter.status.matches(&t.status))
        .filter(|t| filter.priority.matches(&t.priority))
        .filter(|t| matches_search(t, &filter.search))
        .cloned()
        .collect();

    FilterOutcome {
        total: visible.len(),
        tickets: visible,
        status_counts,
    }
}

/// Top bar alert pills
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardAlerts {
    pub urgent_count: usize,
    pub unassigned_count: usize,
}

pub fn alerts(tickets: &[Arc<Ticket>]) -> DashboardAlerts {
    let active = || tickets.iter().filter(|t| !t.status.is_settled());
    DashboardAlerts {
        urgent_count: active().filter(|t| t.priority == Priority::Urgent).count(),
        unassigned_count: active().filter(|t| t.assigned_to.is_none()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    const ME: &str = "a1";

    fn board() -> Vec<Arc<Ticket>> {
        seed::tickets().into_iter().map(Arc::new).collect()
    }

    fn numbers(outcome: &FilterOutcome) -> Vec<u32> {
        outcome.tickets.iter().map(|t| t.number).collect()
    }

    fn all_view() -> TicketFilter {
        TicketFilter { view: NavView::All, ..Default::default() }
    }

    #[test]
    fn test_mine_view_only_keeps_current_agent() {
        let filter = TicketFilter { view: NavView::Mine, ..Default::default() };
        let out = apply(&board(), &filter, ME);
        assert_eq!(numbers(&out), vec![1042, 1040]);
        assert!(out.tickets.iter().all(|t| t.assigned_to.as_deref() == Some(ME)));
    }

    #[test]
    fn test_inbox_view_excludes_closed() {
        let out = apply(&board(), &TicketFilter::default(), ME);
        assert_eq!(out.total, 6);
        assert!(out.tickets.iter().all(|t| t.status != TicketStatus::Closed));
        assert_eq!(out.status_counts.closed, 0);
    }

    #[test]
    fn test_search_csv_matches_single_ticket() {
        let filter = TicketFilter { search: "csv".into(), ..all_view() };
        assert_eq!(numbers(&apply(&board(), &filter, ME)), vec![1041]);

        let filter = TicketFilter { search: "CSV".into(), ..all_view() };
        assert_eq!(numbers(&apply(&board(), &filter, ME)), vec![1041]);
    }

    #[test]
    fn test_search_fields() {
        let cases = [
            ("stacklabs", vec![1040, 1036]),  // customer email
            ("jordan", vec![1041, 1037]),     // customer name
            ("2fa", vec![1037]),              // tag
            ("1039", vec![1039]),             // ticket number
            ("103", vec![1039, 1038, 1037, 1036]),
            ("no such thing", vec![]),
        ];
        for (query, expected) in cases {
            let filter = TicketFilter { search: query.into(), ..all_view() };
            assert_eq!(numbers(&apply(&board(), &filter, ME)), expected, "query {query:?}");
        }
    }

    #[test]
    fn test_status_and_priority_compose_as_and() {
        let filter = TicketFilter {
            status: FieldFilter::Only(TicketStatus::Open),
            priority: FieldFilter::Only(Priority::Urgent),
            ..all_view()
        };
        assert_eq!(numbers(&apply(&board(), &filter, ME)), vec![1042]);
    }

    #[test]
    fn test_counts_ignore_status_priority_and_search() {
        let filter = TicketFilter {
            status: FieldFilter::Only(TicketStatus::Pending),
            priority: FieldFilter::Only(Priority::Normal),
            search: "permissions".into(),
            ..all_view()
        };
        let out = apply(&board(), &filter, ME);
        assert_eq!(numbers(&out), vec![1040]);
        assert_eq!(out.total, 1);
        assert_eq!(
            out.status_counts,
            StatusCounts { all: 7, new: 1, open: 3, pending: 1, resolved: 1, closed: 1 }
        );
    }

    #[test]
    fn test_agent_filter_narrows_view() {
        let filter = TicketFilter { agent: "a2".into(), ..Default::default() };
        let out = apply(&board(), &filter, ME);
        assert_eq!(numbers(&out), vec![1041, 1037]);
        assert_eq!(out.status_counts.all, 2);

        // Mine + another agent leaves nothing
        let filter = TicketFilter { view: NavView::Mine, agent: "a2".into(), ..Default::default() };
        assert!(apply(&board(), &filter, ME).tickets.is_empty());
    }

    #[test]
    fn test_sentinels_and_unknown_values() {
        assert_eq!(FieldFilter::<TicketStatus>::parse("all"), FieldFilter::Inactive);
        assert_eq!(FieldFilter::<TicketStatus>::parse(""), FieldFilter::Inactive);

        let filter = TicketFilter { status: FieldFilter::parse("archived"), ..all_view() };
        assert!(apply(&board(), &filter, ME).tickets.is_empty());

        let filter = TicketFilter { agent: "a9".into(), ..all_view() };
        assert!(apply(&board(), &filter, ME).tickets.is_empty());

        assert_eq!(NavView::parse_lenient("kanban"), NavView::All);
    }

    #[test]
    fn test_filter_params_conversion() {
        let params = FilterParams {
            view: Some("mine".into()),
            agent: None,
            status: Some("all".into()),
            priority: Some("high".into()),
            q: Some("export".into()),
        };
        let filter = TicketFilter::from(params);
        assert_eq!(filter.view, NavView::Mine);
        assert!(filter.agent.is_empty());
        assert_eq!(filter.status, FieldFilter::Inactive);
        assert_eq!(filter.priority, FieldFilter::Only(Priority::High));
        assert_eq!(filter.search, "export");

        let filter = TicketFilter::from(FilterParams::default());
        assert_eq!(filter.view, NavView::Inbox);
    }

    #[test]
    fn test_filter_preserves_order_and_identity() {
        let tickets = board();
        let out = apply(&tickets, &all_view(), ME);
        assert_eq!(out.total, tickets.len());
        for (a, b) in out.tickets.iter().zip(tickets.iter()) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_alerts() {
        let alerts = alerts(&board());
        // #1042 urgent+open counts, #1037 urgent but resolved does not
        assert_eq!(alerts.urgent_count, 1);
        assert_eq!(alerts.unassigned_count, 1);
    }
}
