//! Data Models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display timestamp stamped by every mutation.
pub const JUST_NOW: &str = "just now";

// ============ API envelope ============

/// Standard API response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Returned by `FromStr` impls when a value is not one of the known variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

// ============ Tickets ============

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Urgent, Priority::High, Priority::Normal, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgent" => Ok(Priority::Urgent),
            "high" => Ok(Priority::High),
            "normal" => Ok(Priority::Normal),
            "low" => Ok(Priority::Low),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    New,
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::New,
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    /// Label shown on status tabs and the quick-advance button.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::New => "New",
            TicketStatus::Open => "Open",
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Next step of the forward progression. `Closed` is terminal.
    pub fn next(&self) -> Option<TicketStatus> {
        match self {
            TicketStatus::New => Some(TicketStatus::Open),
            TicketStatus::Open => Some(TicketStatus::Pending),
            TicketStatus::Pending => Some(TicketStatus::Resolved),
            TicketStatus::Resolved => Some(TicketStatus::Closed),
            TicketStatus::Closed => None,
        }
    }

    /// Resolved and closed tickets no longer count toward alerts or SLA pressure.
    pub fn is_settled(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl FromStr for TicketStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(TicketStatus::New),
            "open" => Ok(TicketStatus::Open),
            "pending" => Ok(TicketStatus::Pending),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Channel the ticket came in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Chat,
    Phone,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Chat => "Live Chat",
            Channel::Phone => "Phone",
        }
    }
}

/// A single entry in a ticket thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: String,
    pub initials: String,
    pub is_agent: bool,
    /// Internal notes are shown to agents only.
    pub is_internal: bool,
    pub content: String,
    pub timestamp: String,
}

/// Support ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub number: u32,
    pub subject: String,
    pub preview: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub assigned_to: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub sla_hours_left: f64,
    pub sla_total: f64,
    pub first_response_at: Option<String>,
    pub messages: Vec<Message>,
    pub tags: Vec<String>,
    pub satisfaction: Option<u8>,
    pub channel: Channel,
}

impl Ticket {
    pub fn is_assigned_to(&self, agent_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(agent_id)
    }

    pub fn awaiting_first_response(&self) -> bool {
        self.first_response_at.is_none()
    }

    /// Thread as the customer sees it: internal notes removed.
    pub fn public_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| !m.is_internal)
    }

    pub fn sla(&self) -> SlaSummary {
        SlaSummary::for_ticket(self)
    }
}

/// SLA progress derived from the remaining/total hour counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaSummary {
    pub hours_left: f64,
    pub hours_total: f64,
    pub percent_elapsed: f64,
    pub critical: bool,
    pub remaining_label: String,
}

impl SlaSummary {
    /// Hours left below which an unsettled ticket is flagged.
    pub const CRITICAL_HOURS: f64 = 2.0;

    pub fn for_ticket(ticket: &Ticket) -> Self {
        let left = ticket.sla_hours_left;
        let total = ticket.sla_total;

        let percent_elapsed = if total > 0.0 {
            ((total - left) / total * 100.0).min(100.0)
        } else {
            100.0
        };

        let remaining_label = if left < 1.0 {
            format!("{}m left", (left * 60.0).round())
        } else {
            format!("{}h left", left)
        };

        Self {
            hours_left: left,
            hours_total: total,
            percent_elapsed,
            critical: left < Self::CRITICAL_HOURS && !ticket.status.is_settled(),
            remaining_label,
        }
    }
}

// ============ Customers ============

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Starter,
    Pro,
    Enterprise,
}

/// Historical ticket reference shown in the customer panel.
///
/// These are display records; the id may or may not exist in the live
/// ticket collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTicket {
    pub id: String,
    pub subject: String,
    pub status: TicketStatus,
    pub date: String,
}

/// Customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub plan: Plan,
    pub account_age: String,
    pub total_tickets: u32,
    pub lifetime_value: String,
    pub notes: String,
    pub recent_tickets: Vec<RecentTicket>,
}

/// Text before the first space, used when greeting the customer.
pub(crate) fn first_name(full_name: &str) -> &str {
    full_name.split(' ').next().unwrap_or(full_name)
}

// ============ Agents ============

/// Agent presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Online,
    Away,
    Offline,
}

/// Support agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub color: String,
    /// Seed counter; not recomputed when tickets change.
    pub open_tickets: u32,
    pub status: AgentStatus,
}

/// Reusable reply template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannedResponse {
    pub id: String,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ticket(id: &str) -> Ticket {
        seed::tickets().into_iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_status_progression() {
        assert_eq!(TicketStatus::New.next(), Some(TicketStatus::Open));
        assert_eq!(TicketStatus::Open.next(), Some(TicketStatus::Pending));
        assert_eq!(TicketStatus::Pending.next(), Some(TicketStatus::Resolved));
        assert_eq!(TicketStatus::Resolved.next(), Some(TicketStatus::Closed));
        assert_eq!(TicketStatus::Closed.next(), None);
    }

    #[test]
    fn test_parse_round_trips_wire_names() {
        for status in TicketStatus::ALL {
            assert_eq!(status.as_str().parse::<TicketStatus>(), Ok(status));
        }
        for priority in Priority::ALL {
            assert_eq!(priority.as_str().parse::<Priority>(), Ok(priority));
        }
        assert!("Urgent".parse::<Priority>().is_err());
        assert!("all".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_sla_summary() {
        // #1042: 1.5h of 4h left, open
        let sla = ticket("t1").sla();
        assert_eq!(sla.percent_elapsed, 62.5);
        assert!(sla.critical);
        assert_eq!(sla.remaining_label, "1.5h left");

        // #1037: resolved, exhausted SLA is not critical
        let sla = ticket("t6").sla();
        assert_eq!(sla.percent_elapsed, 100.0);
        assert!(!sla.critical);
        assert_eq!(sla.remaining_label, "0m left");

        let mut t = ticket("t4");
        t.sla_hours_left = 0.25;
        assert_eq!(t.sla().remaining_label, "15m left");

        t.sla_total = 0.0;
        assert_eq!(t.sla().percent_elapsed, 100.0);
    }

    #[test]
    fn test_public_messages_hide_internal_notes() {
        let t = ticket("t1");
        assert_eq!(t.messages.len(), 3);
        let public: Vec<_> = t.public_messages().map(|m| m.id.as_str()).collect();
        assert_eq!(public, vec!["m1", "m2"]);
    }

    #[test]
    fn test_optional_fields_serialize_as_null() {
        let t = ticket("t4");
        let json = serde_json::to_value(&t).unwrap();
        assert!(json["assigned_to"].is_null());
        assert!(json["first_response_at"].is_null());
        assert!(json["satisfaction"].is_null());
        assert_eq!(json["status"], "new");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Alex Rivera"), "Alex");
        assert_eq!(first_name("Cher"), "Cher");
    }
}
