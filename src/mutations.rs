//! Ticket mutation handlers
//!
//! Every handler takes the current board and returns a new one. The touched
//! ticket is rebuilt; every other entry is the same `Arc` as before. An
//! unknown ticket id yields an unchanged board.

use std::sync::Arc;

use thiserror::Error;

use crate::models::{Agent, Message, Priority, Ticket, TicketStatus, JUST_NOW};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuickAdvanceError {
    #[error("ticket {ticket_id} is {status:?} and has no next status")]
    Unavailable { ticket_id: String, status: TicketStatus },
}

fn replace_where<F>(tickets: &[Arc<Ticket>], ticket_id: &str, update: F) -> Vec<Arc<Ticket>>
where
    F: Fn(&Ticket) -> Ticket,
{
    tickets
        .iter()
        .map(|t| if t.id == ticket_id { Arc::new(update(t)) } else { Arc::clone(t) })
        .collect()
}

pub fn set_status(tickets: &[Arc<Ticket>], ticket_id: &str, status: TicketStatus) -> Vec<Arc<Ticket>> {
    tracing::debug!(ticket_id, status = status.as_str(), "set status");
    replace_where(tickets, ticket_id, |t| Ticket {
        status,
        updated_at: JUST_NOW.into(),
        ..t.clone()
    })
}

/// Priority changes leave `updated_at` alone.
pub fn set_priority(tickets: &[Arc<Ticket>], ticket_id: &str, priority: Priority) -> Vec<Arc<Ticket>> {
    tracing::debug!(ticket_id, priority = priority.as_str(), "set priority");
    replace_where(tickets, ticket_id, |t| Ticket { priority, ..t.clone() })
}

/// An empty `agent_id` unassigns. Other values are stored as given.
pub fn assign(tickets: &[Arc<Ticket>], ticket_id: &str, agent_id: &str) -> Vec<Arc<Ticket>> {
    let assigned_to = if agent_id.is_empty() { None } else { Some(agent_id.to_string()) };
    tracing::debug!(ticket_id, ?assigned_to, "assign");
    replace_where(tickets, ticket_id, |t| Ticket {
        assigned_to: assigned_to.clone(),
        ..t.clone()
    })
}

fn next_message_id() -> String {
    let now = chrono::Utc::now();
    format!("m-{}", now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_micros()))
}

/// Appends an agent reply or internal note written by `author`.
///
/// Whitespace-only content is ignored. The first reply on a ticket with no
/// first response stamps `first_response_at`; later replies never move it.
pub fn append_message(
    tickets: &[Arc<Ticket>],
    ticket_id: &str,
    content: &str,
    is_internal: bool,
    author: &Agent,
) -> Vec<Arc<Ticket>> {
    let content = content.trim();
    if content.is_empty() {
        return tickets.to_vec();
    }

    let message = Message {
        id: next_message_id(),
        author: author.name.clone(),
        initials: author.initials.clone(),
        is_agent: true,
        is_internal,
        content: content.to_string(),
        timestamp: JUST_NOW.into(),
    };
    tracing::debug!(ticket_id, message_id = %message.id, is_internal, "append message");

    replace_where(tickets, ticket_id, |t| {
        let mut messages = t.messages.clone();
        messages.push(message.clone());
        Ticket {
            messages,
            updated_at: JUST_NOW.into(),
            first_response_at: t.first_response_at.clone().or_else(|| Some(JUST_NOW.into())),
            ..t.clone()
        }
    })
}

/// Reply, then move the ticket one step along the status progression.
pub fn quick_advance(
    tickets: &[Arc<Ticket>],
    ticket_id: &str,
    content: &str,
    is_internal: bool,
    author: &Agent,
) -> Result<Vec<Arc<Ticket>>, QuickAdvanceError> {
    let Some(current) = tickets.iter().find(|t| t.id == ticket_id) else {
        return Ok(tickets.to_vec());
    };
    let next = current.status.next().ok_or_else(|| QuickAdvanceError::Unavailable {
        ticket_id: ticket_id.to_string(),
        status: current.status,
    })?;

    let replied = append_message(tickets, ticket_id, content, is_internal, author);
    Ok(set_status(&replied, ticket_id, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn board() -> Vec<Arc<Ticket>> {
        seed::tickets().into_iter().map(Arc::new).collect()
    }

    fn maya() -> Agent {
        seed::agents().into_iter().next().unwrap()
    }

    fn find<'a>(tickets: &'a [Arc<Ticket>], id: &str) -> &'a Ticket {
        tickets.iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_status_last_write_wins() {
        let mut tickets = board();
        for status in [TicketStatus::Closed, TicketStatus::New, TicketStatus::Resolved, TicketStatus::Pending] {
            tickets = set_status(&tickets, "t2", status);
        }
        let t = find(&tickets, "t2");
        assert_eq!(t.status, TicketStatus::Pending);
        assert_eq!(t.updated_at, JUST_NOW);
    }

    #[test]
    fn test_direct_status_ignores_progression() {
        let tickets = set_status(&board(), "t7", TicketStatus::New);
        assert_eq!(find(&tickets, "t7").status, TicketStatus::New);
    }

    #[test]
    fn test_untouched_tickets_share_allocation() {
        let before = board();
        let after = set_status(&before, "t3", TicketStatus::Resolved);
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == "t3" {
                assert!(!Arc::ptr_eq(old, new));
                assert_eq!(old.status, TicketStatus::Pending);
            } else {
                assert!(Arc::ptr_eq(old, new));
            }
        }
    }

    #[test]
    fn test_unknown_ticket_is_noop() {
        let before = board();
        let after = assign(&before, "missing", "a2");
        assert!(before.iter().zip(after.iter()).all(|(a, b)| Arc::ptr_eq(a, b)));

        let after = append_message(&before, "missing", "hello", false, &maya());
        assert!(before.iter().zip(after.iter()).all(|(a, b)| Arc::ptr_eq(a, b)));

        let after = quick_advance(&before, "missing", "hello", false, &maya()).unwrap();
        assert_eq!(after.len(), before.len());
    }

    #[test]
    fn test_set_priority_keeps_updated_at() {
        let tickets = set_priority(&board(), "t5", Priority::Urgent);
        let t = find(&tickets, "t5");
        assert_eq!(t.priority, Priority::Urgent);
        assert_eq!(t.updated_at, "2d ago");
    }

    #[test]
    fn test_assign_and_unassign() {
        let tickets = assign(&board(), "t4", "a3");
        assert_eq!(find(&tickets, "t4").assigned_to.as_deref(), Some("a3"));

        // No existence check against the agent roster
        let tickets = assign(&tickets, "t4", "ghost");
        assert_eq!(find(&tickets, "t4").assigned_to.as_deref(), Some("ghost"));

        let tickets = assign(&tickets, "t4", "");
        assert_eq!(find(&tickets, "t4").assigned_to, None);

        let tickets = assign(&tickets, "t1", "");
        assert_eq!(find(&tickets, "t1").assigned_to, None);
    }

    #[test]
    fn test_first_response_set_once() {
        let tickets = append_message(&board(), "t4", "  Looking into this now.  ", false, &maya());
        let t = find(&tickets, "t4");
        assert_eq!(t.first_response_at.as_deref(), Some(JUST_NOW));
        assert_eq!(t.messages.len(), 2);

        let reply = t.messages.last().unwrap();
        assert_eq!(reply.content, "Looking into this now.");
        assert_eq!(reply.author, "Maya Chen");
        assert_eq!(reply.initials, "MC");
        assert!(reply.is_agent);
        assert!(!reply.is_internal);
        assert_eq!(reply.timestamp, JUST_NOW);
        assert!(reply.id.starts_with("m-"));

        let mut again = tickets.clone();
        again[3] = Arc::new(Ticket { first_response_at: Some("earlier".into()), ..(*again[3]).clone() });
        let again = append_message(&again, "t4", "Second reply", true, &maya());
        let t = find(&again, "t4");
        assert_eq!(t.first_response_at.as_deref(), Some("earlier"));
        assert_eq!(t.messages.len(), 3);
        assert!(t.messages[2].is_internal);
    }

    #[test]
    fn test_existing_first_response_untouched() {
        let tickets = append_message(&board(), "t1", "Fix is live.", false, &maya());
        let t = find(&tickets, "t1");
        assert_eq!(t.first_response_at.as_deref(), Some("1h ago"));
        assert_eq!(t.updated_at, JUST_NOW);
    }

    #[test]
    fn test_blank_message_is_noop() {
        let before = board();
        for content in ["", "   ", "\n\t "] {
            let after = append_message(&before, "t2", content, false, &maya());
            let t = find(&after, "t2");
            assert_eq!(t.messages.len(), 2);
            assert_eq!(t.updated_at, "1h ago");
        }
    }

    #[test]
    fn test_quick_advance_replies_then_advances() {
        let tickets = quick_advance(&board(), "t4", "We're on it.", false, &maya()).unwrap();
        let t = find(&tickets, "t4");
        assert_eq!(t.status, TicketStatus::Open);
        assert_eq!(t.messages.last().unwrap().content, "We're on it.");
        assert_eq!(t.first_response_at.as_deref(), Some(JUST_NOW));

        let tickets = quick_advance(&tickets, "t4", "Fixed.", false, &maya()).unwrap();
        assert_eq!(find(&tickets, "t4").status, TicketStatus::Pending);
    }

    #[test]
    fn test_quick_advance_unavailable_when_closed() {
        let err = quick_advance(&board(), "t7", "Reopening", false, &maya()).unwrap_err();
        assert_eq!(
            err,
            QuickAdvanceError::Unavailable { ticket_id: "t7".into(), status: TicketStatus::Closed }
        );
    }

    #[test]
    fn test_quick_advance_with_blank_reply_still_advances() {
        let tickets = quick_advance(&board(), "t6", "  ", false, &maya()).unwrap();
        let t = find(&tickets, "t6");
        assert_eq!(t.status, TicketStatus::Closed);
        assert_eq!(t.messages.len(), 2);
    }
}
