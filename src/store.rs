//! In-memory ticket board and reference data

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Agent, CannedResponse, Customer, Ticket};
use crate::seed;

/// Read-only data shared for the lifetime of the process
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub agents: Vec<Agent>,
    pub canned_responses: Vec<CannedResponse>,
}

impl ReferenceData {
    pub fn seeded() -> Self {
        Self {
            agents: seed::agents(),
            canned_responses: seed::canned_responses(),
        }
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn canned_response(&self, id: &str) -> Option<&CannedResponse> {
        self.canned_responses.iter().find(|c| c.id == id)
    }
}

/// Mutable session state: tickets and customer notes.
///
/// Tickets are held as a copy-on-write list. Writers compute a new list from
/// the current one and swap it in under the write lock.
pub struct TicketStore {
    tickets: RwLock<Vec<Arc<Ticket>>>,
    customers: RwLock<Vec<Customer>>,
}

fn find(tickets: &[Arc<Ticket>], id: &str) -> Option<Arc<Ticket>> {
    tickets.iter().find(|t| t.id == id).cloned()
}

impl TicketStore {
    pub fn new(tickets: Vec<Ticket>, customers: Vec<Customer>) -> Self {
        Self {
            tickets: RwLock::new(tickets.into_iter().map(Arc::new).collect()),
            customers: RwLock::new(customers),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::tickets(), seed::customers())
    }

    /// Current board in insertion order.
    pub async fn snapshot(&self) -> Vec<Arc<Ticket>> {
        self.tickets.read().await.clone()
    }

    pub async fn ticket(&self, id: &str) -> Option<Arc<Ticket>> {
        find(&self.tickets.read().await, id)
    }

    /// Replace the board with `mutate(current)` and return `ticket_id` from the result.
    pub async fn apply<F>(&self, ticket_id: &str, mutate: F) -> Option<Arc<Ticket>>
    where
        F: FnOnce(&[Arc<Ticket>]) -> Vec<Arc<Ticket>>,
    {
        let mut tickets = self.tickets.write().await;
        let next = mutate(&tickets);
        *tickets = next;
        find(&tickets, ticket_id)
    }

    /// Like [`apply`](Self::apply) for mutations that can refuse. A refusal leaves the board untouched.
    pub async fn try_apply<F, E>(&self, ticket_id: &str, mutate: F) -> Result<Option<Arc<Ticket>>, E>
    where
        F: FnOnce(&[Arc<Ticket>]) -> Result<Vec<Arc<Ticket>>, E>,
    {
        let mut tickets = self.tickets.write().await;
        let next = mutate(&tickets)?;
        *tickets = next;
        Ok(find(&tickets, ticket_id))
    }

    pub async fn customer(&self, id: &str) -> Option<Customer> {
        self.customers.read().await.iter().find(|c| c.id == id).cloned()
    }

    pub async fn set_customer_notes(&self, id: &str, notes: String) -> Option<Customer> {
        let mut customers = self.customers.write().await;
        let customer = customers.iter_mut().find(|c| c.id == id)?;
        customer.notes = notes;
        tracing::debug!(customer_id = id, "customer notes updated");
        Some(customer.clone())
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketStatus;
    use crate::mutations::{self, QuickAdvanceError};

    #[tokio::test]
    async fn test_apply_swaps_board() {
        let store = TicketStore::seeded();
        let before = store.snapshot().await;

        let updated = store
            .apply("t2", |t| mutations::set_status(t, "t2", TicketStatus::Resolved))
            .await
            .unwrap();
        assert_eq!(updated.status, TicketStatus::Resolved);

        // Earlier snapshots are unaffected
        assert_eq!(before[1].status, TicketStatus::Open);
        assert_eq!(store.ticket("t2").await.unwrap().status, TicketStatus::Resolved);
    }

    #[tokio::test]
    async fn test_apply_unknown_ticket() {
        let store = TicketStore::seeded();
        let result = store.apply("t99", |t| mutations::assign(t, "t99", "a1")).await;
        assert!(result.is_none());
        assert_eq!(store.snapshot().await.len(), 7);
    }

    #[tokio::test]
    async fn test_try_apply_refusal_keeps_board() {
        let store = TicketStore::seeded();
        let author = ReferenceData::seeded().agents[0].clone();
        let err = store
            .try_apply("t7", |t| mutations::quick_advance(t, "t7", "hi", false, &author))
            .await
            .unwrap_err();
        assert!(matches!(err, QuickAdvanceError::Unavailable { .. }));
        assert_eq!(store.ticket("t7").await.unwrap().messages.len(), 2);
    }

    #[tokio::test]
    async fn test_customer_notes() {
        let store = TicketStore::seeded();
        let updated = store.set_customer_notes("c3", "Migrating to Pro next month.".into()).await.unwrap();
        assert_eq!(updated.notes, "Migrating to Pro next month.");
        assert_eq!(store.customer("c3").await.unwrap().notes, "Migrating to Pro next month.");
        assert!(store.set_customer_notes("c9", "x".into()).await.is_none());
    }

    #[test]
    fn test_reference_lookups() {
        let reference = ReferenceData::seeded();
        assert_eq!(reference.agent("a3").unwrap().name, "Sara Obi");
        assert!(reference.agent("a9").is_none());
        assert_eq!(reference.canned_response("cr2").unwrap().title, "Need More Info");
    }
}
