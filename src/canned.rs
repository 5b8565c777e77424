//! Canned response templates

use crate::models::{first_name, Agent, CannedResponse, Ticket};

pub const CUSTOMER_PLACEHOLDER: &str = "{{customer_name}}";
pub const AGENT_PLACEHOLDER: &str = "{{agent_name}}";

/// Signature used when the ticket has no (known) assignee.
pub const FALLBACK_AGENT_NAME: &str = "Support Team";

/// Fill the first occurrence of each placeholder.
pub fn render(body: &str, customer_name: &str, agent_name: Option<&str>) -> String {
    body.replacen(CUSTOMER_PLACEHOLDER, first_name(customer_name), 1)
        .replacen(AGENT_PLACEHOLDER, agent_name.unwrap_or(FALLBACK_AGENT_NAME), 1)
}

/// Render `template` for a reply on `ticket`, signed by its assignee.
pub fn render_for_ticket(template: &CannedResponse, ticket: &Ticket, agents: &[Agent]) -> String {
    let assignee = ticket
        .assigned_to
        .as_deref()
        .and_then(|id| agents.iter().find(|a| a.id == id));
    render(&template.body, &ticket.customer_name, assignee.map(|a| a.name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_render_substitutes_first_name_and_agent() {
        let rendered = render("Hi {{customer_name}}, thanks. {{agent_name}}", "Alex Rivera", Some("Maya Chen"));
        assert_eq!(rendered, "Hi Alex, thanks. Maya Chen");
    }

    #[test]
    fn test_render_only_first_occurrence() {
        let rendered = render("{{customer_name}} {{customer_name}}", "Priya Sharma", None);
        assert_eq!(rendered, "Priya {{customer_name}}");
    }

    #[test]
    fn test_unassigned_ticket_signs_as_team() {
        let tickets = seed::tickets();
        let unassigned = tickets.iter().find(|t| t.id == "t4").unwrap();
        let template = &seed::canned_responses()[0];

        let body = render_for_ticket(template, unassigned, &seed::agents());
        assert!(body.starts_with("Hi Marcus,"));
        assert!(body.ends_with("Best,\nSupport Team"));
    }

    #[test]
    fn test_unknown_assignee_signs_as_team() {
        let mut ticket = seed::tickets().remove(0);
        ticket.assigned_to = Some("ghost".into());
        let template = &seed::canned_responses()[4];
        assert!(render_for_ticket(template, &ticket, &seed::agents()).ends_with("Support Team"));
    }
}
