//! Seed data loaded once at startup

use crate::models::*;

fn msg(id: &str, author: &str, initials: &str, is_agent: bool, is_internal: bool, timestamp: &str, content: &str) -> Message {
    Message {
        id: id.into(),
        author: author.into(),
        initials: initials.into(),
        is_agent,
        is_internal,
        content: content.into(),
        timestamp: timestamp.into(),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

fn recent(id: &str, subject: &str, status: TicketStatus, date: &str) -> RecentTicket {
    RecentTicket { id: id.into(), subject: subject.into(), status, date: date.into() }
}

pub fn agents() -> Vec<Agent> {
    vec![
        Agent { id: "a1".into(), name: "Maya Chen".into(), initials: "MC".into(), color: "#6366f1".into(), open_tickets: 8, status: AgentStatus::Online },
        Agent { id: "a2".into(), name: "James Park".into(), initials: "JP".into(), color: "#06b6d4".into(), open_tickets: 5, status: AgentStatus::Online },
        Agent { id: "a3".into(), name: "Sara Obi".into(), initials: "SO".into(), color: "#10b981".into(), open_tickets: 12, status: AgentStatus::Away },
        Agent { id: "a4".into(), name: "Tom Reed".into(), initials: "TR".into(), color: "#f59e0b".into(), open_tickets: 3, status: AgentStatus::Offline },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "c1".into(), name: "Alex Rivera".into(), email: "alex@acmecorp.io".into(), company: "Acme Corp".into(),
            plan: Plan::Pro, account_age: "2 years".into(), total_tickets: 14, lifetime_value: "$2,400/yr".into(),
            notes: "Key account. Prefers quick resolutions. Slack integration active.".into(),
            recent_tickets: vec![
                recent("t1", "Dashboard not loading after update", TicketStatus::Open, "Today"),
                recent("th2", "API rate limit questions", TicketStatus::Resolved, "Jan 15"),
                recent("th3", "Billing invoice discrepancy", TicketStatus::Closed, "Dec 3"),
            ],
        },
        Customer {
            id: "c2".into(), name: "Priya Sharma".into(), email: "priya@stacklabs.dev".into(), company: "Stack Labs".into(),
            plan: Plan::Enterprise, account_age: "8 months".into(), total_tickets: 6, lifetime_value: "$12,000/yr".into(),
            notes: "Enterprise customer. CTO-level contact. Very technical. Needs fast SLA.".into(),
            recent_tickets: vec![
                recent("t3", "Team-based permissions setup", TicketStatus::Pending, "Today"),
                recent("th4", "SSO configuration issue", TicketStatus::Resolved, "Jan 18"),
            ],
        },
        Customer {
            id: "c3".into(), name: "Marcus Webb".into(), email: "marcus@bloomshop.co".into(), company: "Bloom Shop".into(),
            plan: Plan::Starter, account_age: "3 months".into(), total_tickets: 3, lifetime_value: "$290/yr".into(),
            notes: "E-commerce store. Uses webhook integrations for order processing.".into(),
            recent_tickets: vec![
                recent("t4", "Webhook events not triggering", TicketStatus::New, "Today"),
            ],
        },
        Customer {
            id: "c4".into(), name: "Jordan Lee".into(), email: "jordan@pixelcraft.studio".into(), company: "Pixel Craft".into(),
            plan: Plan::Pro, account_age: "1 year".into(), total_tickets: 9, lifetime_value: "$1,188/yr".into(),
            notes: "Design agency. Often asks about white-label options. Power user.".into(),
            recent_tickets: vec![
                recent("t2", "Cannot export data to CSV", TicketStatus::Open, "Today"),
                recent("th5", "Custom domain setup", TicketStatus::Closed, "Jan 5"),
            ],
        },
    ]
}

pub fn canned_responses() -> Vec<CannedResponse> {
    vec![
        CannedResponse {
            id: "cr1".into(), title: "Initial Response".into(),
            body: "Hi {{customer_name}},\n\nThank you for reaching out! I've received your request and I'm looking into it now. I'll get back to you within the hour.\n\nBest,\n{{agent_name}}".into(),
        },
        CannedResponse {
            id: "cr2".into(), title: "Need More Info".into(),
            body: "Hi {{customer_name}},\n\nTo help you better, could you please provide:\n1. Your account ID or email\n2. Steps to reproduce the issue\n3. Any error messages you're seeing\n\nThanks,\n{{agent_name}}".into(),
        },
        CannedResponse {
            id: "cr3".into(), title: "Issue Resolved".into(),
            body: "Hi {{customer_name}},\n\nGreat news \u{2014} the issue has been resolved! Please let us know if you run into anything else.\n\nBest,\n{{agent_name}}".into(),
        },
        CannedResponse {
            id: "cr4".into(), title: "Escalation Notice".into(),
            body: "Hi {{customer_name}},\n\nI've escalated your ticket to our engineering team. This typically takes 24\u{2013}48 hours. We'll keep you updated.\n\nSorry for the wait.\n{{agent_name}}".into(),
        },
        CannedResponse {
            id: "cr5".into(), title: "Satisfaction Survey".into(),
            body: "Hi {{customer_name}},\n\nWe hope your issue was resolved to your satisfaction! Would you mind rating your experience? Your feedback helps us improve.\n\n{{agent_name}}".into(),
        },
    ]
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "t1".into(), number: 1042,
            subject: "Dashboard not loading after latest update".into(),
            preview: "Since the v2.4.1 update yesterday, the main dashboard just shows a blank screen...".into(),
            customer_id: "c1".into(), customer_name: "Alex Rivera".into(), customer_email: "alex@acmecorp.io".into(),
            priority: Priority::Urgent, status: TicketStatus::Open, assigned_to: Some("a1".into()),
            created_at: "2h ago".into(), updated_at: "15m ago".into(),
            sla_hours_left: 1.5, sla_total: 4.0, first_response_at: Some("1h ago".into()),
            channel: Channel::Email, tags: tags(&["bug", "dashboard", "v2.4.1"]),
            satisfaction: None,
            messages: vec![
                msg("m1", "Alex Rivera", "AR", false, false, "2h ago", "Since the v2.4.1 update yesterday, the main dashboard just shows a blank screen. I've tried clearing cache, different browsers, and incognito mode. Nothing works. This is blocking our entire team."),
                msg("m2", "Maya Chen", "MC", true, false, "1h ago", "Hi Alex, I'm so sorry to hear this is blocking your team! I've reproduced the issue on our end \u{2014} it appears related to a cache invalidation bug introduced in v2.4.1. Our engineering team is actively working on a fix."),
                msg("m3", "Maya Chen", "MC", true, true, "45m ago", "Engineering confirmed: Redis cache invalidation bug. Hot fix deploying in ~30 mins. Do NOT close this ticket until deployment is verified."),
            ],
        },
        Ticket {
            id: "t2".into(), number: 1041,
            subject: "Cannot export data to CSV \u{2014} getting 500 error".into(),
            preview: "Every time I click Export \u{2192} CSV, I get a server error. Started about 4 hours ago...".into(),
            customer_id: "c4".into(), customer_name: "Jordan Lee".into(), customer_email: "jordan@pixelcraft.studio".into(),
            priority: Priority::High, status: TicketStatus::Open, assigned_to: Some("a2".into()),
            created_at: "4h ago".into(), updated_at: "1h ago".into(),
            sla_hours_left: 3.0, sla_total: 8.0, first_response_at: Some("3h ago".into()),
            channel: Channel::Chat, tags: tags(&["export", "bug", "csv"]),
            satisfaction: None,
            messages: vec![
                msg("m4", "Jordan Lee", "JL", false, false, "4h ago", "Every time I click Export \u{2192} CSV on the Analytics page, I get a '500 Internal Server Error'. This started 4 hours ago. We need this for a client report due today."),
                msg("m5", "James Park", "JP", true, false, "3h ago", "Hi Jordan, I can see the error in our logs. Your export contains 50,000+ rows which hit a temporary limit. I'm adjusting the limit now \u{2014} should be resolved in a few minutes."),
            ],
        },
        Ticket {
            id: "t3".into(), number: 1040,
            subject: "How to set up team-based permissions?".into(),
            preview: "We're onboarding 5 new team members and want to restrict access by department...".into(),
            customer_id: "c2".into(), customer_name: "Priya Sharma".into(), customer_email: "priya@stacklabs.dev".into(),
            priority: Priority::Normal, status: TicketStatus::Pending, assigned_to: Some("a1".into()),
            created_at: "1d ago".into(), updated_at: "3h ago".into(),
            sla_hours_left: 12.0, sla_total: 24.0, first_response_at: Some("20h ago".into()),
            channel: Channel::Email, tags: tags(&["permissions", "onboarding", "team"]),
            satisfaction: None,
            messages: vec![
                msg("m6", "Priya Sharma", "PS", false, false, "1d ago", "We're onboarding 5 new team members and want to restrict access by department (Sales, Engineering, Finance). What's the best way to set this up?"),
                msg("m7", "Maya Chen", "MC", true, false, "20h ago", "Hi Priya! You can set this up under Settings \u{2192} Permissions \u{2192} Team Roles. I've put together a step-by-step guide for your specific setup. Let me know if anything's unclear!"),
                msg("m8", "Priya Sharma", "PS", false, false, "3h ago", "Thanks! I followed the guide but step 3 looks different in our UI \u{2014} we're on Enterprise plan. Could you double-check?"),
            ],
        },
        Ticket {
            id: "t4".into(), number: 1039,
            subject: "Webhook events not triggering for order.completed".into(),
            preview: "Our order.completed webhook hasn't fired since last Tuesday. order.created still works...".into(),
            customer_id: "c3".into(), customer_name: "Marcus Webb".into(), customer_email: "marcus@bloomshop.co".into(),
            priority: Priority::High, status: TicketStatus::New, assigned_to: None,
            created_at: "30m ago".into(), updated_at: "30m ago".into(),
            sla_hours_left: 3.5, sla_total: 4.0, first_response_at: None,
            channel: Channel::Email, tags: tags(&["webhooks", "integration"]),
            satisfaction: None,
            messages: vec![
                msg("m9", "Marcus Webb", "MW", false, false, "30m ago", "Our order.completed webhook hasn't fired since last Tuesday. order.created and order.updated still work fine. Our endpoint is receiving other events. Something seems wrong on your end."),
            ],
        },
        Ticket {
            id: "t5".into(), number: 1038,
            subject: "Request: Dark mode for the mobile app".into(),
            preview: "Our team uses the mobile app frequently and we'd love a dark mode option for late-night shifts...".into(),
            customer_id: "c1".into(), customer_name: "Alex Rivera".into(), customer_email: "alex@acmecorp.io".into(),
            priority: Priority::Low, status: TicketStatus::Open, assigned_to: Some("a3".into()),
            created_at: "3d ago".into(), updated_at: "2d ago".into(),
            sla_hours_left: 48.0, sla_total: 72.0, first_response_at: Some("3d ago".into()),
            channel: Channel::Email, tags: tags(&["feature-request", "mobile", "ui"]),
            satisfaction: None,
            messages: vec![
                msg("m10", "Alex Rivera", "AR", false, false, "3d ago", "Our team uses the mobile app frequently and we'd love a dark mode option. It's especially useful for late-night on-call shifts."),
                msg("m11", "Sara Obi", "SO", true, false, "2d ago", "Hi Alex! Dark mode is on our roadmap for Q2. I've added your account as a +1 to the feature request. We'll notify you when it ships!"),
            ],
        },
        Ticket {
            id: "t6".into(), number: 1037,
            subject: "Account locked after failed 2FA attempts".into(),
            preview: "My colleague tried logging in and after 3 failed 2FA attempts, the account got locked...".into(),
            customer_id: "c4".into(), customer_name: "Jordan Lee".into(), customer_email: "jordan@pixelcraft.studio".into(),
            priority: Priority::Urgent, status: TicketStatus::Resolved, assigned_to: Some("a2".into()),
            created_at: "1d ago".into(), updated_at: "22h ago".into(),
            sla_hours_left: 0.0, sla_total: 4.0, first_response_at: Some("1d ago".into()),
            channel: Channel::Phone, tags: tags(&["account", "2fa", "security"]),
            satisfaction: Some(5),
            messages: vec![
                msg("m12", "Jordan Lee", "JL", false, false, "1d ago", "My colleague's account got locked after 3 failed 2FA attempts. We need it unlocked urgently \u{2014} they're presenting to a client in 2 hours."),
                msg("m13", "James Park", "JP", true, false, "23h ago", "On it! I've unlocked the account and reset the 2FA. Please have your colleague check their email for the re-enrollment link. Should be good to go!"),
            ],
        },
        Ticket {
            id: "t7".into(), number: 1036,
            subject: "Billing shows wrong plan tier on invoice".into(),
            preview: "Invoice #INV-2024-892 shows us on Starter plan but we're on Pro...".into(),
            customer_id: "c2".into(), customer_name: "Priya Sharma".into(), customer_email: "priya@stacklabs.dev".into(),
            priority: Priority::Normal, status: TicketStatus::Closed, assigned_to: Some("a4".into()),
            created_at: "5d ago".into(), updated_at: "4d ago".into(),
            sla_hours_left: 0.0, sla_total: 24.0, first_response_at: Some("5d ago".into()),
            channel: Channel::Email, tags: tags(&["billing", "invoice"]),
            satisfaction: Some(4),
            messages: vec![
                msg("m14", "Priya Sharma", "PS", false, false, "5d ago", "Invoice #INV-2024-892 shows us on the Starter plan but we upgraded to Pro 6 weeks ago. We need a corrected invoice for accounting."),
                msg("m15", "Tom Reed", "TR", true, false, "4d ago", "I've corrected the invoice and sent it to your billing email. I also applied a 10% credit to your next billing cycle for the inconvenience. Sorry about that!"),
            ],
        },
    ]
}
