use super::{Text, timestamp, yes_no};
use stables_client::models::webhooks::WebhookSubscription;

/// Event types accepted by webhook subscriptions.
pub const EVENT_TYPES: &[&str] = &[
    "WEBHOOK_EVENT_TYPE_CUSTOMER_CREATED",
    "WEBHOOK_EVENT_TYPE_CUSTOMER_UPDATED",
    "WEBHOOK_EVENT_TYPE_KYC_STATUS_CHANGED",
    "WEBHOOK_EVENT_TYPE_PAYMENT_CREATED",
    "WEBHOOK_EVENT_TYPE_PAYMENT_STATUS_CHANGED",
    "WEBHOOK_EVENT_TYPE_QUOTE_CREATED",
    "WEBHOOK_EVENT_TYPE_QUOTE_EXPIRED",
    "WEBHOOK_EVENT_TYPE_VA_DEPOSIT_RECEIVED",
    "WEBHOOK_EVENT_TYPE_VA_PAYOUT_COMPLETED",
    "WEBHOOK_EVENT_TYPE_VA_PAYOUT_FAILED",
    "WEBHOOK_EVENT_TYPE_ALL",
];

fn active_label(sub: &WebhookSubscription) -> &'static str {
    if sub.active { "Active" } else { "Inactive" }
}

/// `secret_configured` reflects the request; the secret itself is never echoed.
#[must_use]
pub fn webhook_created(sub: &WebhookSubscription, secret_configured: bool) -> String {
    let secret = if secret_configured {
        "Configured (verify via X-Webhook-Signature header)"
    } else {
        "Not set"
    };
    let mut t = Text::new();
    t.line("Webhook created successfully!")
        .blank()
        .field("Subscription ID", &sub.subscription_id)
        .field("Name", &sub.name)
        .field("URL", &sub.url)
        .field("Event Types", sub.event_types.join(", "))
        .field("Active", yes_no(sub.active))
        .field("Signing Secret", secret)
        .field("Created", timestamp(sub.created_at.as_deref()))
        .blank()
        .line("Your endpoint will now receive POST requests when these events occur.")
        .line("Tip: Return 200 quickly and process events asynchronously. Use eventId for idempotency.");
    t.finish()
}

#[must_use]
pub fn webhook_list(subs: &[WebhookSubscription]) -> String {
    if subs.is_empty() {
        return [
            "No webhooks configured. Use 'create_webhook' to subscribe to events.",
            "",
            "Available event types include:",
            "- WEBHOOK_EVENT_TYPE_PAYMENT_STATUS_CHANGED",
            "- WEBHOOK_EVENT_TYPE_KYC_STATUS_CHANGED",
            "- WEBHOOK_EVENT_TYPE_VA_DEPOSIT_RECEIVED",
            "- WEBHOOK_EVENT_TYPE_ALL (subscribe to everything)",
        ]
        .join("\n");
    }
    let entries: Vec<String> = subs
        .iter()
        .map(|s| {
            format!(
                "- {}: \"{}\" -> {} ({})\n  Events: {}",
                s.subscription_id,
                s.name,
                s.url,
                active_label(s),
                s.event_types.join(", ")
            )
        })
        .collect();
    format!(
        "Webhooks ({}):\n\n{}",
        subs.len(),
        entries.join("\n\n")
    )
}

#[must_use]
pub fn webhook_deleted(webhook_id: &str) -> String {
    format!(
        "Webhook {webhook_id} has been deleted. You will no longer receive events at this endpoint."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: &str, active: bool) -> WebhookSubscription {
        WebhookSubscription {
            subscription_id: id.to_string(),
            name: "ops".to_string(),
            url: "https://hooks.example/stables".to_string(),
            event_types: vec![
                "WEBHOOK_EVENT_TYPE_PAYMENT_STATUS_CHANGED".to_string(),
                "WEBHOOK_EVENT_TYPE_VA_DEPOSIT_RECEIVED".to_string(),
            ],
            active,
            ..WebhookSubscription::default()
        }
    }

    #[test]
    fn created_reports_secret_presence_only() {
        let text = webhook_created(&sub("wh_1", true), true);
        assert!(text.contains("Subscription ID: wh_1"));
        assert!(text.contains("Active: Yes"));
        assert!(text.contains("Signing Secret: Configured"));
        assert!(webhook_created(&sub("wh_1", true), false).contains("Signing Secret: Not set"));
    }

    #[test]
    fn list_separates_entries_with_blank_lines() {
        let text = webhook_list(&[sub("wh_1", true), sub("wh_2", false)]);
        assert!(text.starts_with("Webhooks (2):"));
        assert!(text.contains(
            "- wh_1: \"ops\" -> https://hooks.example/stables (Active)\n  Events: WEBHOOK_EVENT_TYPE_PAYMENT_STATUS_CHANGED, WEBHOOK_EVENT_TYPE_VA_DEPOSIT_RECEIVED\n\n- wh_2"
        ));
        assert!(text.contains("(Inactive)"));
    }

    #[test]
    fn empty_list_suggests_event_types() {
        let text = webhook_list(&[]);
        assert!(text.starts_with("No webhooks configured."));
        assert!(text.contains("WEBHOOK_EVENT_TYPE_ALL (subscribe to everything)"));
    }
}
