use super::{Text, timestamp};
use chrono::{DateTime, Utc};
use stables_client::models::quotes::{
    CurrencyAmount, FeeBreakdown, QUOTE_STATUS_CANCELLED, QUOTE_STATUS_EXPIRED, QUOTE_STATUS_USED,
    Quote,
};

/// Whole seconds until `expires_at`, clamped at zero. `None` if absent or unparseable.
#[must_use]
pub fn seconds_until(expires_at: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    let remaining = parse_expiry(expires_at)? - now;
    Some(remaining.num_seconds().max(0))
}

fn parse_expiry(expires_at: Option<&str>) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(expires_at?)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn amount(a: &CurrencyAmount) -> String {
    format!("{} {}", a.amount, a.currency)
}

fn fee_lines(t: &mut Text, fees: &FeeBreakdown) {
    let Some(total) = &fees.total_fee else {
        return;
    };
    t.field("Total Fees", amount(total));
    let parts = [
        ("FX Fee", &fees.fx_fee),
        ("Platform Fee", &fees.platform_fee),
        ("Payment Method Fee", &fees.payment_method_fee),
        ("Network Fee", &fees.network_fee),
        ("Integrator Fee", &fees.integrator_fee),
    ];
    for (label, fee) in parts {
        if let Some(fee) = fee {
            t.line(format!("  {label}: {}", amount(fee)));
        }
    }
}

fn conversion_lines(t: &mut Text, quote: &Quote) {
    let from_network = quote
        .from
        .network
        .as_deref()
        .map(|n| format!(" ({n})"))
        .unwrap_or_default();
    t.line("Converting:")
        .line(format!("  From: {}{from_network}", amount(&quote.from)))
        .line(format!(
            "  To: {} {} via {}",
            quote.to.amount, quote.to.currency, quote.to.payment_method_type
        ));
    if let Some(rate) = quote.exchange_rate {
        t.field("Exchange Rate", rate);
    }
}

#[must_use]
pub fn quote_created(quote: &Quote, now: DateTime<Utc>) -> String {
    let mut t = Text::new();
    t.line("Quote created successfully!")
        .blank()
        .field("Quote ID", &quote.quote_id)
        .field("Status", &quote.status)
        .blank();
    conversion_lines(&mut t, quote);
    t.blank();
    fee_lines(&mut t, &quote.fees);
    if let Some(secs) = seconds_until(quote.expires_at.as_deref(), now) {
        t.blank().line(format!("Expires in: {secs} seconds"));
    }
    t.opt_field("Expires at", quote.expires_at.as_deref())
        .blank()
        .line(
            "To execute this quote, use 'create_transfer' with this quoteId and the customer's ID.",
        );
    t.finish()
}

/// One-line summary of where the quote stands.
#[must_use]
pub fn quote_status_message(quote: &Quote, now: DateTime<Utc>) -> String {
    if quote.has_status(QUOTE_STATUS_USED) {
        return "This quote has already been used to create a transfer.".to_string();
    }
    if quote.has_status(QUOTE_STATUS_CANCELLED) {
        return "This quote has been cancelled.".to_string();
    }
    let past_expiry = parse_expiry(quote.expires_at.as_deref()).is_some_and(|t| t < now);
    if quote.has_status(QUOTE_STATUS_EXPIRED) || past_expiry {
        return "This quote has expired. Create a new quote to proceed.".to_string();
    }
    match seconds_until(quote.expires_at.as_deref(), now) {
        Some(secs) => format!("This quote is active and expires in {secs} seconds."),
        None => "This quote is active.".to_string(),
    }
}

#[must_use]
pub fn quote_details(quote: &Quote, now: DateTime<Utc>) -> String {
    let mut t = Text::new();
    t.line("Quote Details:")
        .blank()
        .field("Quote ID", &quote.quote_id)
        .field("Status", &quote.status)
        .blank();
    conversion_lines(&mut t, quote);
    t.blank();
    fee_lines(&mut t, &quote.fees);
    t.blank()
        .field("Created", timestamp(quote.created_at.as_deref()))
        .field("Expires", timestamp(quote.expires_at.as_deref()))
        .blank()
        .line(quote_status_message(quote, now));
    t.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stables_client::models::quotes::{QUOTE_STATUS_ACTIVE, QuoteDestination};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .expect("fixed clock")
            .with_timezone(&Utc)
    }

    fn quote(status: &str, expires_at: &str) -> Quote {
        Quote {
            quote_id: "q_1".to_string(),
            from: CurrencyAmount {
                currency: "USDC".to_string(),
                amount: "100".to_string(),
                network: Some("polygon".to_string()),
            },
            to: QuoteDestination {
                currency: "EUR".to_string(),
                amount: "91.50".to_string(),
                network: None,
                payment_method_type: "SWIFT".to_string(),
            },
            fees: FeeBreakdown {
                total_fee: Some(CurrencyAmount {
                    currency: "USDC".to_string(),
                    amount: "1.20".to_string(),
                    network: None,
                }),
                fx_fee: Some(CurrencyAmount {
                    currency: "USDC".to_string(),
                    amount: "0.70".to_string(),
                    network: None,
                }),
                ..FeeBreakdown::default()
            },
            exchange_rate: Some(0.925),
            expires_at: Some(expires_at.to_string()),
            status: status.to_string(),
            ..Quote::default()
        }
    }

    #[test]
    fn expiry_counts_down_and_clamps_at_zero() {
        assert_eq!(seconds_until(Some("2026-03-01T12:00:45Z"), now()), Some(45));
        assert_eq!(seconds_until(Some("2026-03-01T11:59:00Z"), now()), Some(0));
        assert_eq!(seconds_until(Some("not a date"), now()), None);
        assert_eq!(seconds_until(None, now()), None);
    }

    #[test]
    fn created_quote_shows_conversion_and_fees() {
        let text = quote_created(&quote(QUOTE_STATUS_ACTIVE, "2026-03-01T12:00:45Z"), now());
        assert!(text.contains("  From: 100 USDC (polygon)"));
        assert!(text.contains("  To: 91.50 EUR via SWIFT"));
        assert!(text.contains("Exchange Rate: 0.925"));
        assert!(text.contains("Total Fees: 1.20 USDC"));
        assert!(text.contains("  FX Fee: 0.70 USDC"));
        assert!(!text.contains("Network Fee"));
        assert!(text.contains("Expires in: 45 seconds"));
    }

    #[test]
    fn status_message_precedence() {
        let past = "2026-03-01T11:00:00Z";
        let future = "2026-03-01T12:00:45Z";
        assert_eq!(
            quote_status_message(&quote(QUOTE_STATUS_USED, past), now()),
            "This quote has already been used to create a transfer."
        );
        assert_eq!(
            quote_status_message(&quote(QUOTE_STATUS_CANCELLED, past), now()),
            "This quote has been cancelled."
        );
        assert_eq!(
            quote_status_message(&quote(QUOTE_STATUS_EXPIRED, future), now()),
            "This quote has expired. Create a new quote to proceed."
        );
        assert_eq!(
            quote_status_message(&quote(QUOTE_STATUS_ACTIVE, past), now()),
            "This quote has expired. Create a new quote to proceed."
        );
        assert_eq!(
            quote_status_message(&quote(QUOTE_STATUS_ACTIVE, future), now()),
            "This quote is active and expires in 45 seconds."
        );
    }

    #[test]
    fn sub_second_remainder_is_still_active() {
        let almost = "2026-03-01T12:00:00.800Z";
        assert_eq!(
            quote_status_message(&quote(QUOTE_STATUS_ACTIVE, almost), now()),
            "This quote is active and expires in 0 seconds."
        );
        let just_gone = "2026-03-01T11:59:59.900Z";
        assert_eq!(
            quote_status_message(&quote(QUOTE_STATUS_ACTIVE, just_gone), now()),
            "This quote has expired. Create a new quote to proceed."
        );
    }

    #[test]
    fn details_end_with_status_message() {
        let text = quote_details(&quote(QUOTE_STATUS_EXPIRED, "2026-03-01T11:00:00Z"), now());
        assert!(text.starts_with("Quote Details:"));
        assert!(text.ends_with("This quote has expired. Create a new quote to proceed."));
    }
}
