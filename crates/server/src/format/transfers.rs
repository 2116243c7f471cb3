use super::{Text, timestamp};
use stables_client::models::PageInfo;
use stables_client::models::transfers::Transfer;

fn direction(transfer: &Transfer) -> &'static str {
    if transfer.is_onramp() {
        "On-ramp (Fiat to Crypto)"
    } else {
        "Off-ramp (Crypto to Fiat)"
    }
}

fn short_direction(transfer: &Transfer) -> &'static str {
    if transfer.is_onramp() {
        "On-ramp"
    } else {
        "Off-ramp"
    }
}

/// Sentence describing a transfer status, if it is one we know.
#[must_use]
pub fn status_sentence(status: &str) -> Option<&'static str> {
    match status {
        "PENDING" => Some("Transfer is waiting to be processed."),
        "IN_PROGRESS" => Some("Transfer is being processed."),
        "COMPLETED" => Some("Transfer completed successfully!"),
        "FAILED" => Some("Transfer failed. Check with support for details."),
        "CANCELLED" => Some("Transfer was cancelled."),
        "EXPIRED" => Some("Transfer expired before completion."),
        _ => None,
    }
}

fn header(t: &mut Text, transfer: &Transfer) {
    t.field("Transfer ID", &transfer.id)
        .field("Type", direction(transfer))
        .field("Status", &transfer.status)
        .field("Customer ID", &transfer.customer_id)
        .field("Quote ID", &transfer.quote_id);
}

fn collection_lines(t: &mut Text, transfer: &Transfer) {
    if let Some(ci) = &transfer.collection_instructions {
        t.blank()
            .line("Collection Instructions (share with customer):")
            .line(format!("  Wallet Address: {}", ci.wallet_address))
            .line(format!("  Currency: {}", ci.currency))
            .line(format!("  Network: {}", ci.network))
            .line(format!("  Amount: {}", ci.amount))
            .blank()
            .line("The customer must send the specified amount to this wallet address. Once received, Stables will process the payout to the bank account.");
    }
}

#[must_use]
pub fn transfer_created(transfer: &Transfer) -> String {
    let mut t = Text::new();
    t.line("Transfer created successfully!").blank();
    header(&mut t, transfer);
    t.field("Created", timestamp(transfer.created_at.as_deref()));
    collection_lines(&mut t, transfer);
    t.blank().line("Use 'get_transfer' to check the status.");
    t.finish()
}

#[must_use]
pub fn transfer_details(transfer: &Transfer) -> String {
    let mut t = Text::new();
    t.line("Transfer Details:").blank();
    header(&mut t, transfer);
    t.field("Created", timestamp(transfer.created_at.as_deref()))
        .field("Updated", timestamp(transfer.updated_at.as_deref()));
    collection_lines(&mut t, transfer);
    if let Some(sentence) = status_sentence(&transfer.status) {
        t.blank().line(sentence);
    }
    t.finish()
}

#[must_use]
pub fn transfer_list(transfers: &[Transfer], page: Option<&PageInfo>) -> String {
    if transfers.is_empty() {
        return "No transfers found matching your criteria.".to_string();
    }
    let total = page
        .and_then(|p| p.total)
        .map_or_else(|| transfers.len().to_string(), |n| n.to_string());
    let mut t = Text::new();
    t.line(format!("Transfers ({} of {total}):", transfers.len()))
        .blank();
    for tr in transfers {
        t.line(format!(
            "- {}: {} - {} (Customer: {})",
            tr.id,
            short_direction(tr),
            tr.status,
            tr.customer_id
        ));
    }
    if let Some(token) = page.and_then(PageInfo::next_token) {
        t.blank()
            .line(format!("More results available. Use pageToken: \"{token}\""));
    }
    t.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stables_client::models::transfers::{
        CollectionInstructions, TRANSFER_TYPE_OFFRAMP, TRANSFER_TYPE_ONRAMP,
    };

    fn transfer(id: &str, kind: &str, status: &str) -> Transfer {
        Transfer {
            id: id.to_string(),
            customer_id: "cus_1".to_string(),
            quote_id: "q_1".to_string(),
            transfer_type: kind.to_string(),
            status: status.to_string(),
            ..Transfer::default()
        }
    }

    #[test]
    fn created_offramp_includes_collection_instructions() {
        let mut tr = transfer("tr_1", TRANSFER_TYPE_OFFRAMP, "PENDING");
        tr.collection_instructions = Some(CollectionInstructions {
            wallet_address: "0xabc".to_string(),
            currency: "USDC".to_string(),
            network: "polygon".to_string(),
            amount: "100".to_string(),
        });
        let text = transfer_created(&tr);
        assert!(text.contains("Type: Off-ramp (Crypto to Fiat)"));
        assert!(text.contains("  Wallet Address: 0xabc"));
        assert!(text.ends_with("Use 'get_transfer' to check the status."));
    }

    #[test]
    fn details_explain_status() {
        let text = transfer_details(&transfer("tr_1", TRANSFER_TYPE_ONRAMP, "FAILED"));
        assert!(text.contains("Type: On-ramp (Fiat to Crypto)"));
        assert!(text.ends_with("Transfer failed. Check with support for details."));
        assert!(!transfer_details(&transfer("tr_2", TRANSFER_TYPE_ONRAMP, "ODD")).contains("Transfer is"));
    }

    #[test]
    fn list_shows_total_and_next_page() {
        let page = PageInfo {
            next_page_token: Some("tok_2".to_string()),
            total: Some(7),
        };
        let text = transfer_list(
            &[
                transfer("tr_1", TRANSFER_TYPE_OFFRAMP, "COMPLETED"),
                transfer("tr_2", TRANSFER_TYPE_ONRAMP, "PENDING"),
            ],
            Some(&page),
        );
        assert!(text.starts_with("Transfers (2 of 7):"));
        assert!(text.contains("- tr_1: Off-ramp - COMPLETED (Customer: cus_1)"));
        assert!(text.ends_with("More results available. Use pageToken: \"tok_2\""));
    }

    #[test]
    fn empty_list_and_last_page() {
        assert_eq!(
            transfer_list(&[], None),
            "No transfers found matching your criteria."
        );
        let page = PageInfo {
            next_page_token: Some(String::new()),
            total: None,
        };
        let text = transfer_list(&[transfer("tr_1", TRANSFER_TYPE_ONRAMP, "PENDING")], Some(&page));
        assert!(text.starts_with("Transfers (1 of 1):"));
        assert!(!text.contains("More results"));
    }
}
