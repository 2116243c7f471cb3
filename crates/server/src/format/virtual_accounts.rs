use super::{Text, timestamp};
use stables_client::models::virtual_accounts::{HistoryEvent, VirtualAccount};

fn abbreviate(address: &str) -> String {
    let head: String = address.chars().take(10).collect();
    if head.len() < address.len() {
        format!("{head}...")
    } else {
        head
    }
}

fn deposit_instruction_lines(t: &mut Text, va: &VirtualAccount) {
    let di = &va.source_deposit_instructions;
    let rails = if di.payment_rails.is_empty() {
        "unknown".to_string()
    } else {
        di.payment_rails.join(", ")
    };
    t.line("Deposit Instructions:")
        .line(format!("  Currency: {}", di.currency))
        .line(format!("  Payment Rails: {rails}"));
    let optional = [
        ("Bank", &di.bank_name),
        ("Account Number", &di.bank_account_number),
        ("Routing Number", &di.bank_routing_number),
        ("IBAN", &di.iban),
        ("BIC", &di.bic),
        ("CLABE", &di.clabe),
        ("PIX Key", &di.pix_key),
        ("Account Holder", &di.account_holder_name),
    ];
    for (label, value) in optional {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            t.line(format!("  {label}: {v}"));
        }
    }
}

fn destination_lines(t: &mut Text, va: &VirtualAccount) {
    match &va.destination {
        Some(d) => {
            t.line("Payout Destination:")
                .line(format!("  Address: {}", d.address))
                .line(format!("  Payment Rail: {}", d.payment_rail))
                .line(format!("  Currency: {}", d.currency));
            if let Some(memo) = d.memo.as_deref().filter(|m| !m.is_empty()) {
                t.line(format!("  Memo: {memo}"));
            }
        }
        None => {
            t.line("Payout Destination: No payout destination configured");
        }
    }
}

#[must_use]
pub fn virtual_account_created(va: &VirtualAccount) -> String {
    let mut t = Text::new();
    t.line("Virtual Account created successfully!")
        .blank()
        .field("Account ID", &va.id)
        .field("Status", &va.status)
        .field("Customer ID", &va.customer_id)
        .opt_field("Deposit Mode", va.deposit_handling_mode.as_deref())
        .blank();
    deposit_instruction_lines(&mut t, va);
    t.blank();
    destination_lines(&mut t, va);
    if let Some(held) = &va.held_balance {
        t.blank()
            .field("Held Balance", format!("{} {}", held.amount, held.currency));
    }
    t.blank()
        .field("Created", timestamp(va.created_at.as_deref()))
        .blank()
        .line("Share the deposit instructions with the customer to receive funds.");
    t.finish()
}

fn summary_line(va: &VirtualAccount, with_customer: bool) -> String {
    let mut line = format!(
        "- {}: {} ({})",
        va.id, va.source_deposit_instructions.currency, va.status
    );
    if with_customer {
        line.push_str(&format!(" - Customer: {}", va.customer_id));
    }
    match &va.destination {
        Some(d) => line.push_str(&format!(
            " - Payout: {} ({})",
            abbreviate(&d.address),
            d.payment_rail
        )),
        None => line.push_str(" - No payout destination"),
    }
    if let Some(held) = &va.held_balance {
        line.push_str(&format!(" | Balance: {} {}", held.amount, held.currency));
    }
    line
}

#[must_use]
pub fn virtual_account_list(customer_id: &str, accounts: &[VirtualAccount], count: Option<u64>) -> String {
    if accounts.is_empty() {
        return format!(
            "No virtual accounts found for customer {customer_id}. Use 'create_virtual_account' to create one."
        );
    }
    let count = count.unwrap_or(accounts.len() as u64);
    let mut t = Text::new();
    t.line(format!(
        "Virtual Accounts for Customer {customer_id} ({count} total):"
    ))
    .blank();
    for va in accounts {
        t.line(summary_line(va, false));
    }
    t.finish()
}

#[must_use]
pub fn all_virtual_accounts_list(accounts: &[VirtualAccount], count: Option<u64>) -> String {
    if accounts.is_empty() {
        return "No virtual accounts found.".to_string();
    }
    let count = count.unwrap_or(accounts.len() as u64);
    let mut t = Text::new();
    t.line(format!("Virtual Accounts ({count} total):")).blank();
    for va in accounts {
        t.line(summary_line(va, true));
    }
    t.finish()
}

#[must_use]
pub fn virtual_account_updated(va: &VirtualAccount) -> String {
    format!(
        "Virtual account {} updated.\nDeposit Mode: {}\nStatus: {}",
        va.id,
        va.deposit_handling_mode.as_deref().unwrap_or("unknown"),
        va.status
    )
}

#[must_use]
pub fn virtual_account_deactivated(va: &VirtualAccount) -> String {
    format!(
        "Virtual account {} has been deactivated. No new deposits will be accepted.",
        va.id
    )
}

#[must_use]
pub fn virtual_account_reactivated(va: &VirtualAccount) -> String {
    format!(
        "Virtual account {} has been reactivated. Status: {}",
        va.id, va.status
    )
}

#[must_use]
pub fn history(virtual_account_id: &str, events: &[HistoryEvent], count: Option<u64>) -> String {
    if events.is_empty() {
        return format!("No activity found for virtual account {virtual_account_id}.");
    }
    let count = count.unwrap_or(events.len() as u64);
    let mut t = Text::new();
    t.line(format!("Virtual Account History ({count} events):"))
        .blank();
    for e in events {
        let mut line = format!(
            "- {}: {} - {} {}",
            e.created_at, e.event_type, e.amount, e.currency
        );
        if let Some(deposit) = e.deposit_id.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!(" (Deposit: {deposit})"));
        }
        t.line(line);
    }
    t.finish()
}
