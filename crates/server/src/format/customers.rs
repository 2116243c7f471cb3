use super::{Text, full_name, timestamp};
use stables_client::models::Metadata;
use stables_client::models::customers::{Customer, Entitlement, VerificationLink};

fn entitlements(list: &[Entitlement]) -> String {
    if list.is_empty() {
        return "None".to_string();
    }
    list.iter()
        .map(|e| format!("{}: {}", e.name, e.status))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Details submitted with the create call that the response may not echo back.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmittedCustomer<'a> {
    pub customer_type: &'a str,
    pub first_name: Option<&'a str>,
    pub middle_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub company_name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub nationality: Option<&'a str>,
}

#[must_use]
pub fn customer_created(customer: &Customer, submitted: &SubmittedCustomer<'_>) -> String {
    let mut t = Text::new();
    t.line("Customer created successfully!")
        .blank()
        .field("Customer ID", &customer.customer_id)
        .opt_field("Email", customer.email.as_deref())
        .field("Type", submitted.customer_type)
        .opt_field(
            "Name",
            full_name(
                submitted.first_name,
                submitted.middle_name,
                submitted.last_name,
            )
            .as_deref(),
        )
        .opt_field("Company", submitted.company_name)
        .opt_field("Phone", submitted.phone)
        .opt_field("Nationality", submitted.nationality)
        .field("Entitlements", entitlements(&customer.entitlements))
        .field("Verification Status", customer.verification_status())
        .field("Created", timestamp(customer.created_at.as_deref()))
        .blank()
        .line(
            "Next step: Use 'get_verification_link' to get a KYC verification link for this customer.",
        );
    t.finish()
}

#[must_use]
pub fn customer_details(customer: &Customer) -> String {
    let can_transfer = if customer.is_verified() {
        "Yes"
    } else {
        "No - needs KYC verification"
    };
    let mut t = Text::new();
    t.line("Customer Details:")
        .blank()
        .field("Customer ID", &customer.customer_id)
        .field("Email", customer.email.as_deref().unwrap_or("Not set"))
        .field("Type", &customer.customer_type)
        .opt_field(
            "Name",
            full_name(
                customer.first_name.as_deref(),
                None,
                customer.last_name.as_deref(),
            )
            .as_deref(),
        )
        .opt_field("Company", customer.company_name.as_deref())
        .opt_field("Phone", customer.phone.as_deref())
        .field("Entitlements", entitlements(&customer.entitlements))
        .field("Verification Status", customer.verification_status())
        .field("Can Transfer", can_transfer)
        .field("Created", timestamp(customer.created_at.as_deref()))
        .field("Updated", timestamp(customer.updated_at.as_deref()));
    t.finish()
}

#[must_use]
pub fn customer_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers found. Use 'create_customer' to add your first customer."
            .to_string();
    }
    let mut t = Text::new();
    t.line(format!("Customers ({}):", customers.len())).blank();
    for c in customers {
        t.line(format!(
            "- {}: {} ({}) - {}",
            c.customer_id,
            c.email.as_deref().unwrap_or("No email"),
            c.customer_type,
            c.verification_status()
        ));
    }
    t.finish()
}

#[must_use]
pub fn verification_link(link: &VerificationLink, ttl_in_secs: Option<u64>) -> String {
    let ttl = match ttl_in_secs {
        Some(secs) => format!("{} minutes", secs / 60),
        None => "30 minutes (default)".to_string(),
    };
    let mut t = Text::new();
    t.line("Verification link generated!")
        .blank()
        .field("Customer ID", &link.customer_id)
        .field("Verification Link", &link.kyc_link)
        .blank()
        .line(format!("The link will expire in {ttl}."))
        .line("Share this link with the customer to complete their identity verification.");
    t.finish()
}

#[must_use]
pub fn customer_updated(customer: &Customer) -> String {
    let mut t = Text::new();
    t.line(format!(
        "Customer {} updated successfully.",
        customer.customer_id
    ))
    .blank()
    .opt_field("Email", customer.email.as_deref())
    .opt_field(
        "Name",
        full_name(
            customer.first_name.as_deref(),
            None,
            customer.last_name.as_deref(),
        )
        .as_deref(),
    )
    .field("Updated", timestamp(customer.updated_at.as_deref()));
    t.finish()
}

#[must_use]
pub fn metadata_updated(customer_id: &str, metadata: &Metadata) -> String {
    let keys: Vec<&str> = metadata.keys().map(String::as_str).collect();
    let keys = if keys.is_empty() {
        "(none)".to_string()
    } else {
        keys.join(", ")
    };
    format!("Metadata updated for customer {customer_id}.\n\nKeys set: {keys}")
}
