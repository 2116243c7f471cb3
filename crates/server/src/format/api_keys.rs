use super::{Text, timestamp, yes_no};
use stables_client::models::PageInfo;
use stables_client::models::api_keys::{ApiKey, CreatedApiKey};

fn active_label(key: &ApiKey) -> &'static str {
    if key.active { "Active" } else { "Revoked" }
}

/// Includes the plaintext secret. This text goes to the caller only.
#[must_use]
pub fn api_key_created(created: &CreatedApiKey) -> String {
    let key = &created.api_key;
    let mut t = Text::new();
    t.line("API Key created successfully!")
        .blank()
        .field("Key ID", key.key_id())
        .field("Name", &key.name)
        .field("Prefix", &key.prefix)
        .field("Active", yes_no(key.active))
        .field("Created", timestamp(key.created_at.as_deref()))
        .blank()
        .field("SECRET KEY", &created.plaintext_key)
        .blank()
        .line("IMPORTANT: Save the secret key now! It will not be shown again.");
    t.finish()
}

#[must_use]
pub fn api_key_list(keys: &[ApiKey], page: Option<&PageInfo>) -> String {
    if keys.is_empty() {
        return "No API keys found. Use 'create_api_key' to create one.".to_string();
    }
    let mut t = Text::new();
    t.line(format!("API Keys ({}):", keys.len())).blank();
    for k in keys {
        t.line(format!(
            "- {}: \"{}\" ({}...) - {} - Created: {}",
            k.key_id(),
            k.name,
            k.prefix,
            active_label(k),
            timestamp(k.created_at.as_deref())
        ));
    }
    if let Some(token) = page.and_then(PageInfo::next_token) {
        t.blank()
            .line(format!("More results available. Use pageToken: \"{token}\""));
    }
    t.finish()
}

#[must_use]
pub fn api_key_details(key: &ApiKey) -> String {
    let last_used = key
        .last_used_at
        .as_deref()
        .filter(|s| !s.is_empty())
        .map_or_else(|| "Never used".to_string(), |at| format!("Last Used: {at}"));
    let mut t = Text::new();
    t.line("API Key Details:")
        .blank()
        .field("Key ID", key.key_id())
        .field("Name", &key.name)
        .field("Prefix", &key.prefix)
        .field("Active", yes_no(key.active))
        .field("Created", timestamp(key.created_at.as_deref()))
        .opt_field("Updated", key.updated_at.as_deref())
        .line(last_used);
    t.finish()
}

#[must_use]
pub fn api_key_revoked(api_key_id: &str) -> String {
    format!(
        "API key {api_key_id} has been revoked successfully. This key can no longer be used to access the API."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey {
            api_key_id: "key_1".to_string(),
            name: "ci".to_string(),
            prefix: "sk_live_ab".to_string(),
            created_at: Some("2026-01-01T00:00:00Z".to_string()),
            ..ApiKey::default()
        }
    }

    #[test]
    fn created_key_shows_secret_once_with_warning() {
        let text = api_key_created(&CreatedApiKey {
            api_key: key(),
            plaintext_key: "sk_live_abcdef".to_string(),
        });
        assert!(text.contains("Key ID: key_1"));
        assert!(text.contains("SECRET KEY: sk_live_abcdef"));
        assert_eq!(text.matches("sk_live_abcdef").count(), 1);
        assert!(text.ends_with("It will not be shown again."));
    }

    #[test]
    fn list_marks_revoked_keys() {
        let mut revoked = key();
        revoked.api_key_id = "key_2".to_string();
        revoked.active = false;
        let text = api_key_list(&[key(), revoked], None);
        assert!(text.contains("- key_1: \"ci\" (sk_live_ab...) - Active - Created: 2026-01-01T00:00:00Z"));
        assert!(text.contains("- key_2: \"ci\" (sk_live_ab...) - Revoked"));
        assert!(api_key_list(&[], None).starts_with("No API keys found."));
    }

    #[test]
    fn details_report_last_use() {
        assert!(api_key_details(&key()).ends_with("Never used"));
        let mut used = key();
        used.last_used_at = Some("2026-02-02T00:00:00Z".to_string());
        assert!(api_key_details(&used).ends_with("Last Used: 2026-02-02T00:00:00Z"));
    }

    #[test]
    fn revoke_names_the_key() {
        assert!(api_key_revoked("key_1").starts_with("API key key_1 has been revoked"));
    }
}
