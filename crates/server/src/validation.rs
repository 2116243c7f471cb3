//! Tool argument validation.
//!
//! Arguments are checked against the tool's declared JSON Schema before anything else runs,
//! so a rejected call never reaches the network. Unknown parameter names get "did you mean"
//! suggestions; everything else (types, enums, required fields, patterns) is reported from
//! the schema validator.

use serde_json::Value;

/// Validate `args` against `schema`.
///
/// # Errors
///
/// Returns a single human-readable message describing the first problem found: an unknown
/// parameter (with a suggestion when one is close), a missing required parameter, or a
/// schema constraint violation.
pub fn validate_arguments(schema: &Value, args: &Value) -> Result<(), String> {
    let Some(args_obj) = args.as_object() else {
        return Err("arguments must be a JSON object".to_string());
    };

    let props = schema
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    let valid_params: Vec<&str> = props.keys().map(String::as_str).collect();

    // Unknown parameters (suggestions).
    for key in args_obj.keys() {
        if props.contains_key(key) {
            continue;
        }
        let suggestions = find_similar_strings(key, &valid_params);
        return Err(match suggestions.first() {
            Some(s) => format!("unknown parameter '{key}' (did you mean '{s}'?)"),
            None => format!("unknown parameter '{key}'"),
        });
    }

    let missing: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .filter(|r| !args_obj.contains_key(*r))
        .collect();
    if !missing.is_empty() {
        return Err(format!(
            "missing required parameter(s): {}",
            missing.join(", ")
        ));
    }

    let validator = jsonschema::validator_for(schema)
        .map_err(|e| format!("tool schema is invalid: {e}"))?;
    let violations: Vec<String> = validator
        .iter_errors(args)
        .map(|e| {
            let path = e.instance_path().to_string();
            if path.is_empty() {
                e.to_string()
            } else {
                format!("{path}: {e}")
            }
        })
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations.join("; "))
    }
}

/// Known names close to `unknown`, best match first.
#[must_use]
pub fn find_similar_strings(unknown: &str, known: &[&str]) -> Vec<String> {
    let mut candidates: Vec<(f64, String)> = Vec::new();
    for k in known {
        let score = strsim::jaro(unknown, k);
        if score > 0.7 {
            candidates.push((score, (*k).to_string()));
        }
    }
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(_, s)| s).collect()
}
