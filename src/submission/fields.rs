use serde_json::{Map, Value};

use super::{Submission, EMAIL, FULL_NAME, MESSAGE, PHONE, REQUIRED_FIELDS, SERVICE};
use crate::error::AppError;

/// Text of a field, if it carries any. Strings must be non-empty; non-zero
/// numbers are taken in their JSON spelling. Zero, null, booleans, arrays and
/// objects count as absent.
fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Required keys that are absent or empty, in declaration order.
pub fn missing_required(obj: &Map<String, Value>) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|key| text(obj, key).is_none())
        .map(|key| key.to_string())
        .collect()
}

/// Build a [`Submission`] from parsed fields, stamped with `submitted_at`.
pub fn extract(obj: &Map<String, Value>, submitted_at: String) -> Result<Submission, AppError> {
    let missing = missing_required(obj);
    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }

    let required = |key: &str| text(obj, key).unwrap_or_default();

    Ok(Submission {
        full_name: required(FULL_NAME),
        email: required(EMAIL),
        phone: required(PHONE),
        service_of_interest: required(SERVICE),
        message: text(obj, MESSAGE).unwrap_or_default(),
        submitted_at,
    })
}
