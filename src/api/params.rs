use std::collections::HashMap;

use super::error::ApiError;

/// Declarative query-parameter contract for one operation.
///
/// Each route declares its required and optional parameter names once;
/// `validate` enforces the contract uniformly before any scan runs,
/// replacing per-handler ad hoc checks.
pub struct ParamSpec {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    /// When set, any parameter outside `required`/`optional` rejects the
    /// request instead of being ignored.
    pub exclusive: bool,
}

/// Parameters that passed their contract, with values trimmed once.
///
/// Required values are guaranteed present and non-empty; optional values
/// that were absent or empty after trimming read as `None`.
pub struct ValidatedParams {
    values: HashMap<String, String>,
}

impl ParamSpec {
    pub fn validate(&self, raw: &HashMap<String, String>) -> Result<ValidatedParams, ApiError> {
        if self.exclusive {
            for name in raw.keys() {
                let recognized = self.required.contains(&name.as_str())
                    || self.optional.contains(&name.as_str());
                if !recognized {
                    return Err(ApiError::Validation(format!(
                        "Unexpected parameter '{}'",
                        name
                    )));
                }
            }
        }

        let mut values = HashMap::new();

        for &name in self.required {
            let value = raw.get(name).map(|v| v.trim()).unwrap_or("");
            if value.is_empty() {
                return Err(ApiError::Validation(format!(
                    "Missing required parameter '{}'",
                    name
                )));
            }
            values.insert(name.to_string(), value.to_string());
        }

        for &name in self.optional {
            if let Some(value) = raw.get(name) {
                let value = value.trim();
                if !value.is_empty() {
                    values.insert(name.to_string(), value.to_string());
                }
            }
        }

        Ok(ValidatedParams { values })
    }
}

impl ValidatedParams {
    /// Value of a required parameter. The contract guarantees presence.
    pub fn required(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Value of an optional parameter, `None` when absent or empty.
    pub fn optional(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}
