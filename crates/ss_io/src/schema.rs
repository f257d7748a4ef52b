//! Embedded JSON Schema for the success payload of `POST /api/analyze`.
//!
//! The schema is compiled once. Only the first violation is reported, with its
//! instance path, so messages stay short enough to log on one line.

use serde_json::Value;

use crate::TransportError;

pub const ANALYSIS_RESPONSE_SCHEMA_JSON: &str =
    include_str!("../schemas/analysis_response.schema.json");

#[cfg(feature = "schemaval")]
mod compiled {
    use jsonschema::{Draft, JSONSchema};
    use once_cell::sync::Lazy;
    use serde_json::Value;

    pub(super) static RESPONSE: Lazy<Result<JSONSchema, String>> = Lazy::new(|| {
        let schema_v: Value = serde_json::from_str(super::ANALYSIS_RESPONSE_SCHEMA_JSON)
            .map_err(|e| format!("invalid embedded analysis_response.schema.json: {e}"))?;
        JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema_v)
            .map_err(|e| format!("schema compile error: {e}"))
    });
}

/// Validate a success payload against the embedded schema.
#[cfg(feature = "schemaval")]
pub fn validate_success(raw: &Value) -> Result<(), TransportError> {
    let compiled = compiled::RESPONSE.as_ref().map_err(|msg| TransportError::Schema {
        pointer: "/".into(),
        msg: msg.clone(),
    })?;
    if let Err(iter) = compiled.validate(raw) {
        if let Some(err) = iter.into_iter().next() {
            let ptr = err.instance_path.to_string();
            return Err(TransportError::Schema {
                pointer: if ptr.is_empty() { "/".into() } else { ptr },
                msg: err.to_string(),
            });
        }
    }
    Ok(())
}

/// Without `schemaval` the typed decode in `wire` is the only check.
#[cfg(not(feature = "schemaval"))]
pub fn validate_success(_raw: &Value) -> Result<(), TransportError> {
    Ok(())
}
