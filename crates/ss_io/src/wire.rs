//! Wire formats for `POST /api/analyze`.
//!
//! Request:  `{ "text": string, "age": integer|null, "gender": string|null }`
//! Success:  `{ "sport", "confidence", "reason"?, "additional_recommendations"? }`
//! Error:    `{ "error": string }`
//!
//! Decoding order: JSON parse → `error` key → HTTP status → schema → typed.
//! A structured error payload wins over the status code.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ss_core::{Alternative, AnalysisRequest, AnalysisResult, Confidence, ServiceReply};

use crate::{schema, TransportError};

// ----------------------------- Request -----------------------------

/// Borrowed view of an `AnalysisRequest` in wire shape. Absent fields encode as `null`.
#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub text: &'a str,
    pub age: Option<u32>,
    pub gender: Option<&'a str>,
}

impl<'a> From<&'a AnalysisRequest> for RequestBody<'a> {
    fn from(r: &'a AnalysisRequest) -> Self {
        Self {
            text: r.text(),
            age: r.age(),
            gender: r.gender(),
        }
    }
}

/// Encode the request body as compact JSON bytes.
pub fn encode_request(r: &AnalysisRequest) -> Vec<u8> {
    // Serializing a struct of str/u32/Option fields cannot fail.
    serde_json::to_vec(&RequestBody::from(r)).unwrap_or_default()
}

// ----------------------------- Response -----------------------------

#[derive(Debug, Deserialize)]
struct AlternativeWire {
    sport: String,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct SuccessWire {
    sport: String,
    confidence: f64,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    additional_recommendations: Option<Vec<AlternativeWire>>,
}

impl SuccessWire {
    fn into_result(self) -> Result<AnalysisResult, TransportError> {
        let confidence = confidence_at("/confidence", self.confidence)?;
        let alternatives = self
            .additional_recommendations
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, a)| {
                let pointer = format!("/additional_recommendations/{i}/confidence");
                Ok(Alternative {
                    sport: a.sport,
                    confidence: confidence_at(&pointer, a.confidence)?,
                })
            })
            .collect::<Result<Vec<_>, TransportError>>()?;

        Ok(AnalysisResult {
            sport: self.sport,
            confidence,
            reason: self.reason.filter(|r| !r.trim().is_empty()),
            alternatives,
        })
    }
}

fn confidence_at(pointer: &str, v: f64) -> Result<Confidence, TransportError> {
    Confidence::new(v).map_err(|e| TransportError::Schema {
        pointer: pointer.to_string(),
        msg: e.to_string(),
    })
}

/// Decode a response body into a `ServiceReply`.
pub fn decode_reply(status: u16, body: &[u8]) -> Result<ServiceReply, TransportError> {
    let raw: Value =
        serde_json::from_slice(body).map_err(|e| TransportError::Body(e.to_string()))?;

    match raw.get("error") {
        Some(Value::String(msg)) => return Ok(ServiceReply::Rejected(msg.clone())),
        Some(Value::Null) | None => {}
        Some(_) => {
            return Err(TransportError::Schema {
                pointer: "/error".into(),
                msg: "expected string".into(),
            })
        }
    }

    if !(200..300).contains(&status) {
        return Err(TransportError::Status(status));
    }

    schema::validate_success(&raw)?;

    let wire: SuccessWire = serde_json::from_value(raw).map_err(|e| TransportError::Schema {
        pointer: "/".into(),
        msg: e.to_string(),
    })?;
    wire.into_result().map(ServiceReply::Recommendation)
}
