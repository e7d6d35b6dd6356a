//! Response decoding: status short circuits, bounded body reads and the
//! envelope classification that separates payloads from API errors.

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::ErrorResponse;
use crate::Error;

/// Turns a completed exchange into the caller's typed output or an error.
pub(crate) async fn decode_response<T>(
    method: &Method,
    response: Response,
    max_body_size: usize,
) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let status = response.status();
    tracing::trace!(status = status.as_u16(), url = %response.url(), "response");

    // Delete endpoints may answer with an empty or non-JSON body.
    if status.is_success() && *method == Method::DELETE {
        return decode_value(Value::Null);
    }

    if is_hard_failure(status) {
        let body = read_body(response, max_body_size)
            .await
            .map(|buf| truncate_body(&String::from_utf8_lossy(&buf)))
            .unwrap_or_default();
        tracing::error!("Request failed with status {}: {}", status, body);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    let body = read_body(response, max_body_size).await?;
    decode_body(&body)
}

/// Statuses whose bodies are never inspected for structured errors.
pub(crate) fn is_hard_failure(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::UNAUTHORIZED
        || status == StatusCode::NOT_FOUND
}

/// Reads the whole body, failing once it grows past `limit` bytes.
async fn read_body(mut response: Response, limit: usize) -> Result<Vec<u8>, Error> {
    if let Some(length) = response.content_length() {
        if length > limit as u64 {
            return Err(Error::BodyTooLarge { limit });
        }
    }
    let mut buf = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if buf.len() + chunk.len() > limit {
            return Err(Error::BodyTooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Parses a body into the generic envelope, classifies it and decodes the
/// typed output. An empty body decodes as JSON `null`.
pub(crate) fn decode_body<T>(body: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let envelope = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(body).map_err(|source| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                source,
                truncate_body(&String::from_utf8_lossy(body))
            );
            Error::Decode {
                context: "response envelope",
                source,
            }
        })?
    };
    classify(&envelope)?;
    decode_value(envelope)
}

/// Decides whether an envelope is a payload or an API error. The order of
/// the checks is part of the wire contract.
pub(crate) fn classify(envelope: &Value) -> Result<(), Error> {
    let Some(object) = envelope.as_object() else {
        return Ok(());
    };
    if object.contains_key("entities") {
        return Ok(());
    }
    if let Some(status) = object.get("status") {
        return match status {
            Value::Object(_) => check_error_state(status),
            _ => Ok(()),
        };
    }
    if object.contains_key("state") {
        return check_error_state(envelope);
    }
    Ok(())
}

fn check_error_state(carrier: &Value) -> Result<(), Error> {
    let error = serde_json::from_value::<ErrorResponse>(carrier.clone()).map_err(|source| {
        Error::Decode {
            context: "error status",
            source,
        }
    })?;
    if !error.is_error() {
        return Ok(());
    }
    let message = serde_json::to_string_pretty(&error).unwrap_or_else(|_| error.state.clone());
    tracing::debug!("API reported error state: {}", truncate_body(&message));
    Err(Error::Api {
        state: error.state,
        message,
    })
}

/// Maps the envelope onto `T`. Keys match field names exactly, as serde
/// does: the API emits snake_case keys, so case-folded spellings such as
/// `Total_Matches` are treated as unknown and ignored.
fn decode_value<T>(value: Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|source| {
        tracing::error!(
            "Failed to decode {}: {}",
            std::any::type_name::<T>(),
            source
        );
        Error::Decode {
            context: std::any::type_name::<T>(),
            source,
        }
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::types::{Vm, VmList};

    #[test]
    fn entities_win_over_error_status() {
        let envelope = json!({
            "entities": [],
            "status": {"state": "ERROR", "message_list": [{"message": "boom"}]}
        });
        assert!(classify(&envelope).is_ok());
    }

    #[test]
    fn string_status_is_success() {
        assert!(classify(&json!({"status": "ERROR"})).is_ok());
    }

    #[test]
    fn status_object_in_error_state_fails() {
        let envelope = json!({
            "status": {
                "state": "ERROR",
                "code": 422,
                "message_list": [{"message": "bad spec", "reason": "INVALID_REQUEST"}]
            }
        });
        match classify(&envelope) {
            Err(Error::Api { state, message }) => {
                assert_eq!(state, "ERROR");
                assert!(message.contains("bad spec"));
                assert!(message.contains("INVALID_REQUEST"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn status_object_in_other_state_is_success() {
        let envelope = json!({"status": {"state": "COMPLETE"}, "spec": {"name": "vm"}});
        assert!(classify(&envelope).is_ok());
    }

    #[test]
    fn status_object_without_state_is_success() {
        assert!(classify(&json!({"status": {"resources": {}}})).is_ok());
    }

    #[test]
    fn top_level_state_is_checked_directly() {
        let envelope = json!({
            "api_version": "3.1",
            "code": 404,
            "kind": "vm",
            "state": "ERROR",
            "message_list": [{"message": "ENTITY_NOT_FOUND", "reason": "ENTITY_NOT_FOUND"}]
        });
        assert!(matches!(classify(&envelope), Err(Error::Api { .. })));
        assert!(classify(&json!({"state": "SUCCEEDED"})).is_ok());
    }

    #[test]
    fn status_takes_precedence_over_top_level_state() {
        let envelope = json!({"state": "ERROR", "status": {"state": "COMPLETE"}});
        assert!(classify(&envelope).is_ok());
    }

    #[test]
    fn bare_payload_falls_through() {
        assert!(classify(&json!({"task_uuid": "t-1"})).is_ok());
        assert!(classify(&json!([1, 2, 3])).is_ok());
        assert!(classify(&Value::Null).is_ok());
    }

    #[test]
    fn error_dump_is_pretty_printed() {
        let envelope = json!({"state": "ERROR", "message_list": [{"message": "m", "reason": "r"}]});
        let err = classify(&envelope).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @r###"
        {
          "message_list": [
            {
              "message": "m",
              "reason": "r"
            }
          ],
          "state": "ERROR"
        }
        "###);
    }

    #[test]
    fn decode_body_into_typed_list() {
        let body = br#"{"metadata":{"total_matches":1,"offset":0},"entities":[{"metadata":{"uuid":"abc-123"}}],"unknown":true}"#;
        let list: VmList = decode_body(body).unwrap();
        assert_eq!(list.entities.len(), 1);
        assert_eq!(list.entities[0].uuid(), Some("abc-123"));
    }

    #[test]
    fn decode_body_reports_type_mismatch() {
        let body = br#"{"metadata":{"uuid":42}}"#;
        let err = decode_body::<Vm>(body).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn decode_body_rejects_malformed_json() {
        let err = decode_body::<Vm>(b"{not json").unwrap_err();
        assert!(matches!(err, Error::Decode { context: "response envelope", .. }));
    }

    #[test]
    fn keys_match_field_names_exactly() {
        let body = br#"{"metadata":{"Total_Matches":7,"offset":0},"entities":[]}"#;
        let list: VmList = decode_body(body).unwrap();
        assert_eq!(list.metadata.total_matches, 0);
        let body = br#"{"metadata":{"total_matches":7,"offset":0},"entities":[]}"#;
        let list: VmList = decode_body(body).unwrap();
        assert_eq!(list.metadata.total_matches, 7);
    }

    #[test]
    fn empty_body_decodes_unit() {
        assert!(decode_body::<()>(b"").is_ok());
        assert!(decode_body::<Vm>(b"").is_err());
    }

    #[test]
    fn hard_failures() {
        assert!(is_hard_failure(StatusCode::NOT_FOUND));
        assert!(is_hard_failure(StatusCode::UNAUTHORIZED));
        assert!(is_hard_failure(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_hard_failure(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_hard_failure(StatusCode::BAD_REQUEST));
        assert!(!is_hard_failure(StatusCode::FORBIDDEN));
        assert!(!is_hard_failure(StatusCode::CONFLICT));
    }

    #[test]
    fn truncate_long_bodies() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }
}
