//! Response Envelope
//!
//! Every backend response is `{ status, message, data }`. List endpoints put
//! either a bare array or a page `{ results, count, next, previous }` in
//! `data`; both decode into [`Page`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// The envelope's `status`, which the backend sends in several shapes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeStatus {
    Flag(bool),
    Code(i64),
    Text(String),
}

impl EnvelopeStatus {
    pub fn is_success(&self) -> bool {
        match self {
            EnvelopeStatus::Flag(ok) => *ok,
            EnvelopeStatus::Code(code) => *code == 1 || (200..300).contains(code),
            EnvelopeStatus::Text(text) => {
                matches!(text.trim().to_lowercase().as_str(), "success" | "ok" | "true" | "200" | "201")
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: Option<EnvelopeStatus>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// A missing status counts as success; the HTTP code already said so.
    pub fn is_success(&self) -> bool {
        self.status.as_ref().map_or(true, EnvelopeStatus::is_success)
    }
}

/// Acknowledgement of a mutation, carrying the backend's message for a toast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ack {
    pub message: Option<String>,
}

impl Ack {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_string())
    }
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { results: Vec::new(), count: 0, next: None, previous: None }
    }
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Pages needed for `count` rows; at least one.
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 1;
        }
        self.count.div_ceil(page_size as u64).max(1)
    }
}

impl<T> From<Vec<T>> for Page<T> {
    fn from(results: Vec<T>) -> Self {
        let count = results.len() as u64;
        Self { results, count, next: None, previous: None }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

/// Decode a 2xx body into its `data`.
pub fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if !envelope.is_success() {
        return Err(rejected(envelope.message));
    }
    envelope.data.ok_or_else(|| ApiError::Decode("response has no data".to_string()))
}

/// Decode a 2xx list body, accepting both list shapes.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, ApiError> {
    let envelope: Envelope<ListPayload<T>> = serde_json::from_str(body)?;
    if !envelope.is_success() {
        return Err(rejected(envelope.message));
    }
    Ok(match envelope.data {
        Some(ListPayload::Paged(page)) => page,
        Some(ListPayload::Plain(items)) => Page::from(items),
        None => Page::default(),
    })
}

/// Decode a 2xx mutation body. Empty bodies (204) are fine.
pub fn decode_ack(body: &str) -> Result<Ack, ApiError> {
    if body.trim().is_empty() {
        return Ok(Ack::default());
    }
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(body)?;
    if !envelope.is_success() {
        return Err(rejected(envelope.message));
    }
    Ok(Ack { message: envelope.message })
}

/// Best-effort `message` from an error body.
pub fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        detail: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.detail))
        .filter(|m| !m.trim().is_empty())
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected { message: message.unwrap_or_else(|| crate::error::GENERIC_ERROR_MESSAGE.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u64,
    }

    #[test]
    fn test_paged_list() {
        let page: Page<Row> = decode_page(
            r#"{"status": 200, "message": "ok", "data": {"results": [{"id": 1}], "count": 11, "next": "?page=2", "previous": null}}"#,
        )
        .unwrap();
        assert_eq!(page.results, vec![Row { id: 1 }]);
        assert!(page.has_next());
        assert_eq!(page.total_pages(10), 2);
    }

    #[test]
    fn test_plain_list() {
        let page: Page<Row> = decode_page(r#"{"status": true, "data": [{"id": 1}, {"id": 2}]}"#).unwrap();
        assert_eq!(page.count, 2);
        assert!(!page.has_next());
        assert_eq!(page.total_pages(10), 1);
    }

    #[test]
    fn test_null_field_keeps_row() {
        use crate::domain::Contact;

        let page: Page<Contact> = decode_page(
            r#"{"status": 200, "data": [{"id": 1, "name": "Asha", "phone": "111"}, {"id": 2, "name": "Bilal", "phone": null}]}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "Bilal");
        assert_eq!(page.results[1].phone, "");
    }

    #[test]
    fn test_rejected_envelope() {
        let err = decode_page::<Row>(r#"{"status": false, "message": "Admin not found", "data": null}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: "Admin not found".into() });
    }

    #[test]
    fn test_text_status() {
        let row: Row = decode_data(r#"{"status": "success", "data": {"id": 5}}"#).unwrap();
        assert_eq!(row, Row { id: 5 });
        assert!(decode_data::<Row>(r#"{"status": "error", "message": "nope"}"#).is_err());
    }

    #[test]
    fn test_ack_empty_body() {
        assert_eq!(decode_ack("").unwrap(), Ack::default());
        let ack = decode_ack(r#"{"status": 201, "message": "Contact created"}"#).unwrap();
        assert_eq!(ack.message_or("Saved"), "Contact created");
    }

    #[test]
    fn test_error_message_variants() {
        assert_eq!(error_message(r#"{"message": "Bad phone"}"#), Some("Bad phone".into()));
        assert_eq!(error_message(r#"{"detail": "Token expired"}"#), Some("Token expired".into()));
        assert_eq!(error_message("<html>502</html>"), None);
    }
}
