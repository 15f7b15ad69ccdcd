use serde::{Deserialize, Deserializer};
use std::fmt;
use std::io::Read;

pub type Result<T> = std::result::Result<T, ElasticsearchError>;

#[derive(Debug, thiserror::Error)]
pub enum ElasticsearchError {
    /// An error reply Elasticsearch sent back as JSON
    #[error("{0}")]
    Response(ErrorReply),

    /// A non-success status whose body couldn't be interpreted
    #[error("{0}")]
    Status(StatusError),

    /// Any error that came back with `400 Bad Request`
    #[error("{0}")]
    BadRequest(Box<ElasticsearchError>),

    #[error("elastic: index is missing")]
    MissingIndex,

    #[error("elastic: type is missing")]
    MissingType,

    #[error("elastic: id is missing")]
    MissingId,

    /// The request never got a response: connection refused, DNS, TLS, timeouts...
    #[error("elastic: transport error: {0}")]
    Transport(#[source] Box<ureq::Transport>),

    #[error("elastic: invalid configuration: {0}")]
    Config(String),

    #[error("elastic: {0}")]
    Io(#[from] std::io::Error),

    #[error("elastic: {0}")]
    Json(#[from] serde_json::Error),

    #[error("elastic: {0}")]
    Url(#[from] url::ParseError),
}

impl ElasticsearchError {
    pub fn is_bad_request(&self) -> bool {
        matches!(self, ElasticsearchError::BadRequest(_))
    }

    /// The status this error was classified from, if it came from a response.  For
    /// an error reply that's the status Elasticsearch put in the body.
    pub fn status(&self) -> Option<i64> {
        match self {
            ElasticsearchError::Response(reply) => Some(reply.status),
            ElasticsearchError::Status(error) => Some(i64::from(error.status)),
            ElasticsearchError::BadRequest(inner) => inner.status(),
            _ => None,
        }
    }

    fn bad_request_if_400(status: u16, error: ElasticsearchError) -> ElasticsearchError {
        if status == 400 {
            ElasticsearchError::BadRequest(Box::new(error))
        } else {
            error
        }
    }
}

/// The canonical reason phrase for `status`, or an empty string for unknown codes
pub fn status_text(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub status: u16,
    pub read_error: Option<String>,
}

impl StatusError {
    pub fn new(status: u16) -> Self {
        StatusError {
            status,
            read_error: None,
        }
    }

    fn when_reading_body(status: u16, e: std::io::Error) -> Self {
        StatusError {
            status,
            read_error: Some(e.to_string()),
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "elastic: Error {} ({})",
            self.status,
            status_text(self.status)
        )?;
        if let Some(read_error) = &self.read_error {
            write!(f, " when reading body: {}", read_error)?;
        }
        Ok(())
    }
}

/// The JSON error body Elasticsearch replies with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub status: i64,
    #[serde(default, rename = "error", deserialize_with = "deserialize_error_message")]
    pub message: String,
}

impl fmt::Display for ErrorReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = u16::try_from(self.status).map(status_text).unwrap_or("");
        write!(f, "elastic: Error {} ({})", self.status, text)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

fn deserialize_error_message<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct ErrorCause {
        #[serde(rename = "type")]
        kind: Option<String>,
        reason: Option<String>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ErrorField {
        Message(String),
        Cause(ErrorCause),
    }

    Ok(match Option::<ErrorField>::deserialize(deserializer)? {
        None => String::new(),
        Some(ErrorField::Message(message)) => message,
        Some(ErrorField::Cause(cause)) => match (cause.kind, cause.reason) {
            (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => String::new(),
        },
    })
}

/// Classifies a response by its status code.  2xx and 404 are not errors; anything
/// else is turned into an [`ElasticsearchError`], using the body when it's an
/// Elasticsearch error reply.
pub fn check_response<R: Read>(status: u16, body: Option<R>) -> Result<()> {
    if (200..=299).contains(&status) || status == 404 {
        return Ok(());
    }

    let mut body = match body {
        Some(body) => body,
        None => {
            return Err(ElasticsearchError::bad_request_if_400(
                status,
                ElasticsearchError::Status(StatusError::new(status)),
            ))
        }
    };

    let mut slurp = Vec::new();
    if let Err(e) = body.read_to_end(&mut slurp) {
        return Err(ElasticsearchError::bad_request_if_400(
            status,
            ElasticsearchError::Status(StatusError::when_reading_body(status, e)),
        ));
    }

    Err(create_response_error(status, &slurp))
}

pub fn create_response_error(status: u16, data: &[u8]) -> ElasticsearchError {
    // a literal `null` body parses as an empty reply
    let error = match serde_json::from_slice::<Option<ErrorReply>>(data) {
        Ok(reply) => {
            let mut reply = reply.unwrap_or(ErrorReply {
                status: 0,
                message: String::new(),
            });
            if reply.status == 0 {
                reply.status = i64::from(status);
            }
            ElasticsearchError::Response(reply)
        }
        Err(_) => ElasticsearchError::Status(StatusError::new(status)),
    };

    ElasticsearchError::bad_request_if_400(status, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            ))
        }
    }

    #[test]
    fn test_success_and_not_found_are_not_errors() {
        for status in (200..=299).chain(std::iter::once(404)) {
            assert!(check_response(status, Some(&b"garbage"[..])).is_ok());
            assert!(check_response::<&[u8]>(status, None).is_ok());
        }
    }

    #[test]
    fn test_other_statuses_are_errors() {
        for status in [100, 199, 300, 301, 400, 401, 403, 405, 409, 500, 503] {
            assert!(check_response::<&[u8]>(status, None).is_err(), "{}", status);
        }
    }

    #[test]
    fn test_bad_request_with_unparseable_body() {
        let e = check_response(400, Some(&b"this is not json"[..])).unwrap_err();
        assert!(e.is_bad_request());
        assert_eq!(e.status(), Some(400));
        assert_eq!(e.to_string(), "elastic: Error 400 (Bad Request)");
        match e {
            ElasticsearchError::BadRequest(inner) => {
                assert!(matches!(*inner, ElasticsearchError::Status(_)))
            }
            _ => panic!("expected a bad request"),
        }
    }

    #[test]
    fn test_bad_request_with_error_reply() {
        let e = create_response_error(400, br#"{"status":400,"error":"QueryParsingException"}"#);
        assert!(e.is_bad_request());
        assert_eq!(
            e.to_string(),
            "elastic: Error 400 (Bad Request): QueryParsingException"
        );
    }

    #[test]
    fn test_error_reply_keeps_its_message() {
        let e = create_response_error(500, br#"{"status":500,"error":"boom"}"#);
        assert!(!e.is_bad_request());
        match &e {
            ElasticsearchError::Response(reply) => {
                assert_eq!(reply.status, 500);
                assert_eq!(reply.message, "boom");
            }
            _ => panic!("expected an error reply"),
        }
        assert_eq!(e.to_string(), "elastic: Error 500 (Internal Server Error): boom");
    }

    #[test]
    fn test_error_reply_without_status_uses_http_status() {
        let e = create_response_error(503, br#"{"error":"unavailable"}"#);
        assert_eq!(e.status(), Some(503));
        assert_eq!(
            e.to_string(),
            "elastic: Error 503 (Service Unavailable): unavailable"
        );
    }

    #[test]
    fn test_error_reply_status_differs_from_http_status() {
        let e = create_response_error(400, br#"{"status":409,"error":"conflict"}"#);
        assert!(e.is_bad_request());
        assert_eq!(e.status(), Some(409));
    }

    #[test]
    fn test_empty_error_reply() {
        let e = create_response_error(500, b"{}");
        assert_eq!(e.to_string(), "elastic: Error 500 (Internal Server Error)");
    }

    #[test]
    fn test_structured_error_cause() {
        let e = create_response_error(
            400,
            br#"{"error":{"root_cause":[],"type":"parsing_exception","reason":"unknown query [mlt]"},"status":400}"#,
        );
        assert!(e.is_bad_request());
        assert_eq!(
            e.to_string(),
            "elastic: Error 400 (Bad Request): parsing_exception: unknown query [mlt]"
        );
    }

    #[test]
    fn test_null_body_is_an_empty_error_reply() {
        let e = create_response_error(500, b"null");
        match &e {
            ElasticsearchError::Response(reply) => {
                assert_eq!(reply.status, 500);
                assert_eq!(reply.message, "");
            }
            _ => panic!("expected an error reply, got {:?}", e),
        }
        assert_eq!(e.to_string(), "elastic: Error 500 (Internal Server Error)");

        assert!(create_response_error(400, b"null").is_bad_request());
    }

    #[test]
    fn test_error_reply_with_out_of_range_status() {
        let e = create_response_error(500, br#"{"status":70000,"error":"x"}"#);
        match &e {
            ElasticsearchError::Response(reply) => {
                assert_eq!(reply.status, 70000);
                assert_eq!(reply.message, "x");
            }
            _ => panic!("expected an error reply, got {:?}", e),
        }
        assert_eq!(e.status(), Some(70000));
        assert_eq!(e.to_string(), "elastic: Error 70000 (): x");
    }

    #[test]
    fn test_unparseable_body_is_generic() {
        let e = create_response_error(502, b"<html>bad gateway</html>");
        assert!(!e.is_bad_request());
        assert_eq!(e.to_string(), "elastic: Error 502 (Bad Gateway)");
    }

    #[test]
    fn test_missing_body() {
        let e = check_response::<&[u8]>(500, None).unwrap_err();
        assert_eq!(e.to_string(), "elastic: Error 500 (Internal Server Error)");

        let e = check_response::<&[u8]>(400, None).unwrap_err();
        assert!(e.is_bad_request());
    }

    #[test]
    fn test_body_read_failure() {
        let e = check_response(500, Some(FailingReader)).unwrap_err();
        match &e {
            ElasticsearchError::Status(error) => {
                assert_eq!(error.read_error.as_deref(), Some("connection reset"))
            }
            _ => panic!("expected a status error, got {:?}", e),
        }
        assert_eq!(
            e.to_string(),
            "elastic: Error 500 (Internal Server Error) when reading body: connection reset"
        );
    }

    #[test]
    fn test_unknown_status_has_empty_text() {
        let e = check_response::<&[u8]>(599, None).unwrap_err();
        assert_eq!(e.to_string(), "elastic: Error 599 ()");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(
            ElasticsearchError::MissingIndex.to_string(),
            "elastic: index is missing"
        );
        assert_eq!(ElasticsearchError::MissingType.status(), None);
    }
}
