//! Request and response shapes of the remote invocation API.
//!
//! These mirror the fields the real service client exposes so calling code
//! can build one [`InvokeInput`] and hand it to either backend. Fields the
//! in-memory backend has no use for are still carried.

use bytes::Bytes;
use std::fmt;

/// Status code returned for accepted event invocations.
pub const STATUS_ACCEPTED: i32 = 202;

/// How the service should run the function.
///
/// Parsed from the literal wire strings, case-sensitively: only `"Event"`
/// is [`InvocationType::Event`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvocationType {
    /// Fire-and-forget: the caller receives an acknowledgement only.
    Event,
    /// Request/response: the caller waits for the function's output.
    RequestResponse,
    /// Parameter validation only on the real service.
    DryRun,
    /// Any other marker string.
    Unknown(String),
}

impl InvocationType {
    /// The wire string for this type.
    pub fn as_str(&self) -> &str {
        match self {
            InvocationType::Event => "Event",
            InvocationType::RequestResponse => "RequestResponse",
            InvocationType::DryRun => "DryRun",
            InvocationType::Unknown(other) => other,
        }
    }
}

impl From<&str> for InvocationType {
    fn from(value: &str) -> Self {
        match value {
            "Event" => InvocationType::Event,
            "RequestResponse" => InvocationType::RequestResponse,
            "DryRun" => InvocationType::DryRun,
            other => InvocationType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for InvocationType {
    fn from(value: String) -> Self {
        InvocationType::from(value.as_str())
    }
}

impl fmt::Display for InvocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invocation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeInput {
    /// Name of the function to invoke.
    pub function_name: Option<String>,
    /// Opaque request payload.
    pub payload: Option<Bytes>,
    /// Invocation type; absent means request/response.
    pub invocation_type: Option<InvocationType>,
    /// Version or alias. Ignored by the in-memory backend.
    pub qualifier: Option<String>,
    /// Base64 client context. Ignored by the in-memory backend.
    pub client_context: Option<String>,
    /// Log tail selector. Ignored by the in-memory backend.
    pub log_type: Option<String>,
}

impl InvokeInput {
    /// A request for the named function with no payload.
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: Some(function_name.into()),
            ..Default::default()
        }
    }

    /// Set the payload.
    pub fn payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Set the invocation type.
    pub fn invocation_type(mut self, invocation_type: impl Into<InvocationType>) -> Self {
        self.invocation_type = Some(invocation_type.into());
        self
    }

    /// Set the qualifier.
    pub fn qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Whether this request selects the fire-and-forget path.
    pub fn is_event(&self) -> bool {
        matches!(self.invocation_type, Some(InvocationType::Event))
    }
}

/// An invocation response.
///
/// The in-memory backend fills either `payload` (synchronous) or
/// `status_code` (event), never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeOutput {
    /// Function output for synchronous invocations.
    pub payload: Option<Bytes>,
    /// HTTP-style status code; `202` for accepted events.
    pub status_code: Option<i32>,
    /// Set by the real service when the function raised.
    pub function_error: Option<String>,
    /// Version that ran, as reported by the real service.
    pub executed_version: Option<String>,
    /// Base64 log tail, as reported by the real service.
    pub log_result: Option<String>,
}

impl InvokeOutput {
    /// A synchronous response carrying `payload`.
    pub fn with_payload(payload: Bytes) -> Self {
        Self {
            payload: Some(payload),
            ..Default::default()
        }
    }

    /// The acknowledgement for an accepted event invocation.
    pub fn accepted() -> Self {
        Self {
            status_code: Some(STATUS_ACCEPTED),
            ..Default::default()
        }
    }
}

/// Per-call request options of the shared invocation interface.
///
/// The in-memory backend uses `trace_id` only to tag its log span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeOptions {
    /// Trace identifier propagated by the caller.
    pub trace_id: Option<String>,
}

impl InvokeOptions {
    /// Set the trace identifier.
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_event() {
        assert!(InvokeInput::new("f").invocation_type("Event").is_event());
        assert!(
            !InvokeInput::new("f")
                .invocation_type(InvocationType::RequestResponse)
                .is_event()
        );
        assert!(!InvokeInput::new("f").is_event());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert_eq!(
            InvocationType::from("event"),
            InvocationType::Unknown("event".into())
        );
        assert!(!InvokeInput::new("f").invocation_type("event").is_event());
    }

    #[test]
    fn test_wire_strings() {
        for marker in ["Event", "RequestResponse", "DryRun", "Custom"] {
            assert_eq!(InvocationType::from(marker).as_str(), marker);
        }
    }

    #[test]
    fn test_accepted_has_no_payload() {
        let out = InvokeOutput::accepted();
        assert_eq!(out.status_code, Some(202));
        assert!(out.payload.is_none());

        let out = InvokeOutput::with_payload(Bytes::from_static(b"ok"));
        assert!(out.status_code.is_none());
    }
}
