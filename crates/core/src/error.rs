use thiserror::Error;

/// Errors raised when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IdError {
    #[error("identifier must not be empty")]
    Empty,
}

/// Errors raised when decoding a session signal from its wire shape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ActionError {
    #[error("invalid payload for {kind}: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing payload for {kind}")]
    MissingPayload { kind: &'static str },
}
