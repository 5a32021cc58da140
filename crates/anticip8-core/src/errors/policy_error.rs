/// Policy query errors. Only malformed input is surfaced; every other
/// failure degrades to a partial or empty result.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}
