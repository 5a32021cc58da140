use serde::{Deserialize, Serialize};

use crate::errors::{Anticip8Result, PolicyError};

/// A validated policy request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyQuery {
    pub service: String,
    /// Raw request path, not yet normalized.
    pub path: String,
    /// Requested result count; `None` falls back to the configured default.
    pub limit: Option<usize>,
}

impl PolicyQuery {
    pub fn new(service: impl Into<String>, path: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            service: service.into(),
            path: path.into(),
            limit,
        }
    }

    /// Build a query from raw request parameters.
    ///
    /// `service` and `path` are required and must be non-empty. A negative
    /// `limit` clamps to 0; an unparseable one is ignored.
    pub fn from_params(
        service: Option<&str>,
        path: Option<&str>,
        limit: Option<&str>,
    ) -> Anticip8Result<Self> {
        let service = required(service, "service")?;
        let path = required(path, "path")?;
        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|v| usize::try_from(v.max(0)).unwrap_or(usize::MAX));
        Ok(Self::new(service, path, limit))
    }

    /// Reject queries with an empty service or path.
    pub fn validate(&self) -> Anticip8Result<()> {
        required(Some(&self.service), "service")?;
        required(Some(&self.path), "path")?;
        Ok(())
    }

    pub fn effective_limit(&self, default_limit: usize) -> usize {
        self.limit.unwrap_or(default_limit)
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Anticip8Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PolicyError::MissingField { field }.into()),
    }
}
