use serde::{Deserialize, Serialize};

use crate::constants::ANONYMOUS_USER;

fn anonymous() -> String {
    ANONYMOUS_USER.to_string()
}

fn ok_status() -> u16 {
    200
}

/// A navigation within one service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub service: String,
    #[serde(default = "anonymous")]
    pub user_key: String,
    pub from_path: String,
    pub to_path: String,
    #[serde(default = "ok_status")]
    pub status: u16,
    #[serde(default)]
    pub latency_ms: u32,
}

/// A navigation from one service to another (possibly the same) service.
///
/// Also the shape of a prefetch attempt report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeEvent {
    pub src_service: String,
    #[serde(default = "anonymous")]
    pub user_key: String,
    pub src_path: String,
    pub dst_service: String,
    pub dst_path: String,
    #[serde(default = "ok_status")]
    pub status: u16,
    #[serde(default)]
    pub latency_ms: u32,
}
