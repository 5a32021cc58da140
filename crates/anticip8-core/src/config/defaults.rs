// Single source of truth for all default values.

// --- Policy ---
pub const DEFAULT_MARKOV_SMOOTH: f64 = 0.5;
pub const DEFAULT_MIN_PROB: f64 = 0.01;
pub const DEFAULT_DROP_SELF_LOOPS: bool = true;
pub const DEFAULT_ALLOW_PREFETCH_ATTEMPTS: bool = false;
pub const DEFAULT_PREFETCH_ATTEMPT_WEIGHT: f64 = 0.15;
pub const DEFAULT_MAX_PREFETCH: u32 = 2;
pub const DEFAULT_PREFETCH_BUDGET_MS: u32 = 120;
pub const DEFAULT_POLICY_LIMIT: usize = 3;
pub const DEFAULT_NOISE_PREFIXES: &[&str] = &[
    "/docs",
    "/openapi.json",
    "/redoc",
    "/metrics",
    "/_whoami",
    "/health",
];

// --- Embeddings ---
pub const DEFAULT_I2V_PREFIX: &str = "anticip8:i2v:topk:";
pub const DEFAULT_I2V_ALPHA: f64 = 0.45;
pub const DEFAULT_I2V_TOPK: usize = 30;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "anticip8.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
