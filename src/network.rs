//! Network URL constants for the warframe.market SDK.

/// Default REST API root. Every endpoint path is appended to this.
pub const DEFAULT_API_URL: &str = "https://api.warframe.market/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
