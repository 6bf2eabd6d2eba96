/// Where the dashboard sends its integration requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// Canned responses after a simulated delay
    Mock,
    /// Real calls to the REST endpoints under `Config::API_BASE_URL`
    Http,
}

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend used by the profile and carbon integrations
    pub const BACKEND_MODE: BackendMode = BackendMode::Mock;

    /// Base URL of the profile and carbon REST services
    pub const API_BASE_URL: &'static str = "http://localhost:5000";

    /// Simulated network latency for mock responses in milliseconds
    pub const MOCK_LATENCY_MS: u32 = 1_500;

    /// Maximum number of attempts for rate-limited requests
    pub const MAX_RETRY_ATTEMPTS: u32 = 3;

    /// Delay before charts re-render after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
