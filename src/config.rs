/// Smallest accepted maze width or height.
pub const MAZE_MIN_DIMENSION: u32 = 15;
/// Largest accepted maze width or height.
pub const MAZE_MAX_DIMENSION: u32 = 25;

/// Public endpoint of the maze service.
pub const DEFAULT_API_URL: &str = "https://ponychallenge.trustpilot.com/pony-challenge/";

/// Environment variable overriding the service endpoint.
pub const API_URL_ENV: &str = "PONY_MAZE_API_URL";

#[cfg(feature = "std")]
pub use self::client::*;

#[cfg(feature = "std")]
mod client {
    use std::string::{String, ToString};
    use std::time::Duration;

    /// Default timeout applied to every remote call (30 seconds).
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Settings for talking to the remote maze service.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClientConfig {
        pub api_url: String,
        pub request_timeout: Duration,
        /// Honour proxy settings from the environment.
        pub use_proxy: bool,
    }

    impl Default for ClientConfig {
        fn default() -> Self {
            Self {
                api_url: super::DEFAULT_API_URL.to_string(),
                request_timeout: DEFAULT_REQUEST_TIMEOUT,
                use_proxy: true,
            }
        }
    }

    impl ClientConfig {
        pub fn new(api_url: impl Into<String>) -> Self {
            Self {
                api_url: api_url.into(),
                ..Self::default()
            }
        }

        pub fn with_timeout(mut self, timeout: Duration) -> Self {
            self.request_timeout = timeout;
            self
        }

        /// Connect directly, ignoring `HTTP_PROXY` and friends.
        pub fn without_proxy(mut self) -> Self {
            self.use_proxy = false;
            self
        }
    }
}
