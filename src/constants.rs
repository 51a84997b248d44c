//! Application constants
//!
//! Centralized location for endpoint defaults and fixed strings.

/// Default base URL of the posts service
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of posts requested on the initial load
pub const DEFAULT_LIMIT: usize = 10;

/// Number of posts requested on refresh. Always larger than the initial load.
pub const REFRESH_LIMIT: usize = 20;

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory under the home directory holding the optional config file
pub const CONFIG_DIR_NAME: &str = ".postboard";

/// Config file name inside `CONFIG_DIR_NAME`
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "postboard.log";

/// Application name
pub const APP_NAME: &str = "Postboard";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("postboard-tui/", env!("CARGO_PKG_VERSION"));
