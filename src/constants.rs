/// Default per-attempt timeout in milliseconds for API requests
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Default maximum number of retries after the initial attempt
/// A value of 3 means up to 4 total attempts per logical request
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Base delay in milliseconds for exponential backoff between retries
/// The delay before re-attempt `n` is `BACKOFF_BASE_MS * 2^n`
pub const BACKOFF_BASE_MS: u64 = 1_000;
/// Well-known key under which the bearer token is held in client storage
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Default base URL used when `NADLAN_API_BASE_URL` is not configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
/// User agent string used in HTTP requests to identify this client to the Nadlan API
pub const USER_AGENT: &str = "nadlan-client/0.3.1";
