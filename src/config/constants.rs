// * Configuration Constants
// * Central location for remote endpoints, timeouts and fallback values

// * Chromium release feed, single Stable release for Windows
pub const VERSION_FEED_URL: &str =
    "https://chromiumdash.appspot.com/fetch_releases?channel=Stable&platform=Windows&num=1";

// * IP geolocation service; the IP is appended as a path segment
pub const GEOLOCATION_BASE_URL: &str = "https://demo.ip-api.com/json/";

// * Field selection bitmask understood by the geolocation service
pub const GEOLOCATION_FIELDS: &str = "66842623";

// * Response language requested from the geolocation service
pub const GEOLOCATION_LANG: &str = "en";

// * The geolocation service only answers requests that claim to come from its own site
pub const GEOLOCATION_ORIGIN: &str = "https://ip-api.com";
pub const GEOLOCATION_REFERER: &str = "https://ip-api.com/";

// * Hard deadline for each remote lookup in milliseconds
pub const REMOTE_TIMEOUT_MS: u64 = 5_000;

// * Accept-Language used when a country code has no table entry
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

// * Version of the GREASE brand in client hints
pub const NOT_A_BRAND_VERSION: &str = "24";
