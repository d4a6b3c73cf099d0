// * Chrome user-agent templating for a fetched release milestone

use crate::identity::tables::random_user_agent;
use crate::identity::types::{BrowserType, Platform};
use crate::network::errors::NetworkError;
use crate::ops::telemetry;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

// * OS token inside the parenthesised platform section of the UA
pub fn platform_token(os: Platform) -> &'static str {
    match os {
        Platform::Windows => "Windows NT 10.0; Win64; x64",
        Platform::Linux => "X11; Linux x86_64",
        Platform::Mac => "Macintosh; Intel Mac OS X 10_15_7",
    }
}

pub fn build_user_agent(milestone: u32, os: Platform) -> String {
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.0.0 Safari/537.36",
        platform_token(os),
        milestone
    )
}

pub fn random_platform<R: Rng + ?Sized>(rng: &mut R) -> Platform {
    Platform::ALL.choose(rng).copied().unwrap_or(Platform::Windows)
}

// * Turns the outcome of a milestone fetch into a UA.
// * A failed fetch yields a random Chrome UA from the table, ignoring `os`.
pub fn resolve_user_agent<R: Rng + ?Sized>(
    rng: &mut R,
    milestone: Result<u32, NetworkError>,
    os: Platform,
) -> String {
    match milestone {
        Ok(milestone) => build_user_agent(milestone, os),
        Err(e) => {
            warn!(error = %e, "Release feed unavailable, using static Chrome user-agent");
            telemetry::record_user_agent_fallback();
            random_user_agent(rng, Some(BrowserType::Chrome)).to_string()
        }
    }
}
