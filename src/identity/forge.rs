use crate::config::RemoteConfig;
use crate::identity::client_hints::{build_client_hints, ClientHints, ClientHintsOptions};
use crate::identity::errors::IdentityError;
use crate::identity::geo::GeoHeaders;
use crate::identity::headers::insert_header;
use crate::identity::origin::{self, OriginHeaders, OriginOptions};
use crate::identity::tables;
use crate::identity::types::{Browser, BrowserType, Platform, SocialSource};
use crate::identity::user_agent::{build_user_agent, random_platform, resolve_user_agent};
use crate::network::client::RemoteClient;
use rand::Rng;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Entry point for generating browser-identity headers.
///
/// Holds only immutable endpoint settings, so one instance can be cloned and
/// shared freely. Operations that need the release feed or the geolocation
/// service make exactly one request each; everything else is pure.
///
/// # Example
/// ```ignore
/// use header_forge::{HeaderForge, OriginOptions, TrafficSource};
///
/// let forge = HeaderForge::new();
/// let ua = forge.generate_user_agent(None).await;
/// let origin = forge.origin_headers(
///     "https://example.com/",
///     OriginOptions::default().source(TrafficSource::Google),
/// )?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeaderForge {
    remote: RemoteClient,
}

// * A user-agent and matching client hints built from one release milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserIdentity {
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
    #[serde(flatten)]
    pub client_hints: ClientHints,
}

impl BrowserIdentity {
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> Result<(), IdentityError> {
        insert_header(headers, "user-agent", &self.user_agent)?;
        self.client_hints.apply_to_headers(headers)
    }
}

impl HeaderForge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RemoteConfig) -> Self {
        Self {
            remote: RemoteClient::new(config),
        }
    }

    pub fn remote(&self) -> &RemoteClient {
        &self.remote
    }

    pub fn language_for_country(&self, code: &str) -> &'static str {
        tables::language_for_country(code)
    }

    pub fn random_user_agent(&self, browser: Option<BrowserType>) -> &'static str {
        tables::random_user_agent(&mut rand::thread_rng(), browser)
    }

    // * Chrome UA with the live Stable milestone. Never fails: a broken feed
    // * degrades to a static Chrome UA.
    pub async fn generate_user_agent(&self, os: Option<Platform>) -> String {
        let os = os.unwrap_or_else(|| random_platform(&mut rand::thread_rng()));
        let milestone = self.remote.fetch_chrome_milestone().await;
        resolve_user_agent(&mut rand::thread_rng(), milestone, os)
    }

    pub async fn generate_user_agent_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        os: Option<Platform>,
    ) -> String {
        let os = os.unwrap_or_else(|| random_platform(rng));
        let milestone = self.remote.fetch_chrome_milestone().await;
        resolve_user_agent(rng, milestone, os)
    }

    // * Feed failures propagate; there is no static fallback for client hints.
    pub async fn client_hints(
        &self,
        options: ClientHintsOptions,
    ) -> Result<ClientHints, IdentityError> {
        let platform = options
            .platform
            .unwrap_or_else(|| random_platform(&mut rand::thread_rng()));
        let milestone = self.remote.fetch_chrome_milestone().await?;
        Ok(build_client_hints(milestone, platform, options.browser, options.mobile))
    }

    pub async fn client_hints_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: ClientHintsOptions,
    ) -> Result<ClientHints, IdentityError> {
        let platform = options.platform.unwrap_or_else(|| random_platform(rng));
        let milestone = self.remote.fetch_chrome_milestone().await?;
        Ok(build_client_hints(milestone, platform, options.browser, options.mobile))
    }

    pub async fn geo_headers_by_ip(&self, ip: &str) -> Result<GeoHeaders, IdentityError> {
        let geo = self.remote.fetch_geolocation(ip).await?;
        debug!(ip = ip, country_code = %geo.country_code, "Resolved geolocation");
        Ok(GeoHeaders::from_location(&geo))
    }

    pub fn origin_headers(
        &self,
        target_url: &str,
        options: OriginOptions,
    ) -> Result<OriginHeaders, IdentityError> {
        origin::build_origin_headers(target_url, options)
    }

    pub fn google_referer(&self, url: &str) -> Result<String, IdentityError> {
        origin::google_referer(url)
    }

    pub fn social_referer(&self, url: &str, source: SocialSource) -> String {
        origin::social_referer(url, source)
    }

    // * UA and client hints that agree on milestone and platform, from a single feed request.
    pub async fn identity(
        &self,
        options: ClientHintsOptions,
    ) -> Result<BrowserIdentity, IdentityError> {
        let platform = options
            .platform
            .unwrap_or_else(|| random_platform(&mut rand::thread_rng()));
        let milestone = self.remote.fetch_chrome_milestone().await?;

        let mut user_agent = build_user_agent(milestone, platform);
        if options.browser == Browser::Edge {
            user_agent.push_str(&format!(" Edg/{milestone}.0.0.0"));
        }

        Ok(BrowserIdentity {
            user_agent,
            client_hints: build_client_hints(milestone, platform, options.browser, options.mobile),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::types::TrafficSource;

    #[test]
    fn test_forge_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<HeaderForge>();
    }

    #[test]
    fn test_pure_operations_through_facade() {
        let forge = HeaderForge::new();
        assert_eq!(forge.language_for_country("DE"), "de-DE,de;q=0.9,en;q=0.8");

        let ua = forge.random_user_agent(Some(BrowserType::Firefox));
        assert!(ua.contains("Firefox/"));

        let headers = forge
            .origin_headers(
                "https://www.example.com/",
                OriginOptions::default().source(TrafficSource::Google),
            )
            .unwrap();
        assert_eq!(
            headers.referer.as_deref(),
            Some("https://www.google.com/search?q=example")
        );
    }

    #[test]
    fn test_identity_serializes_flat() {
        let identity = BrowserIdentity {
            user_agent: build_user_agent(120, Platform::Windows),
            client_hints: build_client_hints(120, Platform::Windows, Browser::Chrome, false),
        };
        let json = serde_json::to_value(&identity).unwrap();
        assert!(json["User-Agent"].as_str().unwrap().contains("Chrome/120"));
        assert_eq!(json["Sec-CH-UA-Mobile"], "?0");

        let mut headers = HeaderMap::new();
        identity.apply_to_headers(&mut headers).unwrap();
        assert_eq!(headers.len(), 6);
    }
}
