use crate::config::constants::{
    GEOLOCATION_FIELDS, GEOLOCATION_LANG, GEOLOCATION_ORIGIN, GEOLOCATION_REFERER,
};
use crate::config::RemoteConfig;
use crate::network::errors::{Endpoint, NetworkError};
use crate::network::models::{GeoLocation, ReleaseEntry};
use crate::ops::telemetry;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::debug;
use url::Url;

// * Issues the two bounded lookups the header generator depends on.
// * Each call builds its own HTTP client with pooling disabled, so nothing outlives a lookup.
#[derive(Debug, Clone, Default)]
pub struct RemoteClient {
    config: RemoteConfig,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    // * Fetches the major version of the current Stable Chromium release.
    // * Single attempt; the caller picks the fallback.
    pub async fn fetch_chrome_milestone(&self) -> Result<u32, NetworkError> {
        let endpoint = Endpoint::VersionFeed;
        let started = Instant::now();

        let result = async {
            let http = Self::build_http_client()?;
            let request = http.get(self.config.version_feed_url.as_str());
            let releases: Vec<ReleaseEntry> = self.get_json(endpoint, request).await?;
            Self::first_milestone(&releases)
        }
        .await;

        Self::observe(endpoint, started, &result);
        result
    }

    // * Looks up geolocation data for an IP. A non-"success" status is an error.
    pub async fn fetch_geolocation(&self, ip: &str) -> Result<GeoLocation, NetworkError> {
        let endpoint = Endpoint::Geolocation;
        let started = Instant::now();

        let result = async {
            let url = self.geolocation_url(ip)?;
            let http = Self::build_http_client()?;

            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
            headers.insert(ORIGIN, HeaderValue::from_static(GEOLOCATION_ORIGIN));
            headers.insert(REFERER, HeaderValue::from_static(GEOLOCATION_REFERER));

            let request = http.get(url).headers(headers);
            let geo: GeoLocation = self.get_json(endpoint, request).await?;

            if geo.is_success() {
                Ok(geo)
            } else {
                Err(NetworkError::LookupFailed {
                    status: geo.status,
                    message: geo.message,
                })
            }
        }
        .await;

        Self::observe(endpoint, started, &result);
        result
    }

    // * Builds `{base}/{ip}?fields=..&lang=en` with the IP encoded as one path segment.
    pub fn geolocation_url(&self, ip: &str) -> Result<Url, NetworkError> {
        let mut url = Url::parse(&self.config.geolocation_base_url)?;
        url.path_segments_mut()
            .map_err(|_| NetworkError::InvalidEndpoint(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(ip);
        url.query_pairs_mut()
            .clear()
            .append_pair("fields", GEOLOCATION_FIELDS)
            .append_pair("lang", GEOLOCATION_LANG);
        Ok(url)
    }

    fn build_http_client() -> Result<Client, NetworkError> {
        // * Direct connection only; system proxy variables are not consulted
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .no_proxy()
            .build()?;
        Ok(client)
    }

    fn first_milestone(releases: &[ReleaseEntry]) -> Result<u32, NetworkError> {
        let first = releases.first().ok_or(NetworkError::NoReleases)?;
        match first.milestone {
            Some(milestone) if milestone > 0 => Ok(milestone),
            _ => Err(NetworkError::MissingMilestone),
        }
    }

    // * Sends the request and decodes a JSON body under the hard deadline.
    // * On expiry the in-flight future is dropped, which aborts the connection.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<T, NetworkError> {
        let deadline = self.config.timeout();

        let exchange = async {
            let resp = request
                .send()
                .await
                .map_err(|e| NetworkError::from_transport(endpoint, e, deadline))?;

            let status = resp.status();
            if status != StatusCode::OK {
                return Err(NetworkError::HttpStatus {
                    endpoint,
                    status: status.as_u16(),
                });
            }

            let body = resp
                .bytes()
                .await
                .map_err(|e| NetworkError::from_transport(endpoint, e, deadline))?;

            Ok::<T, NetworkError>(serde_json::from_slice::<T>(&body)?)
        };

        match tokio::time::timeout(deadline, exchange).await {
            Ok(result) => result,
            Err(_) => Err(NetworkError::Timeout {
                endpoint,
                after: deadline,
            }),
        }
    }

    fn observe<T>(endpoint: Endpoint, started: Instant, result: &Result<T, NetworkError>) {
        let elapsed = started.elapsed();
        let outcome = match result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };

        debug!(
            endpoint = %endpoint,
            outcome = outcome,
            elapsed_ms = elapsed.as_millis() as u64,
            "Remote lookup finished"
        );
        telemetry::record_remote_request(endpoint, outcome, elapsed.as_secs_f64());
    }
}
