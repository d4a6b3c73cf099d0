// * Origin, Referer and Sec-Fetch-* headers for a simulated navigation

use crate::identity::errors::IdentityError;
use crate::identity::headers::insert_header;
use crate::identity::types::{FetchDest, FetchMode, SiteRelation, SocialSource, TrafficSource};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use url::Url;

// * Same reserved set as JavaScript's encodeURIComponent
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const GOOGLE_ORIGIN: &str = "https://www.google.com";
const BING_ORIGIN: &str = "https://www.bing.com";
const FACEBOOK_ORIGIN: &str = "https://www.facebook.com";
const TWITTER_ORIGIN: &str = "https://twitter.com";
const LINKEDIN_ORIGIN: &str = "https://www.linkedin.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginHeaders {
    #[serde(rename = "Origin")]
    pub origin: Option<String>,
    #[serde(rename = "Referer")]
    pub referer: Option<String>,
    #[serde(rename = "Sec-Fetch-Site")]
    pub sec_fetch_site: SiteRelation,
    #[serde(rename = "Sec-Fetch-Mode")]
    pub sec_fetch_mode: FetchMode,
    #[serde(rename = "Sec-Fetch-Dest")]
    pub sec_fetch_dest: FetchDest,
    #[serde(
        rename = "Sec-Fetch-User",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sec_fetch_user: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginOptions {
    pub source: TrafficSource,
    pub dest: FetchDest,
    pub mode: FetchMode,
}

impl OriginOptions {
    pub fn source(mut self, source: TrafficSource) -> Self {
        self.source = source;
        self
    }

    pub fn dest(mut self, dest: FetchDest) -> Self {
        self.dest = dest;
        self
    }

    pub fn mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }
}

// * Where the navigation claims to come from, relative to the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginReferer {
    pub origin: Option<String>,
    pub referer: Option<String>,
    pub site: SiteRelation,
}

impl OriginReferer {
    fn none() -> Self {
        Self {
            origin: None,
            referer: None,
            site: SiteRelation::None,
        }
    }

    fn cross_site(origin: &str, referer: String) -> Self {
        Self {
            origin: Some(origin.to_string()),
            referer: Some(referer),
            site: SiteRelation::CrossSite,
        }
    }
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

// * Last two labels after dropping a leading `www.`; a host with fewer labels comes back as given.
// * Multi-label public suffixes such as co.uk are not recognised.
pub fn extract_root_domain(hostname: &str) -> String {
    let stripped = hostname.strip_prefix("www.").unwrap_or(hostname);
    let parts: Vec<&str> = stripped.split('.').collect();
    if parts.len() >= 2 {
        parts[parts.len() - 2..].join(".")
    } else {
        hostname.to_string()
    }
}

// * Search-results referer using the first host label as the query.
pub fn google_referer(url: &str) -> Result<String, IdentityError> {
    let target = Url::parse(url)?;
    Ok(google_referer_for(&target))
}

fn google_referer_for(target: &Url) -> String {
    let host = target.host_str().unwrap_or_default();
    let stripped = host.strip_prefix("www.").unwrap_or(host);
    let term = stripped.split('.').next().unwrap_or_default();
    format!("{}/search?q={}", GOOGLE_ORIGIN, encode_uri_component(term))
}

// * Link-shim redirect wrapping the URL exactly as given.
pub fn social_referer(url: &str, source: SocialSource) -> String {
    let encoded = encode_uri_component(url);
    match source {
        SocialSource::Facebook => format!("https://l.facebook.com/l.php?u={encoded}"),
        SocialSource::Twitter => format!("https://t.co/redirect?url={encoded}"),
        SocialSource::Linkedin => {
            format!("https://www.linkedin.com/redir/redirect?url={encoded}")
        }
    }
}

pub fn build_origin_referer(target: &Url, source: TrafficSource) -> OriginReferer {
    let root = extract_root_domain(target.host_str().unwrap_or_default());

    match source {
        TrafficSource::Direct => OriginReferer::none(),
        TrafficSource::SameOrigin => {
            let origin = target.origin().ascii_serialization();
            OriginReferer {
                referer: Some(format!("{origin}/")),
                origin: Some(origin),
                site: SiteRelation::SameOrigin,
            }
        }
        TrafficSource::SameSite => {
            let origin = format!("{}://app.{}", target.scheme(), root);
            OriginReferer {
                referer: Some(format!("{origin}/")),
                origin: Some(origin),
                site: SiteRelation::SameSite,
            }
        }
        TrafficSource::Google => OriginReferer::cross_site(GOOGLE_ORIGIN, google_referer_for(target)),
        TrafficSource::Bing => OriginReferer::cross_site(
            BING_ORIGIN,
            format!("{}/search?q={}", BING_ORIGIN, encode_uri_component(&root)),
        ),
        TrafficSource::Facebook => OriginReferer::cross_site(
            FACEBOOK_ORIGIN,
            social_referer(target.as_str(), SocialSource::Facebook),
        ),
        TrafficSource::Twitter => OriginReferer::cross_site(
            TWITTER_ORIGIN,
            social_referer(target.as_str(), SocialSource::Twitter),
        ),
        TrafficSource::Linkedin => OriginReferer::cross_site(
            LINKEDIN_ORIGIN,
            social_referer(target.as_str(), SocialSource::Linkedin),
        ),
    }
}

pub fn build_origin_headers(target_url: &str, options: OriginOptions) -> Result<OriginHeaders, IdentityError> {
    let target = Url::parse(target_url)?;
    let OriginReferer { origin, referer, site } = build_origin_referer(&target, options.source);

    // * Only a user-activated top-level navigation carries Sec-Fetch-User
    let sec_fetch_user = (options.mode == FetchMode::Navigate && options.dest == FetchDest::Document)
        .then(|| "?1".to_string());

    Ok(OriginHeaders {
        origin,
        referer,
        sec_fetch_site: site,
        sec_fetch_mode: options.mode,
        sec_fetch_dest: options.dest,
        sec_fetch_user,
    })
}

impl OriginHeaders {
    // * Absent Origin/Referer are left out of the map.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> Result<(), IdentityError> {
        if let Some(origin) = &self.origin {
            insert_header(headers, "origin", origin)?;
        }
        if let Some(referer) = &self.referer {
            insert_header(headers, "referer", referer)?;
        }
        insert_header(headers, "sec-fetch-site", self.sec_fetch_site.as_str())?;
        insert_header(headers, "sec-fetch-mode", self.sec_fetch_mode.as_str())?;
        insert_header(headers, "sec-fetch-dest", self.sec_fetch_dest.as_str())?;
        if let Some(user) = &self.sec_fetch_user {
            insert_header(headers, "sec-fetch-user", user)?;
        }
        Ok(())
    }
}
