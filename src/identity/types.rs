use crate::identity::errors::UnknownToken;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// * Generates the wire-token plumbing shared by every identity enum:
// * `ALL`, `as_str`, `Display` and a strict `FromStr`.
macro_rules! wire_tokens {
    ($ty:ident, $kind:literal, { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($ty::$variant),)+
                    other => Err(UnknownToken {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

// * Operating system a generated identity claims to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    Mac,
}

wire_tokens!(Platform, "platform", {
    Windows => "windows",
    Linux => "linux",
    Mac => "mac",
});

// * Chromium-based browsers that send client hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chrome,
    Edge,
}

wire_tokens!(Browser, "browser", {
    Chrome => "chrome",
    Edge => "edge",
});

// * Browsers with a literal user-agent table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserType {
    Chrome,
    Firefox,
    Safari,
    Edge,
}

wire_tokens!(BrowserType, "browser type", {
    Chrome => "chrome",
    Firefox => "firefox",
    Safari => "safari",
    Edge => "edge",
});

// * Where the simulated navigation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrafficSource {
    #[default]
    Direct,
    Google,
    Bing,
    Facebook,
    Twitter,
    Linkedin,
    SameOrigin,
    SameSite,
}

wire_tokens!(TrafficSource, "traffic source", {
    Direct => "direct",
    Google => "google",
    Bing => "bing",
    Facebook => "facebook",
    Twitter => "twitter",
    Linkedin => "linkedin",
    SameOrigin => "same-origin",
    SameSite => "same-site",
});

impl TrafficSource {
    // * Unrecognized categories behave like a direct visit.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(TrafficSource::Direct)
    }
}

impl From<SocialSource> for TrafficSource {
    fn from(source: SocialSource) -> Self {
        match source {
            SocialSource::Facebook => TrafficSource::Facebook,
            SocialSource::Twitter => TrafficSource::Twitter,
            SocialSource::Linkedin => TrafficSource::Linkedin,
        }
    }
}

// * Social platforms with a link-redirect referer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialSource {
    #[default]
    Facebook,
    Twitter,
    Linkedin,
}

wire_tokens!(SocialSource, "social source", {
    Facebook => "facebook",
    Twitter => "twitter",
    Linkedin => "linkedin",
});

// * Sec-Fetch-Dest values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchDest {
    #[default]
    Document,
    Script,
    Style,
    Image,
    Font,
    Empty,
}

wire_tokens!(FetchDest, "fetch destination", {
    Document => "document",
    Script => "script",
    Style => "style",
    Image => "image",
    Font => "font",
    Empty => "empty",
});

// * Sec-Fetch-Mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchMode {
    #[default]
    Navigate,
    Cors,
    NoCors,
    SameOrigin,
}

wire_tokens!(FetchMode, "fetch mode", {
    Navigate => "navigate",
    Cors => "cors",
    NoCors => "no-cors",
    SameOrigin => "same-origin",
});

// * Sec-Fetch-Site values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteRelation {
    SameOrigin,
    SameSite,
    CrossSite,
    None,
}

wire_tokens!(SiteRelation, "site relation", {
    SameOrigin => "same-origin",
    SameSite => "same-site",
    CrossSite => "cross-site",
    None => "none",
});
