pub mod config;
pub mod identity;
pub mod network;
pub mod ops;

pub use config::RemoteConfig;
pub use identity::{
    Browser, BrowserIdentity, BrowserType, ClientHints, ClientHintsOptions, FetchDest, FetchMode,
    GeoHeaders, HeaderForge, IdentityError, OriginHeaders, OriginOptions, Platform, SiteRelation,
    SocialSource, TrafficSource,
};
pub use network::errors::NetworkError;
pub use network::models::GeoLocation;
