// * Browser-identity header generation: static tables, templated headers and the facade

pub mod client_hints;
pub mod errors;
pub mod forge;
pub mod geo;
pub(crate) mod headers;
pub mod origin;
pub mod tables;
pub mod types;
pub mod user_agent;

pub use client_hints::{ClientHints, ClientHintsOptions};
pub use errors::{IdentityError, UnknownToken};
pub use forge::{BrowserIdentity, HeaderForge};
pub use geo::GeoHeaders;
pub use origin::{OriginHeaders, OriginOptions, OriginReferer};
pub use types::{
    Browser, BrowserType, FetchDest, FetchMode, Platform, SiteRelation, SocialSource,
    TrafficSource,
};
