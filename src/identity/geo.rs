// * Locale headers derived from an IP geolocation answer

use crate::identity::errors::IdentityError;
use crate::identity::headers::insert_header;
use crate::identity::tables::language_for_country;
use crate::network::models::GeoLocation;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

// * Accept-Language plus the locale facts a caller needs to stay consistent with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoHeaders {
    #[serde(rename = "Accept-Language")]
    pub accept_language: String,
    pub timezone: String,
    #[serde(rename = "timezoneOffset")]
    pub timezone_offset: i64,
    pub country: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub city: String,
    pub region: String,
    pub currency: String,
    pub lat: f64,
    pub lon: f64,
}

impl GeoHeaders {
    pub fn from_location(geo: &GeoLocation) -> Self {
        Self {
            accept_language: language_for_country(&geo.country_code).to_string(),
            timezone: geo.timezone.clone(),
            timezone_offset: geo.offset,
            country: geo.country.clone(),
            country_code: geo.country_code.clone(),
            city: geo.city.clone(),
            region: geo.region_name.clone(),
            currency: geo.currency.clone(),
            lat: geo.lat,
            lon: geo.lon,
        }
    }

    // * Only Accept-Language is an HTTP header; the rest is descriptive.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> Result<(), IdentityError> {
        insert_header(headers, "accept-language", &self.accept_language)
    }
}

impl From<GeoLocation> for GeoHeaders {
    fn from(geo: GeoLocation) -> Self {
        GeoHeaders::from_location(&geo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campinas() -> GeoLocation {
        GeoLocation {
            status: "success".into(),
            country: "Brazil".into(),
            country_code: "BR".into(),
            region: "SP".into(),
            region_name: "Sao Paulo".into(),
            city: "Campinas".into(),
            timezone: "America/Sao_Paulo".into(),
            offset: -10800,
            currency: "BRL".into(),
            lat: -22.9,
            lon: -47.06,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_location_maps_fields() {
        let headers = GeoHeaders::from_location(&campinas());
        assert_eq!(headers.accept_language, "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7");
        assert_eq!(headers.region, "Sao Paulo");
        assert_eq!(headers.timezone_offset, -10800);
        assert_eq!(headers.currency, "BRL");
    }

    #[test]
    fn test_unmapped_country_defaults() {
        let mut geo = campinas();
        geo.country_code = "AQ".into();
        let headers = GeoHeaders::from(geo);
        assert_eq!(headers.accept_language, "en-US,en;q=0.9");
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(GeoHeaders::from_location(&campinas())).unwrap();
        assert_eq!(json["Accept-Language"], "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7");
        assert_eq!(json["timezoneOffset"], -10800);
        assert_eq!(json["countryCode"], "BR");
    }

    #[test]
    fn test_apply_only_accept_language() {
        let mut headers = HeaderMap::new();
        GeoHeaders::from_location(&campinas())
            .apply_to_headers(&mut headers)
            .unwrap();
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key("accept-language"));
    }
}
