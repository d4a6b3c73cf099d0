use serde::{Deserialize, Serialize};

// * One entry of the Chromium release feed. Only the milestone is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEntry {
    #[serde(default)]
    pub milestone: Option<u32>,
}

// * Geolocation answer for a single IP.
// * The service omits most fields when the lookup fails, hence the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeoLocation {
    pub status: String,
    pub message: Option<String>,
    pub continent: String,
    pub continent_code: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_name: String,
    pub city: String,
    pub district: String,
    pub zip: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub offset: i64,
    pub currency: String,
    pub isp: String,
    pub org: String,
    #[serde(rename = "as")]
    pub as_name: String,
    pub asname: String,
    pub mobile: bool,
    pub proxy: bool,
    pub hosting: bool,
    pub query: String,
}

impl GeoLocation {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_payload() {
        let body = r#"{
            "status": "success", "country": "Brazil", "countryCode": "BR",
            "region": "SP", "regionName": "Sao Paulo", "city": "Campinas",
            "lat": -22.9, "lon": -47.06, "timezone": "America/Sao_Paulo",
            "offset": -10800, "currency": "BRL", "as": "AS28573 Claro NXT",
            "mobile": false, "proxy": false, "hosting": false, "query": "186.214.59.224"
        }"#;
        let geo: GeoLocation = serde_json::from_str(body).unwrap();
        assert!(geo.is_success());
        assert_eq!(geo.country_code, "BR");
        assert_eq!(geo.region_name, "Sao Paulo");
        assert_eq!(geo.offset, -10800);
        assert_eq!(geo.as_name, "AS28573 Claro NXT");
    }

    #[test]
    fn test_parse_failure_payload() {
        let body = r#"{"status": "fail", "message": "private range", "query": "10.0.0.1"}"#;
        let geo: GeoLocation = serde_json::from_str(body).unwrap();
        assert!(!geo.is_success());
        assert_eq!(geo.message.as_deref(), Some("private range"));
        assert!(geo.country_code.is_empty());
    }

    #[test]
    fn test_release_entry_without_milestone() {
        let entries: Vec<ReleaseEntry> = serde_json::from_str(r#"[{"version": "1.2"}]"#).unwrap();
        assert_eq!(entries[0].milestone, None);
    }
}
