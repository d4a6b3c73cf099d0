// * Sec-CH-UA client hint headers for Chromium browsers

use crate::config::constants::NOT_A_BRAND_VERSION;
use crate::identity::errors::IdentityError;
use crate::identity::headers::insert_header;
use crate::identity::types::{Browser, Platform};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHints {
    #[serde(rename = "Sec-CH-UA")]
    pub sec_ch_ua: String,
    #[serde(rename = "Sec-CH-UA-Mobile")]
    pub sec_ch_ua_mobile: String,
    #[serde(rename = "Sec-CH-UA-Platform")]
    pub sec_ch_ua_platform: String,
    #[serde(rename = "Sec-CH-UA-Platform-Version")]
    pub sec_ch_ua_platform_version: String,
    #[serde(rename = "Sec-CH-UA-Full-Version-List")]
    pub sec_ch_ua_full_version_list: String,
}

// * Caller knobs; unset platform is drawn at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientHintsOptions {
    pub platform: Option<Platform>,
    pub browser: Browser,
    pub mobile: bool,
}

impl ClientHintsOptions {
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn browser(mut self, browser: Browser) -> Self {
        self.browser = browser;
        self
    }

    pub fn mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }
}

pub fn brand_name(browser: Browser) -> &'static str {
    match browser {
        Browser::Chrome => "Google Chrome",
        Browser::Edge => "Microsoft Edge",
    }
}

pub fn platform_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => r#""Windows""#,
        Platform::Linux => r#""Linux""#,
        Platform::Mac => r#""macOS""#,
    }
}

// * Fixed per platform, not read from the host
pub fn platform_version(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => r#""15.0.0""#,
        Platform::Linux => r#""6.5.0""#,
        Platform::Mac => r#""14.2.0""#,
    }
}

pub fn build_client_hints(
    milestone: u32,
    platform: Platform,
    browser: Browser,
    mobile: bool,
) -> ClientHints {
    let brand = brand_name(browser);

    ClientHints {
        sec_ch_ua: format!(
            r#""{brand}";v="{milestone}", "Chromium";v="{milestone}", "Not_A Brand";v="{NOT_A_BRAND_VERSION}""#
        ),
        sec_ch_ua_mobile: if mobile { "?1" } else { "?0" }.to_string(),
        sec_ch_ua_platform: platform_name(platform).to_string(),
        sec_ch_ua_platform_version: platform_version(platform).to_string(),
        sec_ch_ua_full_version_list: format!(
            r#""{brand}";v="{milestone}.0.0.0", "Chromium";v="{milestone}.0.0.0", "Not_A Brand";v="{NOT_A_BRAND_VERSION}.0.0.0""#
        ),
    }
}

impl ClientHints {
    pub fn is_mobile(&self) -> bool {
        self.sec_ch_ua_mobile == "?1"
    }

    // * Writes the five hints into a request header map.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> Result<(), IdentityError> {
        insert_header(headers, "sec-ch-ua", &self.sec_ch_ua)?;
        insert_header(headers, "sec-ch-ua-mobile", &self.sec_ch_ua_mobile)?;
        insert_header(headers, "sec-ch-ua-platform", &self.sec_ch_ua_platform)?;
        insert_header(
            headers,
            "sec-ch-ua-platform-version",
            &self.sec_ch_ua_platform_version,
        )?;
        insert_header(
            headers,
            "sec-ch-ua-full-version-list",
            &self.sec_ch_ua_full_version_list,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_windows_desktop() {
        let hints = build_client_hints(131, Platform::Windows, Browser::Chrome, false);
        assert_eq!(
            hints.sec_ch_ua,
            r#""Google Chrome";v="131", "Chromium";v="131", "Not_A Brand";v="24""#
        );
        assert_eq!(hints.sec_ch_ua_mobile, "?0");
        assert_eq!(hints.sec_ch_ua_platform, r#""Windows""#);
        assert_eq!(hints.sec_ch_ua_platform_version, r#""15.0.0""#);
        assert_eq!(
            hints.sec_ch_ua_full_version_list,
            r#""Google Chrome";v="131.0.0.0", "Chromium";v="131.0.0.0", "Not_A Brand";v="24.0.0.0""#
        );
    }

    #[test]
    fn test_mobile_flag() {
        for platform in Platform::ALL {
            assert_eq!(build_client_hints(120, *platform, Browser::Chrome, true).sec_ch_ua_mobile, "?1");
            assert_eq!(build_client_hints(120, *platform, Browser::Chrome, false).sec_ch_ua_mobile, "?0");
        }
    }

    #[test]
    fn test_edge_only_swaps_brand() {
        let chrome = build_client_hints(120, Platform::Mac, Browser::Chrome, false);
        let edge = build_client_hints(120, Platform::Mac, Browser::Edge, false);
        assert_eq!(
            edge.sec_ch_ua,
            chrome.sec_ch_ua.replace("Google Chrome", "Microsoft Edge")
        );
        assert_eq!(
            edge.sec_ch_ua_full_version_list,
            chrome.sec_ch_ua_full_version_list.replace("Google Chrome", "Microsoft Edge")
        );
        assert_eq!(edge.sec_ch_ua_platform, r#""macOS""#);
        assert_eq!(edge.sec_ch_ua_platform_version, r#""14.2.0""#);
    }

    #[test]
    fn test_serialized_keys() {
        let hints = build_client_hints(120, Platform::Linux, Browser::Chrome, false);
        let json = serde_json::to_value(&hints).unwrap();
        assert_eq!(json["Sec-CH-UA-Platform"], r#""Linux""#);
        assert_eq!(json["Sec-CH-UA-Platform-Version"], r#""6.5.0""#);
        assert!(json.get("Sec-CH-UA-Full-Version-List").is_some());
    }

    #[test]
    fn test_apply_to_headers() {
        let hints = build_client_hints(120, Platform::Linux, Browser::Edge, true);
        let mut headers = HeaderMap::new();
        hints.apply_to_headers(&mut headers).unwrap();
        assert_eq!(headers.get("sec-ch-ua-mobile").unwrap(), "?1");
        assert_eq!(headers.len(), 5);
    }
}
