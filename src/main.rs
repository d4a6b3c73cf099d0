use header_forge::ops::telemetry;
use header_forge::{
    Browser, ClientHintsOptions, HeaderForge, OriginOptions, Platform, SocialSource,
    TrafficSource,
};

#[tokio::main]
async fn main() {
    if let Err(e) = telemetry::init_tracing_with_level("header_forge=debug,info") {
        eprintln!("Tracing already initialized: {e}");
    }

    let forge = HeaderForge::new();
    let target = "https://www.frota162.com.br/";

    tracing::info!(user_agent = %forge.generate_user_agent(Some(Platform::Mac)).await, "Versioned user-agent");
    tracing::info!(user_agent = forge.random_user_agent(None), "Random user-agent");
    tracing::info!(referer = %forge.social_referer(target, SocialSource::Twitter), "Social referer");

    match forge.google_referer(target) {
        Ok(referer) => tracing::info!(referer = %referer, "Search referer"),
        Err(e) => tracing::error!(error = %e, "Search referer failed"),
    }

    match forge.geo_headers_by_ip("186.214.59.224").await {
        Ok(geo) => tracing::info!(headers = ?geo, "Geo headers"),
        Err(e) => tracing::warn!(error = %e, "Geo headers unavailable"),
    }

    match forge.client_hints(ClientHintsOptions::default()).await {
        Ok(hints) => tracing::info!(headers = ?hints, "Client hints"),
        Err(e) => tracing::warn!(error = %e, "Client hints unavailable"),
    }

    let mobile = ClientHintsOptions::default()
        .platform(Platform::Mac)
        .browser(Browser::Chrome)
        .mobile(true);
    match forge.client_hints(mobile).await {
        Ok(hints) => tracing::info!(headers = ?hints, "Mobile client hints"),
        Err(e) => tracing::warn!(error = %e, "Client hints unavailable"),
    }

    match forge.origin_headers(target, OriginOptions::default().source(TrafficSource::Facebook)) {
        Ok(headers) => tracing::info!(headers = ?headers, "Origin headers"),
        Err(e) => tracing::error!(error = %e, "Origin headers failed"),
    }
}
