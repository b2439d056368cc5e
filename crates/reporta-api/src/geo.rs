//! Location prefill via a two-step IP-geolocation chain.
//!
//! Step one discovers the caller's public IP; step two resolves that IP to a
//! city-level location. Any failure at any step degrades to a fixed
//! placeholder string so the location field is never left blank and no error
//! ever reaches the user.

use reporta_core::error::{ReportaError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Placeholder used whenever the lookup chain cannot produce a location.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";
const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co";

#[derive(Debug, Deserialize)]
struct IpDiscovery {
    ip: String,
}

#[derive(Debug, Deserialize)]
struct GeoLookup {
    #[serde(default)]
    city: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country_name: String,
    latitude: f64,
    longitude: f64,
}

impl GeoLookup {
    /// Composes the display string, with coordinates rounded to 3 decimals.
    fn display(&self) -> String {
        format!(
            "{}, {}, {} ({:.3}, {:.3})",
            self.city, self.region, self.country_name, self.latitude, self.longitude
        )
    }
}

/// Resolves a human-readable location string from the caller's network
/// origin.
#[derive(Clone)]
pub struct LocationResolver {
    client: Client,
    ip_endpoint: String,
    geo_endpoint: String,
}

impl LocationResolver {
    pub fn new() -> Self {
        Self::with_endpoints(DEFAULT_IP_ENDPOINT, DEFAULT_GEO_ENDPOINT)
    }

    /// Creates a resolver against explicit endpoints.
    pub fn with_endpoints(ip_endpoint: impl Into<String>, geo_endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            ip_endpoint: ip_endpoint.into(),
            geo_endpoint: geo_endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the current location, degrading to [`UNKNOWN_LOCATION`] on
    /// any failure. This never errors and never returns an empty string.
    pub async fn resolve(&self) -> String {
        match self.lookup().await {
            Ok(location) => location,
            Err(err) => {
                tracing::debug!("Location lookup degraded to placeholder: {}", err);
                UNKNOWN_LOCATION.to_string()
            }
        }
    }

    async fn lookup(&self) -> Result<String> {
        let discovery = self
            .client
            .get(&self.ip_endpoint)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<IpDiscovery>()
            .await?;

        if discovery.ip.trim().is_empty() {
            return Err(ReportaError::request("ip-discovery", "empty ip"));
        }

        let url = format!("{}/{}/json/", self.geo_endpoint, discovery.ip);
        let geo = self
            .client
            .get(&url)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<GeoLookup>()
            .await?;

        Ok(geo.display())
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_coordinates_to_three_decimals() {
        let geo: GeoLookup = serde_json::from_str(
            r#"{"city": "CDMX", "region": "CDMX", "country_name": "Mexico",
                "latitude": 19.4, "longitude": -99.1}"#,
        )
        .unwrap();

        let display = geo.display();
        assert!(display.contains("CDMX"));
        assert!(display.contains("19.400"));
        assert!(display.contains("-99.100"));
    }

    #[test]
    fn test_display_truncates_excess_precision() {
        let geo = GeoLookup {
            city: "Oslo".to_string(),
            region: "Oslo".to_string(),
            country_name: "Norway".to_string(),
            latitude: 59.913868,
            longitude: 10.752245,
        };
        assert_eq!(geo.display(), "Oslo, Oslo, Norway (59.914, 10.752)");
    }

    #[tokio::test]
    async fn test_failing_ip_discovery_degrades_to_placeholder() {
        let resolver =
            LocationResolver::with_endpoints("http://127.0.0.1:9/ip", "http://127.0.0.1:9");

        let location = resolver.resolve().await;
        assert_eq!(location, UNKNOWN_LOCATION);
        assert!(!location.is_empty());
    }
}
