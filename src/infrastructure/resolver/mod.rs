//! HTTP ENS-data resolver client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::traits::{NameProfile, NameResolver, ResolvedName, ResolverError};

/// Resolver backed by the public ensdata.net lookup API.
pub struct EnsDataResolver {
    client: Client,
    base_url: String,
}

impl EnsDataResolver {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ResolverError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolverError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

/// API response structure
#[derive(Deserialize, Debug)]
struct EnsDataResponse {
    address: Option<String>,
    ens: Option<String>,
    ens_primary: Option<String>,
    avatar: Option<String>,
    description: Option<String>,
    github: Option<String>,
    twitter: Option<String>,
    resolver: Option<String>,
}

impl From<EnsDataResponse> for ResolvedName {
    fn from(data: EnsDataResponse) -> Self {
        Self {
            address: data.address,
            domain: data.ens,
            profile: NameProfile {
                avatar: data.avatar,
                description: data.description,
                github: data.github,
                twitter: data.twitter,
                ens_primary: data.ens_primary,
                resolver_address: data.resolver,
            },
        }
    }
}

#[async_trait]
impl NameResolver for EnsDataResolver {
    async fn resolve(&self, name_or_address: &str) -> Result<Option<ResolvedName>, ResolverError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), name_or_address);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolverError::Network(e.to_string()))?;

        // The API answers 404 for unregistered names.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ResolverError::Api(format!(
                "status: {}, body: {}",
                status, body
            )));
        }

        let data: EnsDataResponse = response
            .json()
            .await
            .map_err(|e| ResolverError::Parse(e.to_string()))?;

        // An empty record also means "not registered".
        if data.address.is_none() && data.ens.is_none() {
            return Ok(None);
        }
        Ok(Some(data.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_maps_into_resolved_name() {
        let data = EnsDataResponse {
            address: Some("0xabc".to_string()),
            ens: Some("nick.eth".to_string()),
            ens_primary: Some("nick.eth".to_string()),
            avatar: None,
            description: Some("builder".to_string()),
            github: Some("nick".to_string()),
            twitter: None,
            resolver: Some("0xresolver".to_string()),
        };
        let resolved: ResolvedName = data.into();
        assert_eq!(resolved.address.as_deref(), Some("0xabc"));
        assert_eq!(resolved.domain.as_deref(), Some("nick.eth"));
        assert_eq!(resolved.profile.github.as_deref(), Some("nick"));
        assert!(resolved.profile.avatar.is_none());
    }

    #[tokio::test]
    #[ignore] // Hits the live ensdata.net API
    async fn resolve_live_name() {
        let resolver =
            EnsDataResolver::new("https://api.ensdata.net", Duration::from_secs(10)).unwrap();
        let resolved = resolver.resolve("vitalik.eth").await.unwrap();
        assert!(resolved.and_then(|r| r.address).is_some());
    }
}
