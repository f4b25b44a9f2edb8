use async_trait::async_trait;
use thiserror::Error;

/// Profile metadata attached to a resolved name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameProfile {
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub ens_primary: Option<String>,
    pub resolver_address: Option<String>,
}

/// Result of resolving a name or address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedName {
    pub address: Option<String>,
    pub domain: Option<String>,
    pub profile: NameProfile,
}

impl ResolvedName {
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }
}

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Name/domain resolver. `Ok(None)` means the name is not registered.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, name_or_address: &str) -> Result<Option<ResolvedName>, ResolverError>;
}
