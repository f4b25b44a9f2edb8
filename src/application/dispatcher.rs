//! Skill dispatcher - maps a skill name to one of a fixed set of behaviors.
//!
//! Every branch either validates parameters and fails with a 400-class
//! response, performs exactly one external lookup and maps its absence to a
//! 403/404/500-class response, or is pure string formatting. Errors never
//! propagate past `handle`; they are converted to a `SkillResponse` here.

use std::sync::Arc;

use crate::application::errors::SkillError;
use crate::domain::entities::{ChainRegistry, SkillRequest, SkillResponse, TokenRegistry};
use crate::domain::traits::{MemoryStore, NameResolver, PortfolioApi, SwapQuoteApi, Transport};

/// URL bases the skills format links against.
#[derive(Debug, Clone)]
pub struct BotUrls {
    pub frame: String,
    pub ens_app: String,
    pub txpay: String,
}

impl Default for BotUrls {
    fn default() -> Self {
        Self {
            frame: "https://ens.steer.fun/".to_string(),
            ens_app: "https://app.ens.domains/".to_string(),
            txpay: "https://txpay.vercel.app".to_string(),
        }
    }
}

/// External collaborators injected into the dispatcher.
pub struct Collaborators {
    pub resolver: Arc<dyn NameResolver>,
    pub transport: Arc<dyn Transport>,
    pub memory: Arc<dyn MemoryStore>,
    pub swap_api: Arc<dyn SwapQuoteApi>,
    pub portfolio_api: Arc<dyn PortfolioApi>,
}

/// Outcome of one skill handler. `Ok(None)` means the skill fully handled
/// its own output via direct sends.
pub(crate) type SkillOutcome = Result<Option<SkillResponse>, SkillError>;

pub struct SkillDispatcher {
    pub(crate) resolver: Arc<dyn NameResolver>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) memory: Arc<dyn MemoryStore>,
    pub(crate) swap_api: Arc<dyn SwapQuoteApi>,
    pub(crate) portfolio_api: Arc<dyn PortfolioApi>,
    pub(crate) tokens: TokenRegistry,
    pub(crate) chains: ChainRegistry,
    pub(crate) urls: BotUrls,
}

impl SkillDispatcher {
    pub fn new(
        collaborators: Collaborators,
        tokens: TokenRegistry,
        chains: ChainRegistry,
        urls: BotUrls,
    ) -> Self {
        Self {
            resolver: collaborators.resolver,
            transport: collaborators.transport,
            memory: collaborators.memory,
            swap_api: collaborators.swap_api,
            portfolio_api: collaborators.portfolio_api,
            tokens,
            chains,
            urls,
        }
    }

    /// Dispatch one request. `None` means the skill sent its own output.
    ///
    /// Boxed return type so the recursive `check` -> `handle` dispatch can
    /// prove `Send` without a cyclic auto-trait obligation.
    pub fn handle<'a>(
        &'a self,
        request: &'a SkillRequest,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Option<SkillResponse>> + Send + 'a>,
    > {
        Box::pin(self.handle_inner(request))
    }

    async fn handle_inner(&self, request: &SkillRequest) -> Option<SkillResponse> {
        tracing::debug!(skill = %request.skill, "dispatching");

        let outcome = match request.skill.as_str() {
            "reset" => self.reset().await,
            "renew" => self.renew(request).await,
            "register" => self.register(request).await,
            "info" => self.info(request).await,
            "check" => self.check(request).await,
            "tip" => self.tip(request).await,
            "cool" => self.cool(request).await,
            "portfolio" => self.portfolio(request).await,
            "swap" => self.swap(request).await,
            "hi" => self.hi().await,
            "ens" => self.suggest_names().await,
            _ => Ok(Some(SkillResponse::new(400, "Skill not found."))),
        };

        match outcome {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    skill = %request.skill,
                    code = err.status_code(),
                    "skill failed: {}",
                    err
                );
                Some(err.into_response())
            }
        }
    }

    /// Send an auxiliary message, mapping transport faults to an upstream
    /// failure.
    pub(crate) async fn send(&self, text: &str) -> Result<(), SkillError> {
        self.transport
            .send(text)
            .await
            .map_err(|e| SkillError::Upstream(format!("Failed to send message: {}", e)))
    }

    /// Resolve a name or address, mapping resolver faults to an upstream
    /// failure.
    pub(crate) async fn resolve(
        &self,
        name_or_address: &str,
    ) -> Result<Option<crate::domain::traits::ResolvedName>, SkillError> {
        self.resolver.resolve(name_or_address).await.map_err(|e| {
            SkillError::Upstream(format!("Failed to resolve {}: {}", name_or_address, e))
        })
    }
}
