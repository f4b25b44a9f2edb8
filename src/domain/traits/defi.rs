use async_trait::async_trait;
use thiserror::Error;

/// Parameters for one swap-quote lookup. Token amounts are base units
/// (smallest denomination) as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuoteRequest {
    pub chain_id: u64,
    pub from_token_address: String,
    pub to_token_address: String,
    pub amount: String,
    pub slippage: u8,
    pub from_address: String,
}

/// Transaction estimate attached to a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapTx {
    pub gas: u64,
    /// Gas price in wei, as returned by the API.
    pub gas_price: String,
}

/// A price/gas estimate for an intended swap, not an executed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    /// Destination amount in base units.
    pub dst_amount: String,
    pub tx: SwapTx,
}

/// One row of a profit-and-loss report.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioEntry {
    pub abs_profit_usd: f64,
    pub roi: f64,
}

#[derive(Error, Debug)]
pub enum DefiError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Swap-quote API seam.
#[async_trait]
pub trait SwapQuoteApi: Send + Sync {
    async fn quote(&self, request: &SwapQuoteRequest) -> Result<SwapQuote, DefiError>;
}

/// Portfolio analytics API seam.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn profit_and_loss(
        &self,
        address: &str,
        chain_id: u64,
    ) -> Result<Vec<PortfolioEntry>, DefiError>;
}
