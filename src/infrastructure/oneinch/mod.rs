//! 1inch API client - swap quotes and portfolio analytics

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::traits::{
    DefiError, PortfolioApi, PortfolioEntry, SwapQuote, SwapQuoteApi, SwapQuoteRequest, SwapTx,
};

/// Client for the 1inch developer APIs. One instance serves both the swap
/// v6.0 and portfolio v4 endpoints.
pub struct OneInchClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OneInchClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DefiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DefiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn api_key(&self) -> Result<&str, DefiError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(DefiError::MissingApiKey)
    }
}

/// Swap quote response structure
#[derive(Deserialize, Debug)]
struct QuoteResponse {
    #[serde(rename = "dstAmount")]
    dst_amount: String,
    tx: TxResponse,
}

#[derive(Deserialize, Debug)]
struct TxResponse {
    gas: u64,
    #[serde(rename = "gasPrice")]
    gas_price: String,
}

/// Portfolio response structure
#[derive(Deserialize, Debug)]
struct PortfolioResponse {
    result: Vec<PortfolioRow>,
}

#[derive(Deserialize, Debug)]
struct PortfolioRow {
    abs_profit_usd: f64,
    roi: f64,
}

#[async_trait]
impl SwapQuoteApi for OneInchClient {
    async fn quote(&self, request: &SwapQuoteRequest) -> Result<SwapQuote, DefiError> {
        let api_key = self.api_key()?;
        let url = format!("{}/swap/v6.0/{}/swap", self.base_url, request.chain_id);
        let slippage = request.slippage.to_string();

        let response = self
            .client
            .get(&url)
            .bearer_auth(api_key)
            .query(&[
                ("fromTokenAddress", request.from_token_address.as_str()),
                ("toTokenAddress", request.to_token_address.as_str()),
                ("amount", request.amount.as_str()),
                ("slippage", slippage.as_str()),
                ("fromAddress", request.from_address.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DefiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DefiError::Api(format!("status: {}, body: {}", status, body)));
        }

        let quote: QuoteResponse = response
            .json()
            .await
            .map_err(|e| DefiError::Parse(e.to_string()))?;

        Ok(SwapQuote {
            dst_amount: quote.dst_amount,
            tx: SwapTx {
                gas: quote.tx.gas,
                gas_price: quote.tx.gas_price,
            },
        })
    }
}

#[async_trait]
impl PortfolioApi for OneInchClient {
    async fn profit_and_loss(
        &self,
        address: &str,
        chain_id: u64,
    ) -> Result<Vec<PortfolioEntry>, DefiError> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/portfolio/portfolio/v4/overview/erc20/profit_and_loss",
            self.base_url
        );

        let chain_id = chain_id.to_string();
        let response = self
            .client
            .get(&url)
            .bearer_auth(api_key)
            .query(&[("addresses", address), ("chain_id", chain_id.as_str())])
            .send()
            .await
            .map_err(|e| DefiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DefiError::Api(format!("status: {}, body: {}", status, body)));
        }

        let data: PortfolioResponse = response
            .json()
            .await
            .map_err(|e| DefiError::Parse(e.to_string()))?;

        Ok(data
            .result
            .into_iter()
            .map(|row| PortfolioEntry {
                abs_profit_usd: row.abs_profit_usd,
                roi: row.roi,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_rejected_before_any_request() {
        let client =
            OneInchClient::new("https://api.1inch.dev", None, Duration::from_secs(10)).unwrap();
        assert!(matches!(client.api_key(), Err(DefiError::MissingApiKey)));

        let empty = OneInchClient::new(
            "https://api.1inch.dev",
            Some(String::new()),
            Duration::from_secs(10),
        )
        .unwrap();
        assert!(matches!(empty.api_key(), Err(DefiError::MissingApiKey)));
    }

    #[test]
    fn quote_response_field_names_match_the_api() {
        let raw = r#"{"dstAmount":"2500000000000000000","tx":{"gas":150000,"gasPrice":"5000000000"}}"#;
        let quote: QuoteResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(quote.dst_amount, "2500000000000000000");
        assert_eq!(quote.tx.gas, 150000);
        assert_eq!(quote.tx.gas_price, "5000000000");
    }

    #[test]
    fn portfolio_response_field_names_match_the_api() {
        let raw = r#"{"result":[{"abs_profit_usd":1234.56,"roi":0.15}]}"#;
        let data: PortfolioResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(data.result.len(), 1);
        assert!((data.result[0].abs_profit_usd - 1234.56).abs() < f64::EPSILON);
    }
}
