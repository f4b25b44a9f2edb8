//! DeFi skills: tip, portfolio, swap.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::application::dispatcher::{SkillDispatcher, SkillOutcome};
use crate::application::errors::SkillError;
use crate::application::params::{PortfolioParams, SwapParams, TipParams};
use crate::domain::entities::{SkillRequest, SkillResponse};
use crate::domain::traits::{PortfolioEntry, SwapQuote, SwapQuoteRequest};

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
const SWAP_APP_URL: &str = "https://app.1inch.io";
const DEFAULT_SLIPPAGE: u8 = 1;

/// Shorthand names accepted wherever an address is expected.
const KNOWN_ALIASES: [(&str, &str); 2] = [
    ("vitalik", "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
    ("nick", "0xb8c2C29ee19D8307cb7255e1Cd9CbDE883A267d5"),
];

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());

/// Syntactic check for a 20-byte hex address.
pub fn is_address(value: &str) -> bool {
    ADDRESS_RE.is_match(value)
}

/// Scale a human-readable amount into base units.
///
/// Every token is scaled as if it had 18 decimals; real decimals vary per
/// contract (USDC has 6). Preserved as-is from the original behavior.
pub fn to_base_units(amount: &str) -> Result<String, SkillError> {
    let value: f64 = amount
        .parse()
        .map_err(|_| SkillError::Validation(format!("Invalid amount: {}", amount)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(SkillError::Validation(format!("Invalid amount: {}", amount)));
    }
    Ok(format!("{:.0}", value * 1e18))
}

impl SkillDispatcher {
    pub(crate) async fn tip(&self, request: &SkillRequest) -> SkillOutcome {
        let params = TipParams::parse(request)?;

        let receiver = if params.address.ends_with(".eth") {
            self.resolve(&params.address)
                .await?
                .and_then(|r| r.address)
                .ok_or_else(|| {
                    SkillError::Validation(format!(
                        "Could not resolve {} to an address.",
                        params.address
                    ))
                })?
        } else {
            params.address.clone()
        };

        self.send(&format!(
            "🔍 Track the owner on Etherscan: https://etherscan.io/address/{}\n🔍 Or across chains on Blockscan: https://blockscan.com/address/{}",
            receiver, receiver
        ))
        .await?;

        let tip_url = format!(
            "{}/?&amount=1&token=USDC&receiver={}",
            self.urls.txpay, receiver
        );
        Ok(Some(SkillResponse::ok(tip_url)))
    }

    pub(crate) async fn portfolio(&self, request: &SkillRequest) -> SkillOutcome {
        let params = PortfolioParams::parse(request)?;

        let mut address = params.address.clone();
        if let Some((_, aliased)) = KNOWN_ALIASES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&address))
        {
            address = aliased.to_string();
        } else if address.ends_with(".eth") {
            address = self
                .resolve(&address)
                .await?
                .and_then(|r| r.address)
                .ok_or_else(|| SkillError::Validation("Invalid address provided.".to_string()))?;
        }

        if !is_address(&address) {
            return Err(SkillError::Validation("Invalid address provided.".to_string()));
        }

        let chain = self
            .chains
            .get(&params.chain)
            .ok_or_else(|| SkillError::Validation(format!("Invalid chain: {}", params.chain)))?;

        tracing::info!(%address, chain = %params.chain, "fetching portfolio data");

        let entries = self
            .portfolio_api
            .profit_and_loss(&address, chain.id)
            .await
            .map_err(|e| SkillError::Upstream(format!("❌ Failed to fetch portfolio data: {}", e)))?;
        let first = entries.first().ok_or_else(|| {
            SkillError::Upstream("❌ Failed to fetch portfolio data: empty result".to_string())
        })?;

        self.send(&format_portfolio_report(first, &chain.display_name))
            .await?;

        Ok(Some(SkillResponse::ok(format!(
            "🔍 View more details on Etherscan: https://etherscan.io/address/{}",
            address
        ))))
    }

    pub(crate) async fn swap(&self, request: &SkillRequest) -> SkillOutcome {
        let params = SwapParams::parse(request)?;

        let chain = self
            .chains
            .get(&params.chain)
            .ok_or_else(|| SkillError::Validation(format!("Invalid chain: {}", params.chain)))?;

        let chain_key = params.chain.to_lowercase();
        let from_symbol = params.from_token.to_uppercase();
        let to_symbol = params.to_token.to_uppercase();

        let invalid_token = |symbol: &str| {
            SkillError::Validation(format!(
                "Invalid token symbol {} for {}. Supported tokens: {}",
                symbol,
                chain_key,
                self.tokens.symbols(&chain_key).join(", ")
            ))
        };
        let from_address = self
            .tokens
            .address(&chain_key, &from_symbol)
            .ok_or_else(|| invalid_token(&from_symbol))?
            .to_string();
        let to_address = self
            .tokens
            .address(&chain_key, &to_symbol)
            .ok_or_else(|| invalid_token(&to_symbol))?
            .to_string();

        let amount = to_base_units(&params.amount)?;

        tracing::info!(
            from = %from_symbol,
            to = %to_symbol,
            amount = %params.amount,
            chain = %chain_key,
            "fetching swap quote"
        );

        let quote_request = SwapQuoteRequest {
            chain_id: chain.id,
            from_token_address: from_address.clone(),
            to_token_address: to_address.clone(),
            amount,
            slippage: DEFAULT_SLIPPAGE,
            from_address: request
                .sender_address
                .clone()
                .unwrap_or_else(|| ZERO_ADDRESS.to_string()),
        };
        let quote = self
            .swap_api
            .quote(&quote_request)
            .await
            .map_err(|e| SkillError::Upstream(format!("❌ Failed to get swap quote: {}", e)))?;

        self.send(&format_swap_quote(
            &params.amount,
            &from_symbol,
            &to_symbol,
            &quote,
            &chain.display_name,
        ))
        .await?;

        Ok(Some(SkillResponse::ok(format!(
            "🚀 Ready to swap? Click here:\n{}/#/{}/simple/swap/{}/{}",
            SWAP_APP_URL, chain.id, from_address, to_address
        ))))
    }
}

pub fn format_portfolio_report(entry: &PortfolioEntry, chain_name: &str) -> String {
    format!(
        "📊 Portfolio Analysis\n\
         ━━━━━━━━━━━━━━━━━━━━━\n\
         💰 Profit/Loss: ${:.2}\n\
         📈 ROI: {:.2}%\n\
         🔗 Chain: {}\n\
         ━━━━━━━━━━━━━━━━━━━━━",
        entry.abs_profit_usd,
        entry.roi * 100.0,
        chain_name
    )
}

pub fn format_swap_quote(
    from_amount: &str,
    from_symbol: &str,
    to_symbol: &str,
    quote: &SwapQuote,
    chain_name: &str,
) -> String {
    let to_amount = quote.dst_amount.parse::<f64>().unwrap_or(0.0) / 1e18;
    let gas_gwei = quote.tx.gas_price.parse::<f64>().unwrap_or(0.0) / 1e9;
    format!(
        "💱 Swap Quote Details\n\
         ━━━━━━━━━━━━━━━━━━━━━\n\
         🔗 Chain: {}\n\
         📤 From: {} {}\n\
         📥 To: {:.2} {}\n\
         ⛽ Gas: {} units @ {} GWEI\n\
         ━━━━━━━━━━━━━━━━━━━━━",
        chain_name, from_amount, from_symbol, to_amount, to_symbol, quote.tx.gas, gas_gwei
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::SwapTx;

    #[test]
    fn address_format_check() {
        assert!(is_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
        assert!(!is_address("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
        assert!(!is_address("0x123"));
        assert!(!is_address("vitalik.eth"));
        assert!(!is_address("0xZZdA6BF26964aF9D7eEd9e03E53415D37aA96045"));
    }

    #[test]
    fn base_unit_conversion_assumes_18_decimals() {
        assert_eq!(to_base_units("1").unwrap(), "1000000000000000000");
        assert_eq!(to_base_units("0.5").unwrap(), "500000000000000000");
        assert_eq!(to_base_units("0").unwrap(), "0");
    }

    #[test]
    fn base_unit_conversion_rejects_garbage() {
        assert!(to_base_units("one").is_err());
        assert!(to_base_units("-1").is_err());
        assert!(to_base_units("NaN").is_err());
    }

    #[test]
    fn swap_quote_formatting_scales_amounts() {
        let quote = SwapQuote {
            dst_amount: "2500000000000000000".to_string(),
            tx: SwapTx {
                gas: 150000,
                gas_price: "5000000000".to_string(),
            },
        };
        let text = format_swap_quote("1", "BNB", "USDT", &quote, "BNB Chain");
        assert!(text.contains("📤 From: 1 BNB"));
        assert!(text.contains("📥 To: 2.50 USDT"));
        assert!(text.contains("⛽ Gas: 150000 units @ 5 GWEI"));
        assert!(text.contains("🔗 Chain: BNB Chain"));
    }

    #[test]
    fn portfolio_report_formatting() {
        let entry = PortfolioEntry {
            abs_profit_usd: 1234.5678,
            roi: 0.1534,
        };
        let text = format_portfolio_report(&entry, "Ethereum");
        assert!(text.contains("💰 Profit/Loss: $1234.57"));
        assert!(text.contains("📈 ROI: 15.34%"));
        assert!(text.contains("🔗 Chain: Ethereum"));
    }
}
