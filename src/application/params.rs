//! Typed per-skill parameters, validated at the dispatch boundary before the
//! handler runs. Each `parse` rejects missing input with the exact message
//! the original bot replied with.

use crate::application::errors::SkillError;
use crate::domain::entities::SkillRequest;

/// Skills that take a single `domain` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParams {
    pub domain: String,
}

impl DomainParams {
    pub fn parse(request: &SkillRequest, missing_message: &str) -> Result<Self, SkillError> {
        let domain = request
            .param("domain")
            .ok_or_else(|| SkillError::Validation(missing_message.to_string()))?;
        Ok(Self {
            domain: domain.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipParams {
    pub address: String,
}

impl TipParams {
    pub fn parse(request: &SkillRequest) -> Result<Self, SkillError> {
        let address = request
            .param("address")
            .ok_or_else(|| SkillError::Validation("Please provide an address to tip.".to_string()))?;
        Ok(Self {
            address: address.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioParams {
    pub address: String,
    pub chain: String,
}

impl PortfolioParams {
    pub fn parse(request: &SkillRequest) -> Result<Self, SkillError> {
        // A missing address fails the same format check an invalid one does.
        let address = request
            .param("address")
            .ok_or_else(|| SkillError::Validation("Invalid address provided.".to_string()))?;
        let chain = request.param("chain").unwrap_or("eth");
        Ok(Self {
            address: address.to_string(),
            chain: chain.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParams {
    pub from_token: String,
    pub to_token: String,
    pub amount: String,
    pub chain: String,
}

impl SwapParams {
    pub fn parse(request: &SkillRequest) -> Result<Self, SkillError> {
        let missing =
            || SkillError::Validation("Please provide fromToken, toToken, and amount parameters.".to_string());
        let from_token = request.param("fromToken").ok_or_else(missing)?;
        let to_token = request.param("toToken").ok_or_else(missing)?;
        let amount = request.param("amount").ok_or_else(missing)?;
        let chain = request.param("chain").unwrap_or("bsc");
        Ok(Self {
            from_token: from_token.to_string(),
            to_token: to_token.to_string(),
            amount: amount.to_string(),
            chain: chain.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_params_reject_missing_with_given_message() {
        let request = SkillRequest::new("renew");
        let err = DomainParams::parse(&request, "Missing required parameters. Please provide domain.")
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_string(),
            "Missing required parameters. Please provide domain."
        );
    }

    #[test]
    fn swap_params_default_chain_to_bsc() {
        let request = SkillRequest::new("swap")
            .with_param("fromToken", "BNB")
            .with_param("toToken", "USDT")
            .with_param("amount", "1");
        let params = SwapParams::parse(&request).unwrap();
        assert_eq!(params.chain, "bsc");
        assert_eq!(params.amount, "1");
    }

    #[test]
    fn swap_params_require_all_three() {
        let request = SkillRequest::new("swap")
            .with_param("fromToken", "BNB")
            .with_param("amount", "1");
        let err = SwapParams::parse(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide fromToken, toToken, and amount parameters."
        );
    }

    #[test]
    fn portfolio_params_default_chain_to_eth() {
        let request =
            SkillRequest::new("portfolio").with_param("address", "0x0000000000000000000000000000000000000001");
        let params = PortfolioParams::parse(&request).unwrap();
        assert_eq!(params.chain, "eth");
    }
}
