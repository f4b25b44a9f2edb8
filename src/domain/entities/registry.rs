use std::collections::HashMap;

/// A supported blockchain network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub display_name: String,
}

/// Chain key -> numeric id + display name. Built once at startup and handed
/// to the dispatcher; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: HashMap<String, Chain>,
}

impl ChainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, id: u64, display_name: impl Into<String>) {
        self.chains.insert(
            key.into(),
            Chain {
                id,
                display_name: display_name.into(),
            },
        );
    }

    /// Case-insensitive lookup by chain key.
    pub fn get(&self, key: &str) -> Option<&Chain> {
        self.chains.get(&key.to_lowercase())
    }

    pub fn mainnet() -> Self {
        let mut registry = Self::new();
        registry.insert("eth", 1, "Ethereum");
        registry.insert("bsc", 56, "BNB Chain");
        registry.insert("polygon", 137, "Polygon");
        registry.insert("arbitrum", 42161, "Arbitrum");
        registry.insert("optimism", 10, "Optimism");
        registry.insert("base", 8453, "Base");
        registry
    }
}

/// Chain key -> token symbol -> contract address. Read-only for the process
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<String, HashMap<String, String>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        chain: impl Into<String>,
        symbol: impl Into<String>,
        address: impl Into<String>,
    ) {
        self.tokens
            .entry(chain.into())
            .or_default()
            .insert(symbol.into(), address.into());
    }

    /// Contract address for a symbol, case-insensitive on both keys.
    pub fn address(&self, chain: &str, symbol: &str) -> Option<&str> {
        self.tokens
            .get(&chain.to_lowercase())
            .and_then(|t| t.get(&symbol.to_uppercase()))
            .map(String::as_str)
    }

    /// Symbols supported on a chain, sorted for stable error messages.
    pub fn symbols(&self, chain: &str) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .tokens
            .get(&chain.to_lowercase())
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default();
        symbols.sort_unstable();
        symbols
    }

    pub fn mainnet() -> Self {
        let mut registry = Self::new();

        registry.insert("eth", "ETH", "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");
        registry.insert("eth", "USDC", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        registry.insert("eth", "USDT", "0xdAC17F958D2ee523a2206206994597C13D831ec7");
        registry.insert("eth", "DAI", "0x6B175474E89094C44Da98b954EedeAC495271d0F");
        registry.insert("eth", "WETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

        registry.insert("bsc", "BNB", "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");
        registry.insert("bsc", "USDT", "0x55d398326f99059fF775485246999027B3197955");
        registry.insert("bsc", "BUSD", "0xe9e7CEA3DedcA5984780Bafc599bD69ADd087D56");
        registry.insert("bsc", "USDC", "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d");
        registry.insert("bsc", "WBNB", "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_lookup_is_case_insensitive() {
        let chains = ChainRegistry::mainnet();
        assert_eq!(chains.get("BSC").map(|c| c.id), Some(56));
        assert_eq!(chains.get("eth").map(|c| c.id), Some(1));
        assert_eq!(chains.get("base").map(|c| c.id), Some(8453));
        assert!(chains.get("solana").is_none());
    }

    #[test]
    fn token_lookup_normalizes_both_keys() {
        let tokens = TokenRegistry::mainnet();
        assert_eq!(
            tokens.address("BSC", "bnb"),
            Some("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE")
        );
        assert_eq!(
            tokens.address("bsc", "usdt"),
            Some("0x55d398326f99059fF775485246999027B3197955")
        );
        assert!(tokens.address("bsc", "DOGE").is_none());
        assert!(tokens.address("solana", "SOL").is_none());
    }

    #[test]
    fn symbols_are_sorted() {
        let tokens = TokenRegistry::mainnet();
        assert_eq!(tokens.symbols("bsc"), vec!["BNB", "BUSD", "USDC", "USDT", "WBNB"]);
        assert!(tokens.symbols("solana").is_empty());
    }
}
