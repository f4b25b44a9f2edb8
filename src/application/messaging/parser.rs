//! Message parser - turns "/swap BNB USDT 1" into a SkillRequest.
//!
//! Positional arguments are mapped onto the skill's declared parameter names
//! in order; `key=value` tokens assign by name instead. Unknown skills still
//! produce a request so the dispatcher can answer 400.

use crate::domain::entities::{SkillRegistry, SkillRequest};

pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Parse one line of input. Returns `None` for non-command text.
    pub fn parse(
        &self,
        text: &str,
        sender_address: Option<&str>,
        registry: &SkillRegistry,
    ) -> Option<SkillRequest> {
        let text = text.trim();
        let body = text
            .strip_prefix('/')
            .or_else(|| text.strip_prefix(&self.command_prefix))?;

        let mut tokens = body.split_whitespace();
        let name = tokens.next()?.to_lowercase();

        let mut request = SkillRequest::new(name.clone()).with_sender_opt(sender_address);

        let param_names: Vec<&str> = registry
            .get(&name)
            .map(|skill| skill.params.iter().map(|p| p.name.as_str()).collect())
            .unwrap_or_default();
        let mut positional = param_names.into_iter();

        for token in tokens {
            if let Some((key, value)) = token.split_once('=') {
                request.params.insert(key.to_string(), value.to_string());
            } else if let Some(param) = positional.next() {
                request.params.insert(param.to_string(), token.to_string());
            }
            // Tokens beyond the declared parameters are dropped.
        }

        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> MessageParser {
        MessageParser::new("/")
    }

    #[test]
    fn positional_args_map_onto_declared_params() {
        let registry = SkillRegistry::defaults();
        let request = parser()
            .parse("/swap BNB USDT 1 bsc", Some("0xabc"), &registry)
            .unwrap();
        assert_eq!(request.skill, "swap");
        assert_eq!(request.param("fromToken"), Some("BNB"));
        assert_eq!(request.param("toToken"), Some("USDT"));
        assert_eq!(request.param("amount"), Some("1"));
        assert_eq!(request.param("chain"), Some("bsc"));
        assert_eq!(request.sender_address.as_deref(), Some("0xabc"));
    }

    #[test]
    fn key_value_args_assign_by_name() {
        let registry = SkillRegistry::defaults();
        let request = parser()
            .parse("/swap fromToken=ETH toToken=USDC amount=2", None, &registry)
            .unwrap();
        assert_eq!(request.param("fromToken"), Some("ETH"));
        assert_eq!(request.param("toToken"), Some("USDC"));
        assert_eq!(request.param("amount"), Some("2"));
        assert_eq!(request.param("chain"), None);
    }

    #[test]
    fn skill_name_is_lowercased() {
        let registry = SkillRegistry::defaults();
        let request = parser().parse("/CHECK vitalik.eth", None, &registry).unwrap();
        assert_eq!(request.skill, "check");
        assert_eq!(request.param("domain"), Some("vitalik.eth"));
    }

    #[test]
    fn unknown_skill_still_produces_a_request() {
        let registry = SkillRegistry::defaults();
        let request = parser().parse("/frobnicate abc", None, &registry).unwrap();
        assert_eq!(request.skill, "frobnicate");
        assert!(request.params.is_empty());
    }

    #[test]
    fn plain_text_is_not_a_command() {
        let registry = SkillRegistry::defaults();
        assert!(parser().parse("hello there", None, &registry).is_none());
        assert!(parser().parse("", None, &registry).is_none());
    }
}
