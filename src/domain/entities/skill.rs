use std::collections::HashMap;

/// A positional parameter accepted by a skill. Optional parameters may only
/// trail required ones so positional parsing stays unambiguous.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub required: bool,
}

impl ParamSpec {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

/// Usage metadata for one skill: how it is written, what it takes, and an
/// example invocation. The dispatcher itself never reads this; the parser
/// uses the parameter order and the help output uses the rest.
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub examples: Vec<String>,
    pub params: Vec<ParamSpec>,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            usage: None,
            examples: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }
}

/// Registry of skill usage metadata keyed by skill name.
#[derive(Debug, Clone, Default)]
pub struct SkillRegistry {
    skills: HashMap<String, Skill>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, skill: Skill) {
        self.skills.insert(skill.name.clone(), skill);
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// The full ENS domain bot skill set.
    pub fn defaults() -> Self {
        let mut registry = Self::new();

        registry.register(
            Skill::new("register")
                .with_description("Register a new ENS domain. Returns a URL to complete the registration process.")
                .with_usage("/register [domain]")
                .with_example("/register vitalik.eth")
                .with_param(ParamSpec::required("domain")),
        );
        registry.register(
            Skill::new("info")
                .with_description("Get detailed information about an ENS domain including owner and resolver.")
                .with_usage("/info [domain]")
                .with_example("/info nick.eth")
                .with_param(ParamSpec::required("domain")),
        );
        registry.register(
            Skill::new("renew")
                .with_description("Extend the registration period of your ENS domain. Returns a URL to complete the renewal.")
                .with_usage("/renew [domain]")
                .with_example("/renew fabri.base.eth")
                .with_param(ParamSpec::required("domain")),
        );
        registry.register(
            Skill::new("check")
                .with_description("Check if a domain is available.")
                .with_usage("/check [domain]")
                .with_example("/check vitalik.eth")
                .with_param(ParamSpec::required("domain")),
        );
        registry.register(
            Skill::new("cool")
                .with_description("Get cool alternatives for a .eth domain.")
                .with_usage("/cool [domain]")
                .with_example("/cool vitalik.eth")
                .with_param(ParamSpec::required("domain")),
        );
        registry.register(
            Skill::new("reset")
                .with_description("Reset the conversation.")
                .with_usage("/reset")
                .with_example("/reset"),
        );
        registry.register(
            Skill::new("tip")
                .with_description("Show a URL for tipping a domain owner.")
                .with_usage("/tip [address]")
                .with_example("/tip 0x1234567890123456789012345678901234567890")
                .with_param(ParamSpec::required("address")),
        );
        registry.register(
            Skill::new("portfolio")
                .with_description("Get profit and loss data for the given address using the 1inch API.")
                .with_usage("/portfolio [address] [chain]")
                .with_example("/portfolio 0x1453b01609d09CcB6787338C96A549Fc449715f6 eth")
                .with_param(ParamSpec::required("address"))
                .with_param(ParamSpec::optional("chain")),
        );
        registry.register(
            Skill::new("swap")
                .with_description("Get a quote for swapping tokens using 1inch.")
                .with_usage("/swap [fromToken] [toToken] [amount] [chain]")
                .with_example("/swap BNB USDT 1")
                .with_param(ParamSpec::required("fromToken"))
                .with_param(ParamSpec::required("toToken"))
                .with_param(ParamSpec::required("amount"))
                .with_param(ParamSpec::optional("chain")),
        );
        registry.register(
            Skill::new("hi")
                .with_description("Get a welcome message and guide to using the platform.")
                .with_usage("/hi")
                .with_example("/hi"),
        );
        registry.register(
            Skill::new("ens")
                .with_description("Get creative and available ENS name suggestions.")
                .with_usage("/ens")
                .with_example("/ens"),
        );

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_skill() {
        let registry = SkillRegistry::defaults();
        for name in [
            "register",
            "info",
            "renew",
            "check",
            "cool",
            "reset",
            "tip",
            "portfolio",
            "swap",
            "hi",
            "ens",
        ] {
            assert!(registry.get(name).is_some(), "missing skill {}", name);
        }
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn swap_params_keep_declaration_order() {
        let registry = SkillRegistry::defaults();
        let swap = registry.get("swap").unwrap();
        let names: Vec<&str> = swap.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fromToken", "toToken", "amount", "chain"]);
        assert!(!swap.params[3].required);
    }
}
