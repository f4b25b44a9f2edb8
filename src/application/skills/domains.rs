//! Domain management skills: reset, renew, register, info, check, cool.

use rand::Rng;

use crate::application::dispatcher::{SkillDispatcher, SkillOutcome};
use crate::application::errors::SkillError;
use crate::application::params::DomainParams;
use crate::domain::entities::{SkillRequest, SkillResponse};
use crate::domain::traits::ResolvedName;

const MISSING_DOMAIN: &str = "Missing required parameters. Please provide domain.";

/// Word list the cool-alternative generator draws from.
const COOL_WORDS: [&str; 6] = ["lfg", "cool", "degen", "moon", "base", "gm"];

impl SkillDispatcher {
    pub(crate) async fn reset(&self) -> SkillOutcome {
        self.memory.clear().await;
        Ok(Some(SkillResponse::ok("Conversation reset.")))
    }

    pub(crate) async fn renew(&self, request: &SkillRequest) -> SkillOutcome {
        let params = DomainParams::parse(request, MISSING_DOMAIN)?;
        let resolved = self.resolve(&params.domain).await?;
        let owner = resolved.and_then(|r| r.address);

        let is_owner = match (&owner, &request.sender_address) {
            (Some(owner), Some(sender)) => owner.eq_ignore_ascii_case(sender),
            _ => false,
        };
        if !is_owner {
            return Err(SkillError::Authorization(
                "Looks like this domain is not registered to you. Only the owner can renew it."
                    .to_string(),
            ));
        }

        let url = format!("{}frames/manage?name={}", self.urls.frame, params.domain);
        Ok(Some(SkillResponse::ok(url)))
    }

    pub(crate) async fn register(&self, request: &SkillRequest) -> SkillOutcome {
        let params = DomainParams::parse(request, MISSING_DOMAIN)?;
        let url = format!("{}{}", self.urls.ens_app, params.domain);
        self.send(&url).await?;
        Ok(None)
    }

    pub(crate) async fn info(&self, request: &SkillRequest) -> SkillOutcome {
        let params = DomainParams::parse(request, MISSING_DOMAIN)?;
        let resolved = self.resolve(&params.domain).await?;
        let data = match resolved {
            Some(data) if data.domain.is_some() => data,
            _ => return Err(SkillError::NotFound("Domain not found.".to_string())),
        };

        if let Some(address) = &data.address {
            if self.transport.is_reachable(address).await {
                self.send(&format!(
                    "Ah, this domain is on the network, you can message it directly: https://converse.xyz/dm/{}",
                    params.domain
                ))
                .await?;
            }
        }

        let message = format_domain_info(&data, &params.domain, &self.urls.ens_app);
        Ok(Some(SkillResponse::ok(message)))
    }

    pub(crate) async fn check(&self, request: &SkillRequest) -> SkillOutcome {
        let params = DomainParams::parse(request, "Please provide a domain name to check.")?;
        let resolved = self.resolve(&params.domain).await?;
        let taken = resolved.map(|r| r.address.is_some()).unwrap_or(false);

        // Nested dispatch, synchronous: the alternatives are sent before the
        // outer result is returned. Boxed to break the recursive future type.
        let nested = SkillRequest::new("cool").with_param("domain", params.domain.clone());
        let nested_dispatch: std::pin::Pin<
            Box<dyn std::future::Future<Output = Option<SkillResponse>> + Send + '_>,
        > = Box::pin(self.handle(&nested));
        if let Some(alternatives) = nested_dispatch.await {
            if let Err(e) = self.send(&alternatives.message).await {
                tracing::warn!("failed to send cool alternatives: {}", e);
            }
        }

        if taken {
            Ok(Some(SkillResponse::new(
                404,
                format!("Looks like {} is already registered!", params.domain),
            )))
        } else {
            Ok(Some(SkillResponse::ok(format!(
                "Looks like {} is available! Here you can register it: {}{} or would you like to see some cool alternatives?",
                params.domain, self.urls.ens_app, params.domain
            ))))
        }
    }

    pub(crate) async fn cool(&self, request: &SkillRequest) -> SkillOutcome {
        let params = DomainParams::parse(request, MISSING_DOMAIN)?;
        Ok(Some(SkillResponse::ok(generate_cool_alternatives(
            &params.domain,
        ))))
    }
}

/// Format the resolved profile as a field table, skipping empty fields, with
/// the tip prompt appended.
pub fn format_domain_info(data: &ResolvedName, domain: &str, ens_app: &str) -> String {
    let url = format!("{}{}", ens_app, domain);
    let fields: [(&str, Option<&str>); 9] = [
        ("Address", data.address.as_deref()),
        ("Avatar URL", data.profile.avatar.as_deref()),
        ("Description", data.profile.description.as_deref()),
        ("ENS", data.domain.as_deref()),
        ("Primary ENS", data.profile.ens_primary.as_deref()),
        ("GitHub", data.profile.github.as_deref()),
        ("Resolver", data.profile.resolver_address.as_deref()),
        ("Twitter", data.profile.twitter.as_deref()),
        ("URL", Some(url.as_str())),
    ];

    let mut message = String::from("Domain information:\n\n");
    for (key, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            message.push_str(&format!("{}: {}\n", key, value));
        }
    }
    message.push_str("\n\nWould you like to tip the domain owner for getting there first 🤣?");
    message.trim().to_string()
}

/// Generate 5 randomized variants of the base name, each with one of the
/// fixed words randomly prefixed or suffixed.
pub fn generate_cool_alternatives(domain: &str) -> String {
    let base = domain.strip_suffix(".eth").unwrap_or(domain);
    let mut rng = rand::thread_rng();

    (0..5)
        .map(|i| {
            let word = COOL_WORDS[i];
            let name = if rng.gen_bool(0.5) {
                format!("{}{}.eth", word, base)
            } else {
                format!("{}{}.eth", base, word)
            };
            format!("{}. {} ✨", i + 1, name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::NameProfile;

    #[test]
    fn cool_alternatives_are_five_numbered_eth_names() {
        let listing = generate_cool_alternatives("vitalik.eth");
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 5);

        for (i, line) in lines.iter().enumerate() {
            let expected_prefix = format!("{}. ", i + 1);
            assert!(line.starts_with(&expected_prefix), "bad line: {}", line);
            assert!(line.ends_with(" ✨"), "bad line: {}", line);

            let name = line
                .trim_start_matches(&expected_prefix)
                .trim_end_matches(" ✨");
            assert!(name.ends_with(".eth"), "bad name: {}", name);

            let base = name.trim_end_matches(".eth");
            let word = COOL_WORDS[i];
            assert!(
                base == format!("{}vitalik", word) || base == format!("vitalik{}", word),
                "word {} not prefixed or suffixed in {}",
                word,
                name
            );
        }
    }

    #[test]
    fn cool_alternatives_tolerate_bare_base_names() {
        let listing = generate_cool_alternatives("vitalik");
        assert_eq!(listing.lines().count(), 5);
        assert!(listing.contains("vitalik"));
        assert!(!listing.contains(".eth.eth"));
    }

    #[test]
    fn domain_info_skips_empty_fields() {
        let data = ResolvedName {
            address: Some("0xabc".to_string()),
            domain: Some("nick.eth".to_string()),
            profile: NameProfile {
                github: Some("nick".to_string()),
                ..NameProfile::default()
            },
        };
        let message = format_domain_info(&data, "nick.eth", "https://app.ens.domains/");
        assert!(message.starts_with("Domain information:"));
        assert!(message.contains("Address: 0xabc"));
        assert!(message.contains("ENS: nick.eth"));
        assert!(message.contains("GitHub: nick"));
        assert!(message.contains("URL: https://app.ens.domains/nick.eth"));
        assert!(!message.contains("Avatar URL:"));
        assert!(!message.contains("Twitter:"));
        assert!(message.ends_with("🤣?"));
    }
}
