//! The ens skill: randomized name candidates checked for availability.

use rand::seq::SliceRandom;

use crate::application::dispatcher::{SkillDispatcher, SkillOutcome};
use crate::domain::entities::SkillResponse;

const PREFIXES: [&str; 8] = [
    "crypto", "meta", "degen", "based", "onchain", "ether", "pixel", "zk",
];
const NOUNS: [&str; 8] = [
    "punk", "wizard", "whale", "maxi", "builder", "frog", "signer", "dao",
];

/// Number of candidates checked against the resolver per invocation.
const CHECKED_CANDIDATES: usize = 3;
/// Number of extra suggestions appended without checking.
const EXTRA_SUGGESTIONS: usize = 2;

/// Draw `count` distinct prefix+noun .eth candidates.
pub fn generate_candidates(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut candidates = Vec::with_capacity(count);
    while candidates.len() < count {
        let prefix = PREFIXES.choose(&mut rng).unwrap();
        let noun = NOUNS.choose(&mut rng).unwrap();
        let name = format!("{}{}.eth", prefix, noun);
        if !candidates.contains(&name) {
            candidates.push(name);
        }
    }
    candidates
}

impl SkillDispatcher {
    pub(crate) async fn suggest_names(&self) -> SkillOutcome {
        let mut message = String::from("🎲 ENS name ideas:\n\n");

        for candidate in generate_candidates(CHECKED_CANDIDATES) {
            let line = match self.resolver.resolve(&candidate).await {
                Ok(None) => format!("✅ {} is available!", candidate),
                Ok(Some(data)) if data.address.is_none() => {
                    format!("✅ {} is available!", candidate)
                }
                Ok(Some(_)) => format!("❌ {} is already taken.", candidate),
                Err(e) => {
                    tracing::warn!("availability check failed for {}: {}", candidate, e);
                    format!("❓ {} could not be checked.", candidate)
                }
            };
            message.push_str(&line);
            message.push('\n');
        }

        message.push_str("\n💡 Or try one of these:\n");
        for suggestion in generate_candidates(EXTRA_SUGGESTIONS) {
            message.push_str(&format!("• {}\n", suggestion));
        }

        Ok(Some(SkillResponse::ok(message.trim_end().to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_distinct_eth_names() {
        let candidates = generate_candidates(5);
        assert_eq!(candidates.len(), 5);
        for candidate in &candidates {
            assert!(candidate.ends_with(".eth"), "bad candidate: {}", candidate);
            let base = candidate.trim_end_matches(".eth");
            assert!(
                PREFIXES.iter().any(|p| base.starts_with(p)),
                "no known prefix in {}",
                candidate
            );
            assert!(
                NOUNS.iter().any(|n| base.ends_with(n)),
                "no known noun in {}",
                candidate
            );
        }
        let mut deduped = candidates.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), candidates.len());
    }
}
