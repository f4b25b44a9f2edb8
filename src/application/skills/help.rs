//! The hi skill: static welcome/help banner.

use crate::application::dispatcher::{SkillDispatcher, SkillOutcome};
use crate::domain::entities::SkillResponse;

const WELCOME: &str = r#"
╔════════════════════════════════╗
║     ✨ ENS DOMAIN BOT ✨      ║
╚════════════════════════════════╝

🎮 MAIN FEATURES:

📌 Domain Management
   • /register [domain] ➜ Register new domain
   • /info [domain] ➜ Get domain details
   • /check [domain] ➜ Check availability
   • /renew [domain] ➜ Extend registration

💎 DeFi Tools
   • /swap [fromToken] [toToken] [amount]
     └─ Example: /swap BNB USDT 1
     └─ Supported: BNB, USDT, BUSD, USDC

   • /portfolio [address] [chain]
     └─ Example: /portfolio 0x1234...5678 eth
     └─ View profit/loss and ROI

🎲 Extra Features
   • /cool [domain] ➜ Get creative suggestions
   • /ens ➜ Get available name ideas
   • /tip [address] ➜ Send tips to owners

┏━━━━━━━━ QUICK START ━━━━━━━┓
  1. /check vitalik.eth
  2. /swap BNB USDT 1
  3. /portfolio [your-address] eth
┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛

❓ Need help? Type /hi anytime!"#;

impl SkillDispatcher {
    pub(crate) async fn hi(&self) -> SkillOutcome {
        self.send(WELCOME).await?;
        Ok(Some(SkillResponse::ok(
            "✨ Welcome! Try any command above to get started! ✨",
        )))
    }
}
