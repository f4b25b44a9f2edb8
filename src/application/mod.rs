//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Dispatcher: skill name -> behavior mapping
//! - Skills: the individual command handlers
//! - Params: typed parameter validation at the dispatch boundary
//! - Errors: the skill error taxonomy
//! - Messaging: raw text -> SkillRequest parsing

pub mod dispatcher;
pub mod errors;
pub mod messaging;
pub mod params;
pub mod skills;
