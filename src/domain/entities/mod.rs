//! Domain entities - Core business objects with no external dependencies

pub mod registry;
pub mod request;
pub mod skill;

pub use registry::{Chain, ChainRegistry, TokenRegistry};
pub use request::{SkillRequest, SkillResponse};
pub use skill::{ParamSpec, Skill, SkillRegistry};
