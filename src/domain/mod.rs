//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (SkillRequest, registries)
//! - Traits: Abstractions for infrastructure (NameResolver, Transport, DeFi APIs)

pub mod entities;
pub mod traits;
