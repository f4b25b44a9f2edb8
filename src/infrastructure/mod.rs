//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Resolver: HTTP ENS-data client
//! - OneInch: swap-quote and portfolio API client
//! - Memory: in-process conversational memory
//! - Adapters: platform integrations (console)

pub mod adapters;
pub mod config;
pub mod memory;
pub mod oneinch;
pub mod resolver;
