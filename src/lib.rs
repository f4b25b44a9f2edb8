//! ENS domain bot - a command-dispatch handler that resolves domain-name
//! lookups and proxies DeFi HTTP APIs into formatted chat replies.

pub mod application;
pub mod domain;
pub mod infrastructure;
