//! Domain traits - Abstractions for infrastructure implementations

pub mod defi;
pub mod resolver;
pub mod transport;

pub use defi::{DefiError, PortfolioApi, PortfolioEntry, SwapQuote, SwapQuoteApi, SwapQuoteRequest, SwapTx};
pub use resolver::{NameProfile, NameResolver, ResolvedName, ResolverError};
pub use transport::{MemoryStore, Transport};
