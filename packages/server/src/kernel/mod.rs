//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod distance;
pub mod provider_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use distance::{HaversineDistanceService, PostgresDistanceService};
pub use provider_store::{InMemoryProviderStore, PostgresProviderStore};
pub use test_dependencies::{
    DistanceCallArgs, FailingProviderStore, MockDistanceService, TestDependencies,
};
pub use traits::*;
