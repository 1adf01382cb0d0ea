// tests/support/mod.rs
// Mocks and builders shared by the integration test binaries. Some symbols
// are purposely unused in individual test crates which causes dead_code /
// unused_imports warnings. Allow those at the module level to keep CI
// output clean.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
