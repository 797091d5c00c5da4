//! Test support utilities.

pub mod mock;

pub use mock::{MockCall, MockRepoDataSource};
