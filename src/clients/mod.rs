//! Resource clients built on the shared HTTP transport.

pub mod contributors;
pub mod repos;

pub use contributors::ContributorsClient;
pub use repos::ReposClient;
