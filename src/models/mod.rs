pub mod client;
pub mod role;

pub use client::{ProvisionedClient, UserRole};
pub use role::Role;
