pub use super::api_clients::Entity as ApiClients;
