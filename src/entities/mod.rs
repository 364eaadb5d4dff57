pub mod prelude;

pub mod api_clients;
