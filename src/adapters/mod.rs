// Adapters layer: concrete implementations for external systems (fact http client, http server).

pub mod fact;
pub mod server;
