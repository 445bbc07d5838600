// Interface adapters: HTTP surface, wire protocol, and port implementations.

pub mod handlers;
pub mod ids;
pub mod logging;
pub mod metrics;
pub mod protocol;
pub mod routes;
pub mod state;
