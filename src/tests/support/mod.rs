pub mod fake_store;
pub mod fixtures;
pub mod http_server;
pub mod stubs;
