//! Integration tests with mock HTTP server

pub mod request_lifecycle;
pub mod write_gate;
pub mod transport_failures;
