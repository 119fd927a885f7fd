#![allow(dead_code)]
/// Shared helpers for the integration and end-to-end tests
pub mod mocks;
pub mod stub_server;
