//! Outbound HTTP for smoke-test cases.

mod client;

pub use client::HttpClient;
