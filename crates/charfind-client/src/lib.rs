//! HTTP lookup client for the external character service.

pub mod client;

pub use client::HttpLookupClient;
