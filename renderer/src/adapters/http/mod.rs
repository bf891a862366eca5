//! HTTP adapter

pub mod client;

pub use client::ProxyFeedClient;
