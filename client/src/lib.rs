//! Fitness Planner API Client
//!
//! Typed HTTP client for the fitness planner backend. Covers the plan
//! endpoints (list, fetch, generate) and the nutrition endpoints
//! (generate, regenerate, macro calculation).
//!
//! The client resolves its base origin once at construction from an
//! explicitly injected [`ClientConfig`] and performs exactly one outbound
//! call per operation; it does not retry, cache, or deduplicate. Timeouts
//! and cancellation are inherited from the underlying `reqwest` transport.

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export the shared request/response types for convenience
pub use fitness_planner_shared as shared;
