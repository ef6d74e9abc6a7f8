//! HTTP surface for the opening-hours service.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                   │
//! │  - JSON schema validation (api.rs DTOs)       │
//! │  - Error → status code mapping                │
//! │  - CORS, body limit, request tracing          │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────▼───────────────────────┐
//! │  Core (services/)                             │
//! │  - resolver: pairing and validation           │
//! │  - formatter: display strings                 │
//! └──────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod handlers;
pub mod router;

pub use router::create_router;
