//! Synchronous client for the refheap paste-hosting API.
//!
//! # Overview
//! Create, fetch, edit, delete and fork pastes on a refheap instance, or pull
//! their syntax-highlighted renderings, optionally authenticated with a
//! username/token pair. Every operation is one blocking request/response
//! round trip returning a fresh value; nothing is retried, cached or mutated
//! in place.
//!
//! # Design
//! - `Config` carries the base URL and optional credentials; `PasteClient`
//!   pairs it with a reusable ureq agent.
//! - Request shapes are assembled as plain data before the single transport
//!   call, so they stay testable without a network.
//! - Service failures arrive as JSON `error` bodies, not status codes; the
//!   decoder checks for them before parsing paste data.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
mod http;
pub mod types;

pub use client::PasteClient;
pub use config::{Config, REFHEAP_URL};
pub use error::{ApiError, ConfigError};
pub use types::{HighlightedPaste, Paste};
