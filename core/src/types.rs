//! Domain DTOs for the refheap API.
//!
//! # Design
//! These types mirror the JSON bodies refheap returns; field names follow the
//! wire (refheap is case sensitive, and the identifier travels as `paste-id`).
//! Every field the caller does not set is server-authoritative: operations
//! hand back a fresh, fully populated `Paste` rather than patching one in
//! place. Container-level `#[serde(default)]` keeps decoding tolerant of
//! absent fields; an older or trimmed-down server simply leaves zero values.

use serde::{Deserialize, Serialize};

/// A paste as refheap reports it.
///
/// Callers construct one with the fields they control (typically `contents`,
/// `language` and `private` for create/save, or just `id` to reference an
/// existing paste) and leave the rest default:
///
/// `Paste { contents: source, language: "Rust".to_string(), ..Paste::default() }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Paste {
    /// Number of lines in the paste.
    pub lines: u32,
    /// Number of times the paste has been viewed.
    pub views: u32,
    /// Creation date, ISO-8601 as returned by the service. Treated as opaque.
    pub date: String,
    /// Paste identifier. Empty until the paste exists remotely.
    #[serde(rename = "paste-id")]
    pub id: String,
    /// Language the paste is highlighted as.
    pub language: String,
    /// Whether the paste is private.
    pub private: bool,
    /// Canonical URL of the paste.
    pub url: String,
    /// User who owns the paste; "anonymous" for anonymous pastes.
    pub user: String,
    /// The paste text itself.
    pub contents: String,
}

/// Syntax-highlighted rendering of a paste: an HTML fragment wrapped in JSON
/// by the highlight endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HighlightedPaste {
    /// The rendered markup.
    pub content: String,
}
