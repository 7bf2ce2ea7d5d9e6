//! Request building, execution and response decoding for the paste API.
//!
//! # Design
//! `PasteClient` holds a `Config` and a reusable `ureq::Agent` and carries no
//! other state between calls; every operation is an independent round trip.
//! Each operation is split into a private `build_*` method that produces an
//! `ApiRequest` and a decode step that consumes the response body, with the
//! single `execute` call in between. The split keeps request shapes and
//! decoding rules unit-testable without touching the network.
//!
//! Refheap reports failures as JSON bodies carrying an `error` field, so the
//! decoder probes for that field before parsing the destination shape, and
//! operations other than delete ignore the status code entirely.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{execute, ApiRequest, ApiResponse, Method};
use crate::types::{HighlightedPaste, Paste};

/// Synchronous client for the refheap paste API.
///
/// Operations return fresh values rather than patching their inputs: a
/// successful create, save, fetch or fork hands back the paste exactly as the
/// server now knows it, and on failure the caller's record is untouched.
#[derive(Clone)]
pub struct PasteClient {
    config: Config,
    agent: ureq::Agent,
}

impl PasteClient {
    /// Client with no request deadline.
    pub fn new(config: Config) -> Self {
        Self::build(config, None)
    }

    /// Client whose calls give up after `timeout`, surfacing the expiry as
    /// an `ApiError::Transport`.
    pub fn with_timeout(config: Config, timeout: Duration) -> Self {
        Self::build(config, Some(timeout))
    }

    fn build(config: Config, timeout: Option<Duration>) -> Self {
        // Non-2xx statuses must come back as data: refheap puts the real
        // failure in the response body.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { config, agent }
    }

    /// Fetch a paste by identifier.
    ///
    /// No credentials are attached: identifiers act as capability tokens, so
    /// knowing a private paste's id is enough to read it.
    pub fn fetch(&self, id: &str) -> Result<Paste, ApiError> {
        let response = execute(&self.agent, self.build_fetch(id))?;
        decode(&response.body)
    }

    /// Create a new paste from the caller-set fields of `paste`; its
    /// identifier is ignored. Sent with credentials when configured, so the
    /// paste belongs to the authenticated user rather than "anonymous".
    pub fn create(&self, paste: &Paste) -> Result<Paste, ApiError> {
        let response = execute(&self.agent, self.build_create(paste))?;
        decode(&response.body)
    }

    /// Edit the existing paste `paste.id`, replacing its contents, language
    /// and privacy with the record's values. Ownership is the server's call:
    /// a credential mismatch comes back as an `ApiError::Service`.
    pub fn save(&self, paste: &Paste) -> Result<Paste, ApiError> {
        let response = execute(&self.agent, self.build_save(paste))?;
        decode(&response.body)
    }

    /// Delete a paste by identifier. Credentials travel as query parameters
    /// since a DELETE carries no form body.
    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = execute(&self.agent, self.build_delete(id))?;
        check_deleted(response)
    }

    /// Fork a paste into an independent copy owned by the authenticated
    /// caller. The returned record is the new paste, fresh identifier and
    /// all.
    pub fn fork(&self, id: &str) -> Result<Paste, ApiError> {
        let response = execute(&self.agent, self.build_fork(id))?;
        decode(&response.body)
    }

    /// Fetch the syntax-highlighted rendering of a paste. Leaves the paste
    /// record alone; the markup comes back in its own wrapper.
    pub fn highlight(&self, id: &str) -> Result<HighlightedPaste, ApiError> {
        let response = execute(&self.agent, self.build_highlight(id))?;
        decode(&response.body)
    }

    fn build_fetch(&self, id: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: self.paste_url(id),
            params: Vec::new(),
        }
    }

    fn build_create(&self, paste: &Paste) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            url: format!("{}/paste", self.base()),
            params: self.paste_form(paste),
        }
    }

    fn build_save(&self, paste: &Paste) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            url: self.paste_url(&paste.id),
            params: self.paste_form(paste),
        }
    }

    fn build_delete(&self, id: &str) -> ApiRequest {
        let mut params = Vec::new();
        add_auth(&mut params, &self.config);
        ApiRequest {
            method: Method::Delete,
            url: self.paste_url(id),
            params,
        }
    }

    fn build_fork(&self, id: &str) -> ApiRequest {
        let mut params = Vec::new();
        add_auth(&mut params, &self.config);
        params.push(("id".to_string(), id.to_string()));
        ApiRequest {
            method: Method::Post,
            url: format!("{}/fork", self.paste_url(id)),
            params,
        }
    }

    fn build_highlight(&self, id: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: format!("{}/highlight", self.paste_url(id)),
            params: Vec::new(),
        }
    }

    /// Shared form body for create and save. Credentials go first; contents
    /// and language are skipped when empty; the privacy flag is always sent.
    fn paste_form(&self, paste: &Paste) -> Vec<(String, String)> {
        let mut params = Vec::new();
        add_auth(&mut params, &self.config);
        if !paste.contents.is_empty() {
            params.push(("contents".to_string(), paste.contents.clone()));
        }
        if !paste.language.is_empty() {
            params.push(("language".to_string(), paste.language.clone()));
        }
        params.push(("private".to_string(), paste.private.to_string()));
        params
    }

    fn base(&self) -> &str {
        self.config.url.trim_end_matches('/')
    }

    fn paste_url(&self, id: &str) -> String {
        format!("{}/paste/{}", self.base(), id)
    }
}

impl Default for PasteClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Append the configured credentials to an outgoing parameter set. Adds
/// nothing when no username is configured; the token rides along even when
/// empty.
fn add_auth(params: &mut Vec<(String, String)>, config: &Config) {
    if !config.user.is_empty() {
        params.push(("username".to_string(), config.user.clone()));
        params.push(("token".to_string(), config.token.clone()));
    }
}

/// What the error probe deserializes every body into first.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Fail with `ApiError::Service` when `body` is a JSON object whose `error`
/// field is non-empty. An absent or empty field is not a service error.
fn service_error(body: &str) -> Result<(), ApiError> {
    let probe: ErrorBody = serde_json::from_str(body)?;
    match probe.error {
        Some(message) if !message.is_empty() => Err(ApiError::Service(message)),
        _ => Ok(()),
    }
}

/// Decode `body` into its destination shape, service error checked first.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    service_error(body)?;
    Ok(serde_json::from_str(body)?)
}

/// Interpret a delete response. 204 is the only success; anything else must
/// explain itself through a service error body or it becomes an error in its
/// own right. A non-204 delete never passes silently.
fn check_deleted(response: ApiResponse) -> Result<(), ApiError> {
    if response.status == 204 {
        return Ok(());
    }
    service_error(&response.body)?;
    Err(ApiError::Http {
        status: response.status,
        body: response.body,
    })
}
