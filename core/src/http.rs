//! Transport layer: plain-data request descriptions and the one ureq call.
//!
//! # Design
//! Operations describe what should go on the wire as an `ApiRequest` value,
//! so request shapes stay inspectable in tests without a network. `execute`
//! is the only function in the crate that performs I/O: one blocking round
//! trip, whole body read into memory. The paste API reports failures in
//! response bodies rather than status codes, so the agent is built with
//! `http_status_as_error(false)` and non-2xx responses flow back as data for
//! the decoder.

use crate::error::ApiError;

/// HTTP method for an API request. Only the verbs the paste API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Delete,
}

/// An outgoing request described as plain data.
///
/// `params` are form-encoded into the body on POST and appended to the URL as
/// a query string on DELETE (a DELETE carries no form body); GET requests
/// never have any.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
}

/// Status and fully-read body of an executed request.
#[derive(Debug, Clone)]
pub(crate) struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Perform one synchronous round trip.
///
/// Reading the body to completion here means the connection is released on
/// every path, whatever the decoder later makes of the bytes.
pub(crate) fn execute(agent: &ureq::Agent, request: ApiRequest) -> Result<ApiResponse, ApiError> {
    let mut response = match request.method {
        Method::Get => agent.get(&request.url).call()?,
        Method::Post => agent.post(&request.url).send_form(request.params)?,
        Method::Delete => {
            let mut builder = agent.delete(&request.url);
            for (key, value) in &request.params {
                builder = builder.query(key, value);
            }
            builder.call()?
        }
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;

    Ok(ApiResponse { status, body })
}
