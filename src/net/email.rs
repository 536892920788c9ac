//! Report-link email request.
//!
//! Client-side (browser): real HTTP call via `gloo-net`.
//! Native builds: the request returns an error since the endpoint is only
//! reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! The endpoint answers `200` with `{"status": "error"}` when the mail could
//! not be sent, so success needs both a 2xx status and a body that does not
//! report an error. A body that is not JSON counts as success.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Same plausibility check the form always used: something, `@`, something,
/// `.`, something, without whitespace.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+"));

/// How the request body is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/x-www-form-urlencoded`, readable through Django's `request.POST`.
    #[default]
    Form,
    Json,
}

impl BodyEncoding {
    /// Parse the `data-encoding` attribute. Anything but `json` means form.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Form,
        }
    }
}

/// Where and how to post the request, read from the page's `#email-data` holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailEndpoint {
    pub post_url: String,
    pub csrf_token: String,
    pub encoding: BodyEncoding,
}

impl EmailEndpoint {
    /// Holder element id carrying the endpoint attributes.
    pub const HOLDER_ID: &'static str = "email-data";

    /// Build the endpoint from the holder's `data-post-url`, `data-csrf-token`
    /// and `data-encoding` attribute values.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when there is no post URL.
    pub fn from_attributes(
        post_url: Option<String>,
        csrf_token: Option<String>,
        encoding: Option<&str>,
    ) -> Result<Self, UiError> {
        let post_url =
            post_url.ok_or_else(|| UiError::MissingElement(format!("{}[data-post-url]", Self::HOLDER_ID)))?;
        Ok(Self { post_url, csrf_token: csrf_token.unwrap_or_default(), encoding: BodyEncoding::from_attr(encoding) })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailLinkRequest {
    pub email: String,
    pub link: String,
}

impl EmailLinkRequest {
    /// Field pairs for the form-encoded body.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("email", self.email.as_str()), ("link", self.link.as_str())]
    }
}

#[derive(Debug, Deserialize)]
struct SendLinkResponse {
    status: Option<String>,
}

/// Result of a send attempt, as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Failed,
}

/// Check an address against the plausibility pattern and return it trimmed.
///
/// # Errors
///
/// Returns [`UiError::InvalidEmail`] when the address does not match.
pub fn validate_email(input: &str) -> Result<&str, UiError> {
    let matches = match &*EMAIL_PATTERN {
        Ok(pattern) => pattern.is_match(input),
        Err(err) => {
            log::error!("email pattern failed to compile: {err}");
            false
        }
    };
    if matches { Ok(input.trim()) } else { Err(UiError::InvalidEmail) }
}

/// Decide the outcome from the response status and body text.
#[must_use]
pub fn classify_response(status: u16, body: &str) -> SendOutcome {
    if !(200..300).contains(&status) {
        return SendOutcome::Failed;
    }
    match serde_json::from_str::<SendLinkResponse>(body) {
        Ok(SendLinkResponse { status: Some(reported) }) if reported.eq_ignore_ascii_case("error") => SendOutcome::Failed,
        _ => SendOutcome::Sent,
    }
}

/// Body text of a read response, or empty (with a warning) when the read failed.
#[must_use]
pub fn body_or_empty<E: std::fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(err) => {
            log::warn!("report link response body unreadable: {err}");
            String::new()
        }
    }
}

/// Post `request` to the report-link endpoint.
///
/// # Errors
///
/// Returns an error if the request cannot be built or sent. An answered
/// request is reported through [`SendOutcome`] instead.
pub async fn send_report_link(endpoint: &EmailEndpoint, request: &EmailLinkRequest) -> Result<SendOutcome, UiError> {
    #[cfg(feature = "browser")]
    {
        let builder = gloo_net::http::Request::post(&endpoint.post_url).header("X-CSRFToken", &endpoint.csrf_token);
        let prepared = match endpoint.encoding {
            BodyEncoding::Json => builder.json(request)?,
            BodyEncoding::Form => {
                let params = web_sys::UrlSearchParams::new()?;
                for (key, value) in request.form_fields() {
                    params.append(key, value);
                }
                builder.body(params)?
            }
        };
        let resp = prepared.send().await?;
        let body = body_or_empty(resp.text().await);
        let outcome = classify_response(resp.status(), &body);
        log::info!("report link to {}: {outcome:?} ({})", endpoint.post_url, resp.status());
        Ok(outcome)
    }
    #[cfg(not(feature = "browser"))]
    {
        Err(UiError::Request(format!(
            "link for {} not sent: {} is only reachable from the browser",
            request.email, endpoint.post_url
        )))
    }
}
