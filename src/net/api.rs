//! Contact endpoint client.
//!
//! Client-side (hydrate): one multipart POST per submission via
//! `gloo-net`, requesting a JSON-capable response. Non-hydrate builds
//! return an error since submission is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-ok statuses collapse into one error
//! string for the caller; the distinction survives only in the log so
//! the form can show a single uniform failure state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

/// One contact form submission, posted as named form-data fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Field names and values in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
    }
}

/// POST the submission to `action` with `Accept: application/json`.
/// Success is any ok-status response; the response body is not consumed
/// beyond an error detail used for logging.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the
/// endpoint answers with a non-ok status.
pub async fn submit_contact(action: &str, submission: &ContactSubmission) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| "form data unavailable".to_owned())?;
        for (key, value) in submission.fields() {
            form.append_with_str(key, value)
                .map_err(|_| "form data unavailable".to_owned())?;
        }

        let resp = gloo_net::http::Request::post(action)
            .header("Accept", "application/json")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if resp.ok() {
            return Ok(());
        }

        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: Option<String>,
        }
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|body| body.error);
        log::warn!(
            "contact endpoint rejected submission: status {} ({})",
            resp.status(),
            detail.as_deref().unwrap_or("no detail")
        );
        Err(format!("submission rejected: status {}", resp.status()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action, submission);
        Err("not available outside the browser".to_owned())
    }
}
