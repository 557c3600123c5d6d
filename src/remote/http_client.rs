use super::*;

/// How a non-2xx response is turned into the caller-facing message.
#[derive(Clone, Copy, Debug)]
pub(super) enum ErrorDetail {
    /// Use the body's `error` field when present, else the fallback.
    ServerOr(&'static str),
    /// Always the fixed message, whatever the body says.
    Fixed(&'static str),
}

impl RemoteClient {
    /// Passes 2xx responses through. Otherwise the returned error's top-level
    /// message is the resolved detail and the status sits underneath it.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        detail: ErrorDetail,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match detail {
            ErrorDetail::Fixed(msg) => msg.to_string(),
            ErrorDetail::ServerOr(fallback) => {
                let body = resp.text().unwrap_or_default();
                server_error_message(&body).unwrap_or_else(|| fallback.to_string())
            }
        };
        tracing::debug!(%status, op = label, message = %message, "remote call failed");
        Err(anyhow::anyhow!("{} returned HTTP {}", label, status).context(message))
    }

    pub(super) fn post_json<B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        tracing::debug!(op = label, %url, "POST");
        self.client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .with_context(|| format!("{} request", label))
    }

    pub(super) fn get(&self, url: &str, label: &str) -> Result<reqwest::blocking::Response> {
        tracing::debug!(op = label, %url, "GET");
        self.client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .with_context(|| format!("{} request", label))
    }
}

/// The non-empty string `error` field of a JSON object body, if any.
pub(super) fn server_error_message(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    v.get("error")
        .and_then(|x| x.as_str())
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
