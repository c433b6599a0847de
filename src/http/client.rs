//! Authenticated HTTP session over the remote API.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Response};

use super::error::HttpError;

/// Per-request timeout for every call issued through a [`Session`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// An authenticated session: one `reqwest::Client` plus the basic-auth
/// credential pair applied to every request.
///
/// The session is the only owner of the underlying connection pool; dropping
/// it releases the connections on every exit path, error or not.
pub struct Session {
    client: Client,
    username: String,
    token: String,
}

impl Session {
    /// Creates a session for `username` authenticated with `token` (a
    /// password or a personal access token). No request is issued here;
    /// credentials are only exercised when the first call goes out.
    pub fn new(username: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            username: username.to_string(),
            token: token.to_string(),
        })
    }

    /// Performs an authenticated GET and returns the response, or
    /// [`HttpError`] on a non-2xx status.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {}...", url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.token))
            .send()
            .await
            .context("Failed to send request")?;

        check_status(response)
    }

    /// Performs an authenticated DELETE and returns the response, or
    /// [`HttpError`] on a non-2xx status.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, url: &str) -> Result<Response> {
        debug!("DELETE {}...", url);

        let response = self
            .client
            .delete(url)
            .basic_auth(&self.username, Some(&self.token))
            .send()
            .await
            .context("Failed to send request")?;

        check_status(response)
    }
}

/// Maps a non-2xx response to the typed [`HttpError`], keeping the status
/// code intact for callers that branch on it.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(HttpError::new(status).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_get_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/ok")
            .with_status(200)
            .with_body("hello")
            .create_async()
            .await;

        let session = Session::new("user", "token").unwrap();
        let response = session.get(&format!("{}/ok", url)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.text().await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_get_sends_basic_auth() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        // base64("user:token")
        let mock = server
            .mock("GET", "/auth")
            .match_header("authorization", "Basic dXNlcjp0b2tlbg==")
            .with_status(200)
            .create_async()
            .await;

        let session = Session::new("user", "token").unwrap();
        session.get(&format!("{}/auth", url)).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_non_2xx_is_typed_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let session = Session::new("user", "token").unwrap();
        let err = session.get(&format!("{}/missing", url)).await.unwrap_err();

        mock.assert_async().await;
        let http = err.downcast_ref::<HttpError>().unwrap();
        assert_eq!(http.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("DELETE", "/thing")
            .with_status(204)
            .create_async()
            .await;

        let session = Session::new("user", "token").unwrap();
        session.delete(&format!("{}/thing", url)).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("DELETE", "/thing")
            .with_status(401)
            .create_async()
            .await;

        let session = Session::new("user", "bad-token").unwrap();
        let err = session.delete(&format!("{}/thing", url)).await.unwrap_err();

        mock.assert_async().await;
        let http = err.downcast_ref::<HttpError>().unwrap();
        assert!(http.is_unauthorized());
    }
}
