use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{FormError, Result};
use crate::types::UserDraft;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

const USERS_PATH: &str = "user";

/// Delivers a draft to the user service.
///
/// `Ok` carries the HTTP status of whatever response came back, success or
/// not; `Err` means no response was received at all.
pub trait UserTransport {
    fn create_user(&self, draft: &UserDraft) -> impl Future<Output = Result<u16>>;
}

pub struct UserApiClient {
    http: Client,
    users_url: Url,
}

impl UserApiClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let users_url = users_url(endpoint)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            users_url,
        })
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }
}

impl UserTransport for UserApiClient {
    async fn create_user(&self, draft: &UserDraft) -> Result<u16> {
        let response = self
            .http
            .post(self.users_url.clone())
            .header("Content-Type", "application/json")
            .json(draft)
            .send()
            .await?;

        // Response body is never read.
        Ok(response.status().as_u16())
    }
}

/// Resolve `{endpoint}/user`, keeping any path prefix on the endpoint.
pub fn users_url(endpoint: &str) -> Result<Url> {
    let invalid = |source: url::ParseError| FormError::InvalidEndpoint {
        url: endpoint.to_string(),
        source,
    };

    let mut base = Url::parse(endpoint).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(USERS_PATH).map_err(invalid)
}

/// True for statuses in the 200..=299 range.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
