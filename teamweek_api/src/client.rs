//! HTTP client for the Teamweek v3 API.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    errors::PathError,
    path, status,
    types::{Account, AccountID, Group, Milestone, Profile, Project, Task, User},
    Error,
};

/// Endpoint all relative resource paths resolve against by default.
pub const DEFAULT_BASE_URL: &str = "https://new.teamweek.com/api/v3/";

/// Value sent in the `User-Agent` header by default.
pub const USER_AGENT: &str = concat!("teamweek-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Teamweek v3 API.
///
/// Authentication is whatever the wrapped `reqwest::Client` attaches to its
/// requests (a default `Authorization` header, cookies, ...). Every call is a
/// single GET with no retries; timeouts are configured on the transport.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`]. Keep the
    /// trailing slash, otherwise the last path segment is replaced on
    /// resolution.
    pub base_url: Url,
    /// Sent as `User-Agent` on every request. Defaults to [`USER_AGENT`].
    pub user_agent: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Client {
    /// Creates a client on top of `transport`, or a default `reqwest::Client`
    /// when none is given.
    pub fn new(transport: Option<reqwest::Client>) -> Self {
        Self {
            http: transport.unwrap_or_default(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|e| Error::Path {
            path: base_url.to_string(),
            source: e.into(),
        })?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// The underlying HTTP transport.
    pub fn transport(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolves `path` against the base URL without touching the network.
    ///
    /// Relative paths land beneath the base URL, rooted paths replace its
    /// path and absolute URLs replace it entirely.
    pub fn resolve(&self, path: &str) -> Result<Url, Error> {
        let invalid = |source: PathError| Error::Path {
            path: path.to_string(),
            source,
        };
        path::validate(path).map_err(invalid)?;
        self.base_url.join(path).map_err(|e| invalid(e.into()))
    }

    async fn send(&self, path: &str) -> Result<reqwest::Response, Error> {
        let url = self.resolve(path)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Failed to get {}: {}", path, e);
                Error::Transport(e)
            })?;

        let code = resp.status().as_u16();
        if let Err(e) = status::classify(code) {
            tracing::warn!("Request for {} failed with status {}: {}", path, code, e);
            return Err(e);
        }
        Ok(resp)
    }

    /// Fetches `path` and decodes the first JSON value of the body into `T`.
    /// Anything after that value is ignored.
    ///
    /// A status rejected by [`status::classify`] is returned as is and the
    /// body is never read.
    pub async fn request<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self.send(path).await?.bytes().await?;
        decode(&body).map_err(|e| {
            tracing::debug!("Failed to decode {}: {}", path, e);
            Error::Decode(e)
        })
    }

    /// Like [`Client::request`], but a `null` body decodes to `T::default()`.
    async fn request_or_default<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.request::<Option<T>>(path).await?.unwrap_or_default())
    }

    /// Fetches `path`, checks the status and drops the body unread.
    pub async fn request_discard(&self, path: &str) -> Result<(), Error> {
        self.send(path).await.map(drop)
    }

    /// Fetches the profile of the authenticated user (`me.json`).
    pub async fn profile(&self) -> Result<Profile, Error> {
        self.request_or_default("me.json").await
    }

    /// Lists the accounts the authenticated user belongs to (`me/accounts.json`).
    pub async fn list_accounts(&self) -> Result<Vec<Account>, Error> {
        self.request_or_default("me/accounts.json").await
    }

    /// Lists the users of an account (`{account_id}/users.json`).
    pub async fn list_account_users(&self, account_id: AccountID) -> Result<Vec<User>, Error> {
        self.request_or_default(&format!("{}/users.json", account_id))
            .await
    }

    /// Lists the projects of an account (`{account_id}/projects.json`).
    pub async fn list_account_projects(
        &self,
        account_id: AccountID,
    ) -> Result<Vec<Project>, Error> {
        self.request_or_default(&format!("{}/projects.json", account_id))
            .await
    }

    /// Lists the milestones of an account (`{account_id}/milestones.json`).
    pub async fn list_account_milestones(
        &self,
        account_id: AccountID,
    ) -> Result<Vec<Milestone>, Error> {
        self.request_or_default(&format!("{}/milestones.json", account_id))
            .await
    }

    /// Lists the groups of an account with their memberships
    /// (`{account_id}/groups.json`).
    pub async fn list_account_groups(&self, account_id: AccountID) -> Result<Vec<Group>, Error> {
        self.request_or_default(&format!("{}/groups.json", account_id))
            .await
    }

    /// Lists the tasks of an account (`{account_id}/tasks.json`).
    pub async fn list_account_tasks(&self, account_id: AccountID) -> Result<Vec<Task>, Error> {
        self.request_or_default(&format!("{}/tasks.json", account_id))
            .await
    }
}

/// Decodes the first JSON value in `body`. An empty body is an EOF error.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(value) => value,
        None => serde_json::from_slice(body),
    }
}
