//! HTTP collaborator for the bulletin feed server.
//!
//! Everything here is synchronous: a call blocks the UI for its duration,
//! which is an accepted limitation of the single-threaded design. The
//! `FeedService` trait exists so the TUI can be driven by a fake service
//! in tests.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::{BulletinError, Result};
use crate::model::Post;

/// Sentinel author shown when the user lookup fails.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// The remote content service, as seen by the dispatcher and the overlay
/// engine.
pub trait FeedService {
    /// Fetch all posts, newest ordering as served. Non-2xx is an error.
    fn list_posts(&self) -> Result<Vec<Post>>;

    /// Resolve an author's display name; never fails, returns
    /// [`UNKNOWN_AUTHOR`] when the server does not know the user.
    fn author_name(&self, author_id: i64) -> String;

    /// Exchange credentials for an access token.
    fn authenticate(&self, username: &str, password: &str) -> Result<String>;

    /// Submit a new post on behalf of the token's owner.
    fn submit_post(&self, token: &str, title: &str, body: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    username: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: Option<String>,
}

/// Blocking reqwest implementation of [`FeedService`].
pub struct HttpFeedService {
    client: Client,
    base: Url,
}

impl HttpFeedService {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("bulletin/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
}

impl FeedService for HttpFeedService {
    fn list_posts(&self) -> Result<Vec<Post>> {
        let url = self.endpoint("/posts")?;
        debug!(%url, "fetching posts");
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(BulletinError::Status(response.status().as_u16()));
        }

        let mut posts: Vec<Post> = response.json()?;
        for post in &mut posts {
            post.author_name = self.author_name(post.author_id);
        }
        debug!(count = posts.len(), "fetched posts");
        Ok(posts)
    }

    fn author_name(&self, author_id: i64) -> String {
        let url = match self.endpoint(&format!("/users/{author_id}")) {
            Ok(url) => url,
            Err(_) => return UNKNOWN_AUTHOR.to_string(),
        };

        let user = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<UserResponse>());

        match user {
            Ok(user) => user.username,
            Err(err) => {
                warn!(author_id, %err, "author lookup failed");
                UNKNOWN_AUTHOR.to_string()
            }
        }
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        let url = self.endpoint("/login")?;
        debug!(%url, username, "authenticating");
        let response = self
            .client
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()?;

        if !response.status().is_success() {
            return Err(BulletinError::Status(response.status().as_u16()));
        }

        let login: LoginResponse = response.json()?;
        login.access_token.ok_or(BulletinError::MissingToken)
    }

    fn submit_post(&self, token: &str, title: &str, body: &str) -> Result<()> {
        let url = self.endpoint("/posts")?;
        debug!(%url, title, "submitting post");
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "title": title, "content": body }))
            .send()?;

        if !response.status().is_success() {
            return Err(BulletinError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
