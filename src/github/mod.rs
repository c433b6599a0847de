//! Client for the authenticated user's follow graph.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};

use crate::http::{Session, next_page};

mod relation;
mod types;

pub use relation::Relation;
pub use types::Account;

/// Default API root when no `--api-url` override is given.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// The follow-graph operations the reconciliation driver depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowGraph: Send {
    /// The ordered logins for one direction of the follow graph,
    /// exhaustively paginated.
    async fn relation(&mut self, kind: Relation) -> Result<Vec<String>>;

    /// Removes the authenticated user's follow of `login`.
    async fn unfollow(&mut self, login: &str) -> Result<()>;
}

/// The authenticated user's view of their own follow graph.
///
/// Each relation is fetched from the network at most once per process; the
/// result is kept in a two-entry cache keyed by relation kind, with no
/// invalidation. Both listings therefore reflect a point-in-time snapshot
/// taken before any unfollow call mutates the graph.
pub struct GithubUser {
    session: Session,
    api_url: String,
    cache: HashMap<Relation, Vec<String>>,
}

impl GithubUser {
    pub fn new(session: Session, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            session,
            api_url,
            cache: HashMap::new(),
        }
    }

    /// Fetches every page of one relation listing.
    ///
    /// The `Link: rel="next"` header is authoritative when the service sends
    /// one; a `Link` header without a `next` relation marks the last page.
    /// Without any `Link` header the fetch walks sequential page numbers and
    /// stops as soon as a page contributes zero new logins. That stagnation
    /// check also runs when a `next` link exists, so a service whose
    /// next-page signal loops cannot keep the fetch alive.
    #[tracing::instrument(skip(self))]
    async fn fetch_relation(&self, kind: Relation) -> Result<Vec<String>> {
        let base = format!("{}/user/{}", self.api_url, kind.endpoint());
        let mut logins = Vec::new();
        let mut seen = HashSet::new();
        let mut page = 1u32;
        let mut url = format!("{base}?page={page}");

        loop {
            debug!("Fetching {} page {} from {}...", kind, page, url);

            let response = self.session.get(&url).await?;
            let (had_link, next) = next_page(&response);
            let entries: Vec<Account> = response
                .json()
                .await
                .context("Failed to parse JSON response from GitHub API")?;

            let mut added = 0usize;
            for account in entries {
                if seen.insert(account.login.clone()) {
                    logins.push(account.login);
                    added += 1;
                }
            }

            if added == 0 {
                if next.is_some() {
                    warn!("{} page {} repeated earlier items, stopping", kind, page);
                }
                break;
            }
            match next {
                Some(next_url) => {
                    page += 1;
                    url = next_url;
                }
                None if had_link => break,
                None => {
                    page += 1;
                    url = format!("{base}?page={page}");
                }
            }
        }

        debug!("Fetched {} {} entries", logins.len(), kind);
        Ok(logins)
    }
}

#[async_trait]
impl FollowGraph for GithubUser {
    #[tracing::instrument(skip(self))]
    async fn relation(&mut self, kind: Relation) -> Result<Vec<String>> {
        if !self.cache.contains_key(&kind) {
            let fetched = self.fetch_relation(kind).await?;
            self.cache.insert(kind, fetched);
        }
        Ok(self.cache.get(&kind).cloned().unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    async fn unfollow(&mut self, login: &str) -> Result<()> {
        let url = format!("{}/user/following/{}", self.api_url, login);
        self.session.delete(&url).await?;
        debug!("Unfollowed {}", login);
        Ok(())
    }
}
