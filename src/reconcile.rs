//! The reconciliation pass: unfollow everyone who doesn't follow back.

use std::collections::HashSet;

use anyhow::Result;
use log::{debug, info};

use crate::github::{FollowGraph, Relation};

/// The logins in `following` that are absent from `followers`, in the order
/// `following` returned them.
pub fn plan_unfollows(following: &[String], followers: &[String]) -> Vec<String> {
    let followers: HashSet<&str> = followers.iter().map(String::as_str).collect();
    following
        .iter()
        .filter(|login| !followers.contains(login.as_str()))
        .cloned()
        .collect()
}

/// Runs one reconciliation pass and returns the logins actually unfollowed.
///
/// Both listings are fetched before the first unfollow call, so the plan is a
/// point-in-time snapshot. Unfollows run strictly in sequence; the first
/// failure aborts the pass with that error, leaving earlier unfollows
/// committed and later candidates untouched.
pub async fn reconcile(graph: &mut dyn FollowGraph) -> Result<Vec<String>> {
    let followers = graph.relation(Relation::Followers).await?;
    let following = graph.relation(Relation::Following).await?;

    let candidates = plan_unfollows(&following, &followers);
    debug!(
        "{} followers, {} following, {} to unfollow",
        followers.len(),
        following.len(),
        candidates.len()
    );

    let mut unfollowed = Vec::with_capacity(candidates.len());
    for login in candidates {
        graph.unfollow(&login).await?;
        info!("Unfollowed {}", login);
        unfollowed.push(login);
    }

    Ok(unfollowed)
}
