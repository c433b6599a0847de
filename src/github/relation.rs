//! The two directions of the follow graph.

/// A direction of the follow graph: accounts following the authenticated
/// user, or accounts the user follows. Only these two listings exist, so an
/// invalid relation kind is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Followers,
    Following,
}

impl Relation {
    /// The path segment of the listing endpoint for this relation.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Relation::Followers => "followers",
            Relation::Following => "following",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.endpoint())
    }
}
