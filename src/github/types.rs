use serde::Deserialize;

/// One entry of a follower/following listing page. The API returns more
/// fields per account; only the login identity is needed here.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub login: String,
}
