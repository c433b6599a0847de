pub mod github;
pub mod http;
pub mod reconcile;
