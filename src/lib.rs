//! Infinite-scroll character feed over a paginated GraphQL API.

pub mod cli;
pub mod config;
pub mod dump;
pub mod feed;
pub mod logging;
pub mod query;
pub mod shutdown;
pub mod ui;
