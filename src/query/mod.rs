//! Paged character queries.
//!
//! [`QueryClient`] is the seam between the feed core and the network: the
//! controller only ever asks for "page N" and receives either a batch of
//! [`Character`] records or a [`QueryError`]. [`GraphQlClient`] is the
//! production implementation.

mod error;
mod graphql;
mod types;

pub use error::QueryError;
pub use graphql::{GraphQlClient, CHARACTERS_QUERY};
pub use types::Character;

use async_trait::async_trait;

/// Sends one paged query.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Fetch the characters on `page` (1-based).
    async fn fetch_page(&self, page: u32) -> Result<Vec<Character>, QueryError>;
}
