//! # bunny-client
//!
//! HTTP client for index operations against a search cluster.
//!
//! Every operation takes a validated [`IndexName`]; operations accepting raw
//! strings validate them first and fail with [`ClientError::InvalidName`]
//! without touching the network.
//!
//! ```no_run
//! use bunny_client::{ConnectionSettings, ElasticClient, IndexExists};
//!
//! # async fn run() -> Result<(), bunny_client::ClientError> {
//! let client = ElasticClient::new(&ConnectionSettings::default())?;
//! if client.exists_raw("orders").await? {
//!     println!("orders exists");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod index;

pub use client::{ElasticClient, IndexExists};
pub use config::ConnectionSettings;
pub use error::ClientError;
pub use index::{create_body, Index, IndexDefinition};

pub use bunny_names::{AliasName, IndexAlias, IndexAliases, IndexName, NameError};
