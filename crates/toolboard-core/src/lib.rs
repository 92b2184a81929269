pub mod aggregate;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod progress;
pub mod record;
pub mod report;
pub mod snapshot;
pub mod summary;
pub mod table;
pub mod types;

pub use error::{BoardError, Result};
