#![warn(missing_docs)]
//! Herald watches a set of YouTube channels and announces every new upload to
//! a Discord channel, remembering what it already announced across restarts.

pub mod config;
pub mod engine;
pub mod http_client;
pub mod models;
pub mod notifier;
pub mod persistence;
pub mod providers;
pub mod supervisor;
pub mod test_helpers;
