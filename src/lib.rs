pub mod cli;
pub mod config;
pub mod db;
pub mod logging;
pub mod models;

pub use db::{ContactStore, SharedStore, StoreError};
