pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod merge;
pub mod models;
pub mod parsers;
pub mod scrapers;
pub mod storage;
pub mod utils;

pub use error::{MenuError, Result};
