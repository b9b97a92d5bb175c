pub mod config;
pub mod logging;

pub mod aggregate;
pub mod error;
pub mod fetch;
pub mod locator;
pub mod words;

pub use error::{CollideError, Result};
