pub mod config;
pub mod error;
pub mod hooks;
pub mod image;
pub mod io;
pub mod logging;
pub mod model;
pub mod render;
pub mod sync;

pub use error::{CatalogError, Result};
