#![forbid(unsafe_code)]

mod error;
pub mod apps;
pub mod context;
pub mod context_processors;
pub mod urls;

pub use error::DittoError;
