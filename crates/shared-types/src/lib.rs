pub mod claims;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;

pub use claims::*;
pub use config::*;
pub use error::*;
pub use guard::*;
pub use models::*;
