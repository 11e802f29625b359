mod admin;
pub use admin::*;

mod dashboard;
pub use dashboard::*;
