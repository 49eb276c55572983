pub mod common;
pub mod config;
pub mod error;
pub mod filter;

// Portal record types
pub mod activity;
pub mod announcement;
pub mod library;
pub mod priority;
pub mod submission;
pub mod user;

pub use common::*;
pub use config::*;
pub use error::*;
pub use filter::*;

pub use activity::*;
pub use announcement::*;
pub use library::*;
pub use priority::*;
pub use submission::*;
pub use user::*;
