#![forbid(unsafe_code)]

pub mod accounts;
pub mod error;
pub mod model;
pub mod progress;
pub mod time;

pub use accounts::{UserAction, reduce};
pub use error::{ActionError, IdError};
pub use progress::Progress;
