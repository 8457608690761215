mod error;
mod messages;
pub mod models;
pub mod ports;
pub mod services;
mod validation;

pub use error::OrganizerError;
pub use messages::{Rejection, Subject};
