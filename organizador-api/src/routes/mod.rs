pub(crate) mod employees;
pub(crate) mod error;
pub(crate) mod history;
pub(crate) mod tasks;

pub(crate) use error::ApiError;
