mod employees;
mod history;
mod tasks;

pub use employees::*;
pub use history::*;
pub use tasks::*;
