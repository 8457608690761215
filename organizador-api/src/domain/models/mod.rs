mod employee;
mod history;
mod ids;
mod task;

pub use employee::*;
pub use history::*;
pub use ids::*;
pub use task::*;
