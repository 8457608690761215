mod employees;
mod history;
mod tasks;

pub use employees::EmployeeServiceImpl;
pub use history::HistoryServiceImpl;
pub use tasks::TaskServiceImpl;
