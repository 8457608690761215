mod employees;
mod history;
mod tasks;

pub use employees::PostgresEmployeeRepository;
pub use history::PostgresHistoryRepository;
pub use tasks::PostgresTaskRepository;
