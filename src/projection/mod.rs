//! Projection engine for the monthly business case statement

mod schedule;
mod statement;
mod engine;
pub mod export;

pub use schedule::RevenueSchedule;
pub use statement::{derive_statement, MonthlyStatement, ProjectionTotals, StatementRow};
pub use engine::{evaluate, ProjectionEngine};
pub use export::write_statement_csv;
