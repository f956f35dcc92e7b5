//! UI Components
//!
//! Leptos components for the motorcycle admin page.

mod motorcycle_form;
mod motorcycle_row;
mod motorcycle_table;

pub use motorcycle_form::MotorcycleForm;
pub use motorcycle_row::MotorcycleRow;
pub use motorcycle_table::MotorcycleTable;
