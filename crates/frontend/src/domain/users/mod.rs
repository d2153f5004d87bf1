pub mod records;
pub mod ui;
