pub mod herd;
pub mod ui;
