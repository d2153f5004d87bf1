pub mod api;
pub mod filters;
pub mod tracking;
pub mod ui;
