pub mod list;
pub mod tracking_board;

pub use list::OrdersList;
pub use tracking_board::TrackingBoard;
