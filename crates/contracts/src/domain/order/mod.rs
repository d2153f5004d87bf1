pub mod dto;

pub use dto::{Investor, OrderUnit, OrdersResponse, Transaction, UnitActionResponse};
