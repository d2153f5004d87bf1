pub mod orders;
pub mod products;
pub mod tree;
pub mod users;
