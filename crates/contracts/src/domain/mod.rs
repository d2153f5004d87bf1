pub mod order;
pub mod product;
pub mod tree;
pub mod user;
