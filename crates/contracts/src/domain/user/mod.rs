pub mod dto;

pub use dto::{CreateUserRequest, UpdateUserRequest, UserRecord, UserResponse, UsersResponse};
