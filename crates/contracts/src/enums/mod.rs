pub mod order_status;
pub mod payment_method;

pub use order_status::{OrderStatus, StatusClass};
pub use payment_method::PaymentMethod;
