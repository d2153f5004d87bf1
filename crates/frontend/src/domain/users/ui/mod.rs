pub mod customers;
pub mod referrals;

pub use customers::CustomersList;
pub use referrals::ReferralsList;
