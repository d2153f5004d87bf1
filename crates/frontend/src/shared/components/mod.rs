pub mod embedded_page;
pub mod number_format;
pub mod stat_card;

pub use embedded_page::EmbeddedPage;
pub use stat_card::StatCard;
