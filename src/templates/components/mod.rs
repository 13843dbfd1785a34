pub mod card;
pub mod error;
pub mod status;

pub use card::{card, stat_card};
pub use error::error_page;
pub use status::status_badge;
