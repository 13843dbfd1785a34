pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, error_page, stat_card, status_badge};
pub use layouts::desktop::{desktop_layout, NavItem};
