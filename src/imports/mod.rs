pub mod linkedin;

pub use linkedin::parse_upload;
