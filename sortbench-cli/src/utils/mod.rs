pub mod md;
pub mod platform;
