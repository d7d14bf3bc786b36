pub mod cache;
pub mod map;
