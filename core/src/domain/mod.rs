pub mod common;
pub mod nutrition;
