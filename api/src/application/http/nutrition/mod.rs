pub mod handlers;
pub mod page;
pub mod router;
pub mod upload;
pub mod validators;
