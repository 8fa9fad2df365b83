pub mod api;
pub mod details;
pub mod list;
pub mod upload;
