pub mod api_connection;
pub mod cli;
pub mod display;
pub mod filters;
pub mod ingredients;
pub mod session;
pub mod views;
