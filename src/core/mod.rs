pub mod app;
pub mod constants;
pub mod message;
pub mod seed;
