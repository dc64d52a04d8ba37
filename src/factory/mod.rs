pub mod manager;
pub mod user;
