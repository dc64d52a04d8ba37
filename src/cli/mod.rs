pub mod db;
pub mod manager;
