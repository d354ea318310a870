pub mod intake;
pub mod manager;
pub mod models;
