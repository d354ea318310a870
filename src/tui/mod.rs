pub mod app;
pub mod form;
pub mod handlers;
pub mod ui;
