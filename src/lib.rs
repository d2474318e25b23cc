pub mod config;
pub mod editor;
pub mod errors;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod store;
pub mod templates_structs;
pub mod validate;
pub mod viewer;
