pub mod links;
pub mod models;
