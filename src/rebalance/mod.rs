pub mod config;
pub mod reposition;
