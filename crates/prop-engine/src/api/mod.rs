pub mod config;
pub mod prop;
pub mod sink;
