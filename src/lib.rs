pub mod config;
pub mod fetch;
pub mod present;
pub mod process;
pub mod view;
