pub mod args;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod order;
pub mod question;
pub mod quiz;
