pub mod account;
pub mod bank;
pub mod command;
pub mod error;
pub mod reader;
pub mod writer;
