//! Database layer for fitlog

mod connection;
mod migrations;

pub use connection::Database;
