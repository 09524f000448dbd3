//! Camera TestGen review client (terminal)

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
