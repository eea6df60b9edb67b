//! A serenity bot whose slash commands declare the permissions the bot
//! itself needs in the invoking channel, checked before the command runs.

pub mod checks;
pub mod commands;
pub mod config;
pub mod error;
pub mod event_handler;
pub mod hooks;
