//! Shared configuration, error types and scheduling constants for the rota
//! workspace.

pub mod config;
pub mod constants;
pub mod error;
