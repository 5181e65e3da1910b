//! Translation and pronunciation services

pub mod client;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod models;
pub mod network;
pub mod pronunciation;
