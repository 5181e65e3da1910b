//! Command-line front-end for the translation services

pub mod commands;
