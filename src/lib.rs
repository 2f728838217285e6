// blazerize - web proxy that dresses uploaded photos in an orange blazer

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod openai;
pub mod server;
pub mod upload;
pub mod utils;
