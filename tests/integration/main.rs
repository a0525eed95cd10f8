mod cli;
mod common;
mod config;
mod library;
