// src/lib.rs
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repos;
pub mod services;
pub mod state;
pub mod utils;
pub mod web;
