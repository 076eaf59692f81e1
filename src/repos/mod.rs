// src/repos/mod.rs
pub mod batida_repo;
