// src/services/mod.rs
pub mod batida_service;
pub mod relatorio_service;
