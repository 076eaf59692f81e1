// src/web/mod.rs
pub mod batida_handlers;
pub mod relatorio_handlers;
pub mod routes;
