// src/models/mod.rs
pub mod batida;
pub mod relatorio;
