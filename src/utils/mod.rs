// src/utils/mod.rs
pub mod iso_duration;
pub mod segundos_uteis;
