// src/state.rs
use sqlx::SqlitePool;

use crate::config::Configs;

/// Estado compartilhado da aplicacao: o pool da base e a configuracao lida na
/// subida. Nenhum estado mutavel em processo alem do que a persistencia guarda.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub configs: Configs,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}

impl axum::extract::FromRef<AppState> for Configs {
    fn from_ref(state: &AppState) -> Configs {
        state.configs.clone()
    }
}
