// src/web/routes.rs
use crate::{
    state::AppState,
    web::{batida_handlers, relatorio_handlers},
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas da API v1 ---
    let v1 = Router::new()
        .route("/batidas", post(batida_handlers::criar_batida_handler))
        .route(
            "/relatorios/{ano_mes}",
            get(relatorio_handlers::gerar_relatorio_handler),
        );

    Router::new().nest("/v1", v1).with_state(app_state)
}
