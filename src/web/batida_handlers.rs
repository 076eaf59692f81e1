// src/web/batida_handlers.rs
use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{batida::NovaBatida, relatorio::Expediente},
    repos::batida_repo::SqliteBatidaRepository,
    services::batida_service::{self, ConfigDeValidacao},
    state::AppState,
};

/// POST /v1/batidas — registra uma batida e devolve o expediente do dia.
pub async fn criar_batida_handler(
    State(state): State<AppState>,
    Json(payload): Json<NovaBatida>,
) -> AppResult<(StatusCode, Json<Expediente>)> {
    tracing::debug!(
        "Nova batida recebida: usuario {} em {}",
        payload.id_de_usuario,
        payload.momento
    );

    let repo = SqliteBatidaRepository::new(state.db_pool.clone());
    let config = ConfigDeValidacao::from(&state.configs);
    let expediente = batida_service::criar_batida(&repo, config, &payload).await?;

    Ok((StatusCode::CREATED, Json(expediente)))
}
