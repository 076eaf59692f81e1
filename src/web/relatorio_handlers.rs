// src/web/relatorio_handlers.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::relatorio::{AnoMes, Relatorio},
    repos::batida_repo::SqliteBatidaRepository,
    services::relatorio_service,
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioParams {
    pub id_de_usuario: Option<i64>,
}

/// GET /v1/relatorios/{anoMes}?idDeUsuario=1 — relatorio mensal do usuario.
pub async fn gerar_relatorio_handler(
    State(state): State<AppState>,
    Path(ano_mes): Path<String>,
    Query(params): Query<RelatorioParams>,
) -> AppResult<Json<Relatorio>> {
    let id_de_usuario = params.id_de_usuario.unwrap_or(1);
    if id_de_usuario < 1 {
        return Err(AppError::UsuarioInvalido);
    }
    let ano_mes: AnoMes = ano_mes.parse()?;

    tracing::debug!("Gerando relatorio {} do usuario {}", ano_mes, id_de_usuario);

    let repo = SqliteBatidaRepository::new(state.db_pool.clone());
    let relatorio = relatorio_service::gerar_relatorio(&repo, ano_mes, id_de_usuario).await?;

    Ok(Json(relatorio))
}
