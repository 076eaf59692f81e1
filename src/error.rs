// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // --- Violacoes das regras de criacao de batida ---
    #[error("Sábado e domingo não são permitidos como dia de trabalho")]
    FimDeSemana,

    #[error("Horário já registrado")]
    JaRegistrada,

    #[error("Horário anterior à última batida registrada")]
    AnteriorABatidaPrevia,

    #[error("Apenas {0} horários podem ser registrados por dia")]
    MaximoDeBatidas(i64),

    #[error("Deve haver no mínimo {minutos} minutos de almoço")]
    AlmocoObrigatorio { minutos: i64 },

    // --- Erros de entrada ---
    #[error("Data e hora em formato inválido")]
    MomentoInvalido,

    #[error("Formato de anoMes inválido")]
    AnoMesInvalido,

    #[error("idDeUsuario inválido")]
    UsuarioInvalido,

    // --- Demais erros ---
    #[error("Relatório não encontrado")]
    RelatorioNaoEncontrado,

    #[error("Erro na base de dados: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Duplicidade responde Conflict, como no contrato da API.
            AppError::JaRegistrada => StatusCode::CONFLICT,
            AppError::FimDeSemana
            | AppError::AnteriorABatidaPrevia
            | AppError::MaximoDeBatidas(_)
            | AppError::AlmocoObrigatorio { .. }
            | AppError::MomentoInvalido
            | AppError::AnoMesInvalido
            | AppError::UsuarioInvalido => StatusCode::BAD_REQUEST,
            AppError::RelatorioNaoEncontrado => StatusCode::NOT_FOUND,
            AppError::Sqlx(_) | AppError::SqlxMigrate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Como converter AppError numa resposta HTTP (JSON: { "mensagem": ... }).
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // Erro do servidor vai para o log com detalhe; rejeicao de request
        // fica em debug para nao poluir o log.
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::debug!("Request rejeitado: {}", self);
        }

        let mensagem = match &self {
            AppError::Sqlx(_) | AppError::SqlxMigrate(_) => {
                "Erro ao acessar os dados.".to_string()
            }
            outro => outro.to_string(),
        };

        (status, Json(json!({ "mensagem": mensagem }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
