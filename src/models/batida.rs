// src/models/batida.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Formato aceito no campo `momento` (ISO 8601 local, sem timezone).
pub const FORMATO_MOMENTO: &str = "%Y-%m-%dT%H:%M:%S";

/// Uma batida de ponto registrada. Imutavel depois de criada; a remocao e
/// apenas logica (coluna `apagado_em` na tabela).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batida {
    pub id: i64,
    pub id_de_usuario: i64,
    /// Texto original recebido no request, preservado como foi enviado.
    pub momento: String,
    pub momento_date: NaiveDateTime,
}

/// Payload recebido em POST /v1/batidas.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaBatida {
    pub id_de_usuario: i64,
    pub momento: String,
}

impl NovaBatida {
    /// Converte o texto de `momento` para data/hora local.
    pub fn momento_date(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.momento, FORMATO_MOMENTO)
    }
}
