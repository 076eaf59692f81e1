// src/models/relatorio.rs
use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Periodo ano-mes ("2018-08") de um relatorio mensal. A validacao acontece
/// no parse: so existe `AnoMes` para um mes de calendario valido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnoMes {
    primeiro_dia: NaiveDate,
}

impl AnoMes {
    pub fn primeiro_dia(&self) -> NaiveDate {
        self.primeiro_dia
    }

    pub fn ultimo_dia(&self) -> NaiveDate {
        (self.primeiro_dia + Months::new(1))
            .pred_opt()
            .unwrap_or(self.primeiro_dia)
    }
}

impl FromStr for AnoMes {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exige "YYYY-MM" com zero a esquerda, como no wire format.
        if s.len() != 7 || s.as_bytes()[4] != b'-' {
            return Err(AppError::AnoMesInvalido);
        }
        let primeiro_dia = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|_| AppError::AnoMesInvalido)?;
        Ok(AnoMes { primeiro_dia })
    }
}

impl fmt::Display for AnoMes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primeiro_dia.format("%Y-%m"))
    }
}

/// As batidas de um usuario em um dia, ja formatadas para resposta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expediente {
    /// dd/MM/yyyy
    pub dia: String,
    /// Horarios HH:MM:SS em ordem de chegada, no maximo 4.
    pub pontos: Vec<String>,
}

/// Relatorio mensal derivado das batidas do periodo. Nunca e persistido;
/// e recalculado a cada request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relatorio {
    pub ano_mes: String,
    /// Duracoes em ISO 8601 (as horas de um mes passam de 24h, entao horas
    /// nao viram dias aqui).
    pub horas_trabalhadas: String,
    pub horas_excedentes: String,
    pub horas_devidas: String,
    pub expedientes: Vec<Expediente>,
}
