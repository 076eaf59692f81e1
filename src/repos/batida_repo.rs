// src/repos/batida_repo.rs
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::batida::Batida,
};

/// Contrato de persistencia das batidas. Os services recebem a implementacao
/// por injecao; nao existe handle global de conexao.
#[async_trait]
pub trait BatidaRepository: Send + Sync {
    /// Insere a batida e devolve o id gerado.
    async fn criar(
        &self,
        id_de_usuario: i64,
        momento: &str,
        momento_date: NaiveDateTime,
    ) -> AppResult<i64>;

    /// Batidas do usuario com `de <= momento_date <= ate`, em ordem cronologica.
    async fn listar_de_usuario_no_periodo(
        &self,
        id_de_usuario: i64,
        de: NaiveDateTime,
        ate: NaiveDateTime,
    ) -> AppResult<Vec<Batida>>;

    /// Quantas batidas o usuario ja tem no dia de calendario.
    async fn contar_de_usuario_no_dia(&self, id_de_usuario: i64, dia: NaiveDate)
        -> AppResult<i64>;

    /// A batida mais recente do usuario, em qualquer dia.
    async fn batida_mais_recente(&self, id_de_usuario: i64) -> AppResult<Option<Batida>>;

    /// Conveniencia: todas as batidas do usuario em um dia de calendario.
    async fn listar_de_usuario_no_dia(
        &self,
        id_de_usuario: i64,
        dia: NaiveDate,
    ) -> AppResult<Vec<Batida>> {
        let inicio = dia.and_time(NaiveTime::MIN);
        let fim = inicio + Duration::days(1) - Duration::seconds(1);
        self.listar_de_usuario_no_periodo(id_de_usuario, inicio, fim)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct SqliteBatidaRepository {
    pool: SqlitePool,
}

impl SqliteBatidaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatidaRepository for SqliteBatidaRepository {
    async fn criar(
        &self,
        id_de_usuario: i64,
        momento: &str,
        momento_date: NaiveDateTime,
    ) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO batidas (id_de_usuario, momento, momento_date) VALUES (?, ?, ?)",
        )
        .bind(id_de_usuario)
        .bind(momento)
        .bind(momento_date)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            // A constraint UNIQUE (id_de_usuario, momento_date) fecha a janela
            // de corrida entre a checagem de duplicidade e o insert.
            if err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::JaRegistrada
            } else {
                AppError::from(err)
            }
        })?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    async fn listar_de_usuario_no_periodo(
        &self,
        id_de_usuario: i64,
        de: NaiveDateTime,
        ate: NaiveDateTime,
    ) -> AppResult<Vec<Batida>> {
        let batidas = sqlx::query_as::<_, Batida>(
            r#"
            SELECT id, id_de_usuario, momento, momento_date
            FROM batidas
            WHERE id_de_usuario = ?
              AND apagado_em IS NULL
              AND momento_date BETWEEN ? AND ?
            ORDER BY momento_date ASC
            "#,
        )
        .bind(id_de_usuario)
        .bind(de)
        .bind(ate)
        .fetch_all(&self.pool)
        .await?;

        Ok(batidas)
    }

    async fn contar_de_usuario_no_dia(
        &self,
        id_de_usuario: i64,
        dia: NaiveDate,
    ) -> AppResult<i64> {
        let inicio = dia.and_time(NaiveTime::MIN);
        let fim = inicio + Duration::days(1);

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM batidas
            WHERE id_de_usuario = ?
              AND apagado_em IS NULL
              AND momento_date >= ?
              AND momento_date < ?
            "#,
        )
        .bind(id_de_usuario)
        .bind(inicio)
        .bind(fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn batida_mais_recente(&self, id_de_usuario: i64) -> AppResult<Option<Batida>> {
        let batida = sqlx::query_as::<_, Batida>(
            r#"
            SELECT id, id_de_usuario, momento, momento_date
            FROM batidas
            WHERE id_de_usuario = ? AND apagado_em IS NULL
            ORDER BY momento_date DESC
            LIMIT 1
            "#,
        )
        .bind(id_de_usuario)
        .fetch_optional(&self.pool)
        .await?;

        Ok(batida)
    }
}
