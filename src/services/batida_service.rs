// src/services/batida_service.rs
use chrono::{Duration, NaiveDateTime};

use crate::{
    config::Configs,
    error::{AppError, AppResult},
    models::{batida::NovaBatida, relatorio::Expediente},
    repos::batida_repo::BatidaRepository,
    services::relatorio_service,
    utils::segundos_uteis::e_fim_de_semana,
};

/// Parametros explicitos do motor de validacao. Vem do `Configs` na subida do
/// processo; nenhuma regra le variavel de ambiente por conta propria.
#[derive(Debug, Clone, Copy)]
pub struct ConfigDeValidacao {
    pub max_batidas_no_dia: i64,
    pub almoco_minimo_minutos: i64,
}

impl Default for ConfigDeValidacao {
    fn default() -> Self {
        ConfigDeValidacao {
            max_batidas_no_dia: 4,
            almoco_minimo_minutos: 60,
        }
    }
}

impl From<&Configs> for ConfigDeValidacao {
    fn from(configs: &Configs) -> Self {
        ConfigDeValidacao {
            max_batidas_no_dia: configs.numero_maximo_de_batidas_no_dia,
            almoco_minimo_minutos: configs.tempo_minimo_de_almoco_minutos,
        }
    }
}

/// Cria uma batida: valida contra as regras, persiste e devolve o expediente
/// atualizado do dia. Falha de validacao nao escreve nada; falha de escrita
/// nao devolve expediente.
pub async fn criar_batida<R: BatidaRepository>(
    repo: &R,
    config: ConfigDeValidacao,
    nova: &NovaBatida,
) -> AppResult<Expediente> {
    if nova.id_de_usuario < 1 {
        return Err(AppError::UsuarioInvalido);
    }
    let momento_date = nova
        .momento_date()
        .map_err(|_| AppError::MomentoInvalido)?;

    validar_batida(repo, config, nova.id_de_usuario, momento_date).await?;

    let id = repo
        .criar(nova.id_de_usuario, &nova.momento, momento_date)
        .await?;
    tracing::debug!(
        "Batida {} criada para usuario {} em {}",
        id,
        nova.id_de_usuario,
        nova.momento
    );

    relatorio_service::gerar_expediente_do_dia(repo, nova.id_de_usuario, momento_date.date()).await
}

/// Avalia as regras em ordem fixa; a primeira violada interrompe a cadeia.
/// A ordem vai da regra mais barata (fim de semana, sem leitura nenhuma) para
/// a mais dependente de contexto (almoco), ja que cada checagem pode custar
/// uma leitura na persistencia.
pub async fn validar_batida<R: BatidaRepository>(
    repo: &R,
    config: ConfigDeValidacao,
    id_de_usuario: i64,
    momento: NaiveDateTime,
) -> AppResult<()> {
    regra_fim_de_semana(momento)?;
    regra_ja_registrada(repo, id_de_usuario, momento).await?;
    regra_anterior_a_batida_previa(repo, id_de_usuario, momento).await?;
    regra_maximo_de_batidas(repo, config, id_de_usuario, momento).await?;
    regra_almoco_minimo(repo, config, id_de_usuario, momento).await?;
    Ok(())
}

fn regra_fim_de_semana(momento: NaiveDateTime) -> AppResult<()> {
    if e_fim_de_semana(momento.date()) {
        return Err(AppError::FimDeSemana);
    }
    Ok(())
}

async fn regra_ja_registrada<R: BatidaRepository>(
    repo: &R,
    id_de_usuario: i64,
    momento: NaiveDateTime,
) -> AppResult<()> {
    let no_instante = repo
        .listar_de_usuario_no_periodo(id_de_usuario, momento, momento)
        .await?;
    if !no_instante.is_empty() {
        return Err(AppError::JaRegistrada);
    }
    Ok(())
}

/// Compara com a ultima batida registrada em qualquer dia: uma batida nova
/// precisa ser estritamente posterior a tudo o que o usuario ja registrou.
async fn regra_anterior_a_batida_previa<R: BatidaRepository>(
    repo: &R,
    id_de_usuario: i64,
    momento: NaiveDateTime,
) -> AppResult<()> {
    if let Some(ultima) = repo.batida_mais_recente(id_de_usuario).await? {
        if ultima.momento_date >= momento {
            return Err(AppError::AnteriorABatidaPrevia);
        }
    }
    Ok(())
}

async fn regra_maximo_de_batidas<R: BatidaRepository>(
    repo: &R,
    config: ConfigDeValidacao,
    id_de_usuario: i64,
    momento: NaiveDateTime,
) -> AppResult<()> {
    let registradas = repo
        .contar_de_usuario_no_dia(id_de_usuario, momento.date())
        .await?;
    if registradas >= config.max_batidas_no_dia {
        return Err(AppError::MaximoDeBatidas(config.max_batidas_no_dia));
    }
    Ok(())
}

/// So se aplica quando o dia ja tem exatamente 2 batidas: a 2a marcou a saida
/// para o almoco e a candidata seria o retorno. Exatamente no limite passa.
async fn regra_almoco_minimo<R: BatidaRepository>(
    repo: &R,
    config: ConfigDeValidacao,
    id_de_usuario: i64,
    momento: NaiveDateTime,
) -> AppResult<()> {
    let do_dia = repo
        .listar_de_usuario_no_dia(id_de_usuario, momento.date())
        .await?;
    if do_dia.len() != 2 {
        return Ok(());
    }

    let saida_para_almoco = &do_dia[1];
    let decorrido = momento - saida_para_almoco.momento_date;
    if decorrido < Duration::minutes(config.almoco_minimo_minutos) {
        return Err(AppError::AlmocoObrigatorio {
            minutos: config.almoco_minimo_minutos,
        });
    }
    Ok(())
}
