// src/services/relatorio_service.rs
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::{
    error::{AppError, AppResult},
    models::{
        batida::Batida,
        relatorio::{AnoMes, Expediente, Relatorio},
    },
    repos::batida_repo::BatidaRepository,
    utils::{
        iso_duration::segundos_para_iso_duration, segundos_uteis::segundos_uteis_no_periodo,
    },
};

const FORMATO_DIA: &str = "%d/%m/%Y";
const FORMATO_PONTO: &str = "%H:%M:%S";

/// Gera o relatorio do mes de um usuario a partir das batidas do periodo.
/// Nada e persistido: duas chamadas seguidas produzem o mesmo resultado.
pub async fn gerar_relatorio<R: BatidaRepository>(
    repo: &R,
    ano_mes: AnoMes,
    id_de_usuario: i64,
) -> AppResult<Relatorio> {
    let de = ano_mes.primeiro_dia();
    let ate = ano_mes.ultimo_dia();

    let inicio = de.and_time(NaiveTime::MIN);
    let fim = ate.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::seconds(1);
    let batidas = repo
        .listar_de_usuario_no_periodo(id_de_usuario, inicio, fim)
        .await?;

    if batidas.is_empty() {
        return Err(AppError::RelatorioNaoEncontrado);
    }

    let segundos_uteis = segundos_uteis_no_periodo(de, ate);
    let trabalhados = segundos_trabalhados(&batidas);

    let diferenca = trabalhados - segundos_uteis;
    let (excedentes, devidas) = if diferenca < 0 {
        (0, -diferenca)
    } else {
        (diferenca, 0)
    };

    tracing::debug!(
        "Relatorio {} do usuario {}: {}s trabalhados contra {}s uteis",
        ano_mes,
        id_de_usuario,
        trabalhados,
        segundos_uteis
    );

    Ok(Relatorio {
        ano_mes: ano_mes.to_string(),
        horas_trabalhadas: segundos_para_iso_duration(trabalhados),
        horas_excedentes: segundos_para_iso_duration(excedentes),
        horas_devidas: segundos_para_iso_duration(devidas),
        expedientes: gerar_expedientes(&batidas),
    })
}

/// Expediente de um unico dia, usado como resposta imediata da criacao de
/// batida. Dia sem nenhuma batida nao tem expediente.
pub async fn gerar_expediente_do_dia<R: BatidaRepository>(
    repo: &R,
    id_de_usuario: i64,
    dia: NaiveDate,
) -> AppResult<Expediente> {
    let batidas = repo.listar_de_usuario_no_dia(id_de_usuario, dia).await?;
    if batidas.is_empty() {
        return Err(AppError::RelatorioNaoEncontrado);
    }

    Ok(Expediente {
        dia: dia.format(FORMATO_DIA).to_string(),
        pontos: batidas
            .iter()
            .map(|b| b.momento_date.format(FORMATO_PONTO).to_string())
            .collect(),
    })
}

/// Soma os segundos trabalhados percorrendo as batidas em ordem cronologica.
///
/// O pareamento e posicional, nao conhece "almoco" nem "fim de expediente":
/// dentro de um mesmo dia as batidas alternam entre abrir e fechar um
/// intervalo, e a troca de dia sempre abre um intervalo novo. Uma batida final
/// sem par nao contribui nada: dia incompleto nao conta.
pub fn segundos_trabalhados(batidas: &[Batida]) -> i64 {
    let mut dia_atual: Option<NaiveDate> = None;
    let mut aberta: Option<&Batida> = None;
    let mut total = 0i64;

    for batida in batidas {
        let dia = batida.momento_date.date();

        if dia_atual != Some(dia) {
            dia_atual = Some(dia);
            aberta = Some(batida);
            continue;
        }

        match aberta.take() {
            Some(abertura) => {
                total += (batida.momento_date - abertura.momento_date).num_seconds();
            }
            None => aberta = Some(batida),
        }
    }

    total
}

/// Agrupa as batidas por dia de calendario, em ordem crescente de dia, com os
/// horarios na ordem de chegada. Dias com numero impar de batidas tambem
/// aparecem.
pub fn gerar_expedientes(batidas: &[Batida]) -> Vec<Expediente> {
    let mut por_dia: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for batida in batidas {
        por_dia
            .entry(batida.momento_date.date())
            .or_default()
            .push(batida.momento_date.format(FORMATO_PONTO).to_string());
    }

    por_dia
        .into_iter()
        .map(|(dia, pontos)| Expediente {
            dia: dia.format(FORMATO_DIA).to_string(),
            pontos,
        })
        .collect()
}
