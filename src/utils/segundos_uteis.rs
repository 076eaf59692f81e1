// src/utils/segundos_uteis.rs
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Jornada esperada de um dia util: 8 horas.
pub const SEGUNDOS_POR_DIA_UTIL: i64 = 8 * 60 * 60;

pub fn e_fim_de_semana(dia: NaiveDate) -> bool {
    matches!(dia.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Conta os dias uteis (segunda a sexta, sem feriados) entre `de` e `ate`,
/// ambos inclusos. A contagem inclusiva e a que fecha a conta do mes: um mes
/// inteiro trabalhado a 8h/dia util resulta em excedente e devidas zeradas.
pub fn dias_uteis_no_periodo(de: NaiveDate, ate: NaiveDate) -> i64 {
    let mut dia = de;
    let mut uteis = 0;
    while dia <= ate {
        if !e_fim_de_semana(dia) {
            uteis += 1;
        }
        match dia.checked_add_days(Days::new(1)) {
            Some(proximo) => dia = proximo,
            None => break,
        }
    }
    uteis
}

/// Segundos uteis esperados no periodo: dias uteis x 8h.
pub fn segundos_uteis_no_periodo(de: NaiveDate, ate: NaiveDate) -> i64 {
    dias_uteis_no_periodo(de, ate) * SEGUNDOS_POR_DIA_UTIL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia(ano: i32, mes: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, d).expect("data valida")
    }

    #[test]
    fn agosto_de_2018_tem_23_dias_uteis() {
        assert_eq!(dias_uteis_no_periodo(dia(2018, 8, 1), dia(2018, 8, 31)), 23);
        assert_eq!(
            segundos_uteis_no_periodo(dia(2018, 8, 1), dia(2018, 8, 31)),
            23 * SEGUNDOS_POR_DIA_UTIL
        );
    }

    #[test]
    fn fevereiro_bissexto_conta_o_dia_29() {
        // 29/02/2020 caiu num sabado, entao nao entra; 2020-02 tem 20 dias uteis.
        assert_eq!(dias_uteis_no_periodo(dia(2020, 2, 1), dia(2020, 2, 29)), 20);
        // Ja 29/02/2016 foi segunda-feira: 21 dias uteis.
        assert_eq!(dias_uteis_no_periodo(dia(2016, 2, 1), dia(2016, 2, 29)), 21);
    }

    #[test]
    fn periodo_de_um_unico_dia() {
        // 06/08/2018 foi segunda-feira.
        assert_eq!(dias_uteis_no_periodo(dia(2018, 8, 6), dia(2018, 8, 6)), 1);
        // 04/08/2018 foi sabado.
        assert_eq!(dias_uteis_no_periodo(dia(2018, 8, 4), dia(2018, 8, 4)), 0);
    }

    #[test]
    fn periodo_atravessando_a_virada_do_ano() {
        // 31/12/2018 (segunda) e 01/01/2019 (terca).
        assert_eq!(dias_uteis_no_periodo(dia(2018, 12, 29), dia(2019, 1, 1)), 2);
    }

    #[test]
    fn periodo_invertido_nao_conta_nada() {
        assert_eq!(dias_uteis_no_periodo(dia(2018, 8, 10), dia(2018, 8, 1)), 0);
    }

    #[test]
    fn fim_de_semana() {
        assert!(e_fim_de_semana(dia(2018, 8, 4)));
        assert!(e_fim_de_semana(dia(2018, 8, 5)));
        assert!(!e_fim_de_semana(dia(2018, 8, 6)));
    }
}
