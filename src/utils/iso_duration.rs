// src/utils/iso_duration.rs

/// Converte segundos para uma duracao ISO 8601 ("PT8H30M15S"). Horas nao
/// viram dias: o total trabalhado de um mes passa facil de 24h e precisa
/// continuar legivel como horas.
pub fn segundos_para_iso_duration(segundos: i64) -> String {
    if segundos == 0 {
        return "PT0S".to_string();
    }

    let (sinal, total) = if segundos < 0 {
        ("-", -segundos)
    } else {
        ("", segundos)
    };

    let horas = total / 3600;
    let minutos = (total % 3600) / 60;
    let segs = total % 60;

    let mut saida = format!("{sinal}PT");
    if horas > 0 {
        saida.push_str(&format!("{horas}H"));
    }
    if minutos > 0 {
        saida.push_str(&format!("{minutos}M"));
    }
    if segs > 0 {
        saida.push_str(&format!("{segs}S"));
    }
    saida
}

/// Inverso de [`segundos_para_iso_duration`], restrito ao subconjunto PT que
/// esse formatador emite.
pub fn iso_duration_para_segundos(texto: &str) -> Option<i64> {
    let (sinal, resto) = match texto.strip_prefix('-') {
        Some(resto) => (-1, resto),
        None => (1, texto),
    };
    let resto = resto.strip_prefix("PT")?;
    if resto.is_empty() {
        return None;
    }

    let mut total = 0i64;
    let mut numero = String::new();
    for c in resto.chars() {
        if c.is_ascii_digit() {
            numero.push(c);
            continue;
        }
        let valor: i64 = numero.parse().ok()?;
        numero.clear();
        total += match c {
            'H' => valor * 3600,
            'M' => valor * 60,
            'S' => valor,
            _ => return None,
        };
    }
    if !numero.is_empty() {
        return None;
    }
    Some(sinal * total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_segundos() {
        assert_eq!(segundos_para_iso_duration(0), "PT0S");
    }

    #[test]
    fn componentes_zerados_sao_omitidos() {
        assert_eq!(segundos_para_iso_duration(3600), "PT1H");
        assert_eq!(segundos_para_iso_duration(60), "PT1M");
        assert_eq!(segundos_para_iso_duration(59), "PT59S");
        assert_eq!(segundos_para_iso_duration(3661), "PT1H1M1S");
    }

    #[test]
    fn horas_nao_viram_dias() {
        // 23 dias uteis x 8h
        assert_eq!(segundos_para_iso_duration(662_400), "PT184H");
        assert_eq!(segundos_para_iso_duration(90_000), "PT25H");
    }

    #[test]
    fn valores_negativos_ganham_sinal() {
        assert_eq!(segundos_para_iso_duration(-3600), "-PT1H");
    }

    #[test]
    fn ida_e_volta() {
        for segundos in [0, 1, 59, 60, 3599, 3600, 3661, 28_800, 662_400] {
            let texto = segundos_para_iso_duration(segundos);
            assert_eq!(iso_duration_para_segundos(&texto), Some(segundos), "{texto}");
        }
    }

    #[test]
    fn parse_rejeita_lixo() {
        assert_eq!(iso_duration_para_segundos("PT"), None);
        assert_eq!(iso_duration_para_segundos("8H"), None);
        assert_eq!(iso_duration_para_segundos("PT8X"), None);
        assert_eq!(iso_duration_para_segundos("PT8H30"), None);
    }
}
