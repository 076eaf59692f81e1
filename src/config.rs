// src/config.rs

/// Configuracao explicita da aplicacao, lida uma unica vez do ambiente na
/// subida do processo e carregada no AppState. Os services recebem os valores
/// como parametro; ninguem le variavel de ambiente depois daqui.
#[derive(Debug, Clone)]
pub struct Configs {
    pub api_port: u16,
    pub numero_maximo_de_batidas_no_dia: i64,
    pub tempo_minimo_de_almoco_minutos: i64,
}

impl Default for Configs {
    fn default() -> Self {
        Configs {
            api_port: 8080,
            numero_maximo_de_batidas_no_dia: 4,
            tempo_minimo_de_almoco_minutos: 60,
        }
    }
}

impl Configs {
    /// Carrega do ambiente, mantendo o default quando a variavel nao existe
    /// ou nao e um numero.
    pub fn from_env() -> Configs {
        let padrao = Configs::default();
        Configs {
            api_port: le_var("API_PORT", padrao.api_port),
            numero_maximo_de_batidas_no_dia: le_var(
                "NUMERO_MAXIMO_DE_BATIDAS_NO_DIA",
                padrao.numero_maximo_de_batidas_no_dia,
            ),
            tempo_minimo_de_almoco_minutos: le_var(
                "TEMPO_MINIMO_OBRIGATORIO_DE_ALMOCO",
                padrao.tempo_minimo_de_almoco_minutos,
            ),
        }
    }
}

fn le_var<T: std::str::FromStr>(nome: &str, padrao: T) -> T {
    std::env::var(nome)
        .ok()
        .and_then(|valor| valor.parse().ok())
        .unwrap_or(padrao)
}
