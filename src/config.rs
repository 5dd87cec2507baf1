use serde::Deserialize;

pub const DEFAULT_UPSTREAM_API: &str = "https://api-music.fantasyresources.net";
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Configuração da aplicação, extraída do figment do Rocket
/// (Rocket.toml ou variáveis ROCKET_*).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL base da API de música upstream, sem barra no final.
    pub upstream_api: String,
    /// Limite de resultados usado quando a busca não informa um.
    pub search_limit: u32,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            upstream_api: DEFAULT_UPSTREAM_API.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}
