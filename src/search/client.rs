use crate::config::AppConfig;
use crate::track::track::Track;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("falha na requisição de busca: {0}")]
    Request(#[from] reqwest::Error),

    #[error("erro na API: {0}")]
    Status(u16),

    #[error("resposta inválida da API: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cliente da API de música upstream. Guarda o reqwest::Client para
/// reaproveitar conexões entre requisições.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &AppConfig) -> UpstreamClient {
        UpstreamClient {
            http: reqwest::Client::new(),
            base_url: config.upstream_api.clone(),
        }
    }

    /// Busca músicas na API upstream: `GET <base>/search?src=<query>&limit=<n>`.
    /// Status não-2xx é erro explícito; a resposta deve ser um array JSON.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Track>, SearchError> {
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("src", query), ("limit", &limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let tracks: Vec<Track> = serde_json::from_str(&body)?;

        Ok(tracks)
    }
}
