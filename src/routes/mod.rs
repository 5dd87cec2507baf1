use rocket::http::Status;
use rocket::response::content::{RawCss, RawHtml};
use rocket::response::status::Custom;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::State;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::link::resolver::resolve_play_url;
use crate::render;
use crate::search::client::UpstreamClient;
use crate::track::track::Track;

/// Corpo JSON das respostas de erro da API.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// Página principal. Com `src` na query, busca na API upstream e renderiza
/// os cards no servidor; sem `src`, só a página estática.
#[get("/?<src>&<limit>")]
pub async fn index(
    src: Option<&str>,
    limit: Option<u32>,
    config: &State<AppConfig>,
    client: &State<UpstreamClient>,
) -> RawHtml<String> {
    let query = src.map(str::trim).unwrap_or("");
    if query.is_empty() {
        return RawHtml(render::render_page("", ""));
    }

    let limit = limit.unwrap_or(config.search_limit);

    let results = match client.search(query, limit).await {
        Ok(tracks) if tracks.is_empty() => {
            render::render_no_results("Nenhuma música encontrada", "Tente buscar com outro termo")
        }
        Ok(tracks) => render::render_results(&tracks, query, &config.upstream_api),
        Err(err) => {
            eprintln!("busca: erro: {}", err);
            render::render_no_results("Erro ao buscar", "Verifique sua conexão e tente novamente")
        }
    };

    RawHtml(render::render_page(&results, query))
}

#[get("/ui.css")]
pub fn stylesheet() -> RawCss<&'static str> {
    RawCss(include_str!("../ui.css"))
}

/// Resolve id/bass/level para a URL de reprodução upstream e redireciona.
///
/// 308 preserva o método da requisição e sinaliza que o mapeamento é
/// estável; id ausente ou vazio é 400 com o erro em JSON, nunca redirect.
#[get("/play?<id>&<bass>&<level>")]
pub fn play(
    id: Option<&str>,
    bass: Option<&str>,
    level: Option<&str>,
    config: &State<AppConfig>,
) -> Result<Redirect, Custom<Json<ApiError>>> {
    match resolve_play_url(&config.upstream_api, id.unwrap_or(""), bass, level) {
        Ok(url) => Ok(Redirect::permanent(url)),
        Err(err) => Err(Custom(
            Status::BadRequest,
            Json(ApiError {
                error: err.to_string(),
            }),
        )),
    }
}

/// Proxy da busca upstream, com a mesma interface `src`/`limit`.
#[get("/search?<src>&<limit>")]
pub async fn search(
    src: &str,
    limit: Option<u32>,
    config: &State<AppConfig>,
    client: &State<UpstreamClient>,
) -> Result<Json<Vec<Track>>, Custom<Json<ApiError>>> {
    match client.search(src, limit.unwrap_or(config.search_limit)).await {
        Ok(tracks) => Ok(Json(tracks)),
        Err(err) => {
            eprintln!("busca: erro: {}", err);
            Err(Custom(
                Status::BadGateway,
                Json(ApiError {
                    error: "Erro ao buscar".to_string(),
                }),
            ))
        }
    }
}
