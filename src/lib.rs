#[macro_use]
extern crate rocket;

pub mod config;
pub mod link;
pub mod render;
pub mod routes;
pub mod search;
pub mod track;

use config::AppConfig;
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use search::client::UpstreamClient;

/// Monta a instância do Rocket com a configuração padrão
/// (Rocket.toml / variáveis ROCKET_*).
pub fn build_rocket() -> Rocket<Build> {
    build_rocket_from(rocket::Config::figment())
}

/// Variante com o figment injetado; os testes usam isso para apontar a
/// `upstream_api` para onde quiserem.
pub fn build_rocket_from(figment: Figment) -> Rocket<Build> {
    let rocket = rocket::custom(figment);

    let config: AppConfig = rocket
        .figment()
        .extract()
        .expect("falha ao ler a configuração");
    let client = UpstreamClient::new(&config);

    rocket
        .manage(config)
        .manage(client)
        .mount("/", routes![routes::index, routes::stylesheet])
        .mount("/api", routes![routes::play, routes::search])
}
