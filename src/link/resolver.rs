use super::bass_level::BassLevel;
use thiserror::Error;
use url::form_urlencoded;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("ID da música é obrigatório")]
    MissingId,
}

/// Percent-encode do id para uso como valor de query string.
/// O id é opaco: pode chegar com espaço, `&` ou qualquer outro byte,
/// e nada disso pode vazar cru para a URL.
fn encode_id(id: &str) -> String {
    form_urlencoded::byte_serialize(id.as_bytes()).collect()
}

/// Link de reprodução normal, sem grave.
pub fn play_link(base: &str, id: &str) -> String {
    format!("{}/play-client?id={}", base, encode_id(id))
}

/// Link de reprodução com grave, no nível dado.
pub fn bass_link(base: &str, id: &str, level: BassLevel) -> String {
    format!("{}/bass-client?id={}&level={}", base, encode_id(id), level.name())
}

/// Resolve um trio id/bass/level para a URL de reprodução na API upstream.
///
/// O modo grave só é ativado quando `bass` é exatamente `"true"` E um código
/// de nível foi informado; qualquer outra combinação cai no link normal.
/// Função pura: o mesmo trio resolve sempre para a mesma URL.
pub fn resolve_play_url(
    base: &str,
    id: &str,
    bass: Option<&str>,
    level: Option<&str>,
) -> Result<String, ResolveError> {
    if id.is_empty() {
        return Err(ResolveError::MissingId);
    }

    match (bass, level) {
        (Some("true"), Some(code)) => Ok(bass_link(base, id, BassLevel::from_code(code))),
        _ => Ok(play_link(base, id)),
    }
}
