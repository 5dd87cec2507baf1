use fantasy_music::link::bass_level::BassLevel;
use fantasy_music::link::resolver::{bass_link, play_link, resolve_play_url, ResolveError};

const BASE: &str = "https://api-music.fantasyresources.net";

#[test]
fn resolve_without_bass_gives_play_link() {
    let url = resolve_play_url(BASE, "abc123", None, None).unwrap();
    assert_eq!(url, format!("{}/play-client?id=abc123", BASE));
}

#[test]
fn resolve_with_bass_and_level_gives_bass_link() {
    let url = resolve_play_url(BASE, "abc123", Some("true"), Some("3")).unwrap();
    assert_eq!(url, format!("{}/bass-client?id=abc123&level=heavy", BASE));
}

#[test]
fn resolve_level_100_gives_oloko() {
    // decisão consolidada: a tabela inclui o tier extra 100 -> oloko
    let url = resolve_play_url(BASE, "abc123", Some("true"), Some("100")).unwrap();
    assert!(url.contains("level=oloko"));
}

#[test]
fn resolve_bass_without_level_falls_back_to_play_link() {
    // grave exige flag E nível; sem nível cai no link normal
    let url = resolve_play_url(BASE, "abc123", Some("true"), None).unwrap();
    assert_eq!(url, format!("{}/play-client?id=abc123", BASE));
    assert!(!url.contains("bass"));
    assert!(!url.contains("level"));
}

#[test]
fn resolve_bass_flag_must_be_exactly_true() {
    // qualquer valor diferente da string "true" não ativa o modo grave
    for flag in ["TRUE", "True", "1", "yes", ""] {
        let url = resolve_play_url(BASE, "abc123", Some(flag), Some("3")).unwrap();
        assert_eq!(url, format!("{}/play-client?id=abc123", BASE));
    }
}

#[test]
fn resolve_missing_id_is_an_error() {
    // id vazio nunca resolve, independente dos outros parâmetros
    assert_eq!(
        resolve_play_url(BASE, "", None, None),
        Err(ResolveError::MissingId)
    );
    assert_eq!(
        resolve_play_url(BASE, "", Some("true"), Some("3")),
        Err(ResolveError::MissingId)
    );
    assert_eq!(
        ResolveError::MissingId.to_string(),
        "ID da música é obrigatório"
    );
}

#[test]
fn resolve_is_pure() {
    // mesmo trio, mesma URL, sempre
    let first = resolve_play_url(BASE, "xyz", Some("true"), Some("4")).unwrap();
    let second = resolve_play_url(BASE, "xyz", Some("true"), Some("4")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bass_level_known_codes() {
    assert_eq!(BassLevel::from_code("1"), BassLevel::Light);
    assert_eq!(BassLevel::from_code("2"), BassLevel::Medium);
    assert_eq!(BassLevel::from_code("3"), BassLevel::Heavy);
    assert_eq!(BassLevel::from_code("4"), BassLevel::Extreme);
    assert_eq!(BassLevel::from_code("100"), BassLevel::Oloko);
}

#[test]
fn bass_level_unknown_codes_default_to_medium() {
    // política permissiva de propósito: código desconhecido vira medium
    for code in ["0", "5", "99", "abc", ""] {
        assert_eq!(BassLevel::from_code(code), BassLevel::Medium);
    }
}

#[test]
fn link_builders_encode_the_id() {
    // o id é opaco: espaço, '&' e afins não podem vazar crus para a query
    assert_eq!(
        play_link(BASE, "a b"),
        format!("{}/play-client?id=a+b", BASE)
    );
    assert_eq!(
        play_link(BASE, "a&b"),
        format!("{}/play-client?id=a%26b", BASE)
    );
    assert_eq!(
        bass_link(BASE, "a?b=c", BassLevel::Heavy),
        format!("{}/bass-client?id=a%3Fb%3Dc&level=heavy", BASE)
    );
}

#[test]
fn resolve_encoded_id_still_round_trips() {
    // id com '&' resolve para uma URL cujo id continua inteiro
    let url = resolve_play_url(BASE, "a&b", None, None).unwrap();
    assert!(url.ends_with("play-client?id=a%26b"));
    assert!(!url.ends_with("id=a&b"));
}

#[test]
fn link_builders_agree_with_resolver() {
    assert_eq!(
        play_link(BASE, "id1"),
        resolve_play_url(BASE, "id1", None, None).unwrap()
    );
    assert_eq!(
        bass_link(BASE, "id1", BassLevel::Heavy),
        resolve_play_url(BASE, "id1", Some("true"), Some("3")).unwrap()
    );
}
