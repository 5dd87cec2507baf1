use crate::link::bass_level::BassLevel;
use crate::link::resolver::{bass_link, play_link};
use crate::track::track::Track;

const PAGE_TEMPLATE: &str = include_str!("../ui.html");

/// Escapa texto para ir dentro de um elemento HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapa texto para ir dentro de um valor de atributo HTML.
pub fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Gera o HTML de um card de música.
///
/// Os links dos botões saem todos do módulo `link`; o botão de grave usa o
/// nível médio, que é o padrão da plataforma. O JS da página só copia o que
/// está em `data-link`, nunca monta URL sozinho.
pub fn render_music_card(track: &Track, index: usize, base: &str) -> String {
    let id = &track.id;
    let title = track.display_title();
    let artist = track.display_artist();
    let thumb = track.thumb_url();
    let rank = index + 1;

    let open_link = play_link(base, id);
    let copy_bass_link = bass_link(base, id, BassLevel::Medium);

    let duration_html = match track.duration_view.as_deref() {
        Some(d) if !d.is_empty() => {
            format!("<p class=\"music-duration\">{}</p>", escape_html(d))
        }
        _ => String::new(),
    };

    format!(
        concat!(
            "<div class=\"music-card\" data-id=\"{id}\">",
            "<div class=\"music-card-left\">",
            "<div class=\"music-rank\">#{rank}</div>",
            "<a class=\"music-cover\" href=\"{open}\" target=\"_blank\" rel=\"noopener\">",
            "<img src=\"{thumb}\" alt=\"{title_attr}\">",
            "</a>",
            "<div class=\"music-info\">",
            "<h4 class=\"music-title\">{title}</h4>",
            "<p class=\"music-artist\">{artist}</p>",
            "{duration}",
            "</div>",
            "</div>",
            "<div class=\"music-card-right\">",
            "<a class=\"action-btn\" href=\"{open}\" target=\"_blank\" rel=\"noopener\" title=\"Abrir música\">Abrir</a>",
            "<button class=\"action-btn\" data-link=\"{bass}\" data-copied=\"Link com grave copiado!\" title=\"Copiar link com grave\">Grave</button>",
            "<button class=\"action-btn\" data-link=\"{open}\" data-copied=\"Link da música copiado!\" title=\"Copiar link\">Copiar</button>",
            "</div>",
            "</div>"
        ),
        id = escape_attr(id),
        rank = rank,
        open = escape_attr(&open_link),
        bass = escape_attr(&copy_bass_link),
        thumb = escape_attr(&thumb),
        title_attr = escape_attr(title),
        title = escape_html(title),
        artist = escape_html(artist),
        duration = duration_html,
    )
}

/// Linha "N música(s) encontrada(s)" com a concordância certa.
pub fn results_info(count: usize, query: &str) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!(
        "{} música{} encontrada{} para \"{}\"",
        count,
        plural,
        plural,
        escape_html(query)
    )
}

pub fn render_results(tracks: &[Track], query: &str, base: &str) -> String {
    let mut cards = String::new();
    for (index, track) in tracks.iter().enumerate() {
        cards.push_str(&render_music_card(track, index, base));
    }

    format!(
        concat!(
            "<section class=\"search-results\">",
            "<p class=\"search-results-info\">{info}</p>",
            "<div class=\"music-list\">{cards}</div>",
            "</section>"
        ),
        info = results_info(tracks.len(), query),
        cards = cards,
    )
}

pub fn render_no_results(title: &str, hint: &str) -> String {
    format!(
        concat!(
            "<section class=\"no-results\">",
            "<h4>{title}</h4>",
            "<p>{hint}</p>",
            "</section>"
        ),
        title = escape_html(title),
        hint = escape_html(hint),
    )
}

/// Monta a página completa substituindo os placeholders do template.
pub fn render_page(results: &str, query: &str) -> String {
    PAGE_TEMPLATE
        .replace("<!-- RESULTS -->", results)
        .replace("{{QUERY}}", &escape_attr(query))
}
