use serde::{Deserialize, Serialize};

/// Uma música retornada pela busca na API upstream.
/// Só o `id` é garantido; o resto pode faltar dependendo da fonte.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Track {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default, rename = "richThumb")]
    pub rich_thumb: Option<String>,

    #[serde(default)]
    pub duration_view: Option<String>,
}

impl Track {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Sem título",
        }
    }

    pub fn display_artist(&self) -> &str {
        match self.author.as_deref() {
            Some(a) if !a.is_empty() => a,
            _ => "Artista desconhecido",
        }
    }

    /// Thumbnail da música; quando a API não manda uma, cai na capa do YouTube.
    pub fn thumb_url(&self) -> String {
        match self.rich_thumb.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => format!("https://img.youtube.com/vi/{}/mqdefault.jpg", self.id),
        }
    }
}
