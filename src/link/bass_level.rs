use std::fmt::Display;

/// Intensidade do efeito de grave aplicado na reprodução.
/// Os códigos `1`-`4` são os níveis oficiais; `100` é o tier extra informal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BassLevel {
    Light,
    Medium,
    Heavy,
    Extreme,
    Oloko,
}

impl BassLevel {
    /// Converte o código recebido na query string para um nível.
    /// Códigos desconhecidos caem em `Medium` de propósito, não é bug.
    pub fn from_code(code: &str) -> BassLevel {
        match code {
            "1" => BassLevel::Light,
            "2" => BassLevel::Medium,
            "3" => BassLevel::Heavy,
            "4" => BassLevel::Extreme,
            "100" => BassLevel::Oloko,
            _ => BassLevel::Medium,
        }
    }

    /// Nome do nível conforme a API upstream espera no parâmetro `level`.
    pub fn name(self) -> &'static str {
        match self {
            BassLevel::Light => "light",
            BassLevel::Medium => "medium",
            BassLevel::Heavy => "heavy",
            BassLevel::Extreme => "extreme",
            BassLevel::Oloko => "oloko",
        }
    }
}

impl Display for BassLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
