pub mod bass_level;
pub mod resolver;
