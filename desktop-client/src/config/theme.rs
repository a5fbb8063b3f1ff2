use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ThemeName {
    Classic,
    Midnight,
    Neon,
    Desert,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Classic,
        ThemeName::Midnight,
        ThemeName::Neon,
        ThemeName::Desert,
    ];

    pub fn next(self) -> ThemeName {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Classic => "Classic",
            ThemeName::Midnight => "Midnight",
            ThemeName::Neon => "Neon",
            ThemeName::Desert => "Desert",
        }
    }
}
