use clap::ValueEnum;

/// Standard difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub fn rows(self) -> usize {
        match self {
            Level::Easy => 9,
            Level::Medium => 15,
            Level::Hard => 16,
        }
    }

    pub fn cols(self) -> usize {
        match self {
            Level::Easy => 9,
            Level::Medium => 15,
            Level::Hard => 30,
        }
    }

    pub fn mines(self) -> usize {
        match self {
            Level::Easy => 10,
            Level::Medium => 40,
            Level::Hard => 99,
        }
    }
}
