use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MandelbrotColourMapKinds {
    #[default]
    Polynomial,
    Fire,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Polynomial, Self::Fire];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Polynomial => "Polynomial gradient",
            Self::Fire => "Fire gradient",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
