#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKinds {
    #[default]
    Classic,
    Fire,
    Ocean,
    Twilight,
    Rainbow,
    Monochrome,
    CoolWarm,
    Ember,
}

impl PaletteKinds {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Fire,
        Self::Ocean,
        Self::Twilight,
        Self::Rainbow,
        Self::Monochrome,
        Self::CoolWarm,
        Self::Ember,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Twilight => "Twilight",
            Self::Rainbow => "Rainbow",
            Self::Monochrome => "Monochrome",
            Self::CoolWarm => "Cool-Warm",
            Self::Ember => "Ember",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Fire => "fire",
            Self::Ocean => "ocean",
            Self::Twilight => "twilight",
            Self::Rainbow => "rainbow",
            Self::Monochrome => "monochrome",
            Self::CoolWarm => "coolwarm",
            Self::Ember => "ember",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);

        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);

        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
