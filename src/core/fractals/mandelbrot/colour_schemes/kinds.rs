use std::str::FromStr;

use crate::core::errors::FractalError;

/// Named perceptually-uniform gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourScheme {
    #[default]
    Magma,
    Viridis,
    Plasma,
    Inferno,
    Cividis,
}

impl ColourScheme {
    pub const ALL: &'static [Self] = &[
        Self::Magma,
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Cividis,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Magma => "magma",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Cividis => "cividis",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Magma => "Magma",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Inferno => "Inferno",
            Self::Cividis => "Cividis",
        }
    }
}

impl FromStr for ColourScheme {
    type Err = FractalError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FractalError::UnknownColourScheme {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourScheme::ALL.first(), Some(&ColourScheme::default()));
    }

    #[test]
    fn parses_every_name_it_displays() {
        for &scheme in ColourScheme::ALL {
            assert_eq!(scheme.to_string().parse::<ColourScheme>(), Ok(scheme));
        }
    }

    #[test]
    fn parsing_ignores_case_and_surrounding_space() {
        assert_eq!(" Viridis ".parse::<ColourScheme>(), Ok(ColourScheme::Viridis));
        assert_eq!("INFERNO".parse::<ColourScheme>(), Ok(ColourScheme::Inferno));
    }

    #[test]
    fn unknown_names_are_rejected_with_the_offending_name() {
        assert_eq!(
            "jet".parse::<ColourScheme>(),
            Err(FractalError::UnknownColourScheme {
                name: "jet".to_string()
            })
        );
        assert!("".parse::<ColourScheme>().is_err());
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in ColourScheme::ALL.iter().enumerate() {
            for b in &ColourScheme::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
