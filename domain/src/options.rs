//! Answer customization options (Value Objects)
//!
//! Three fixed-choice options the student selects per submission. Each
//! option carries a stable kebab-case identifier (CLI and config files)
//! and the literal Arabic label embedded in the prompt and shown in the
//! form.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $default:ident,
        { $($variant:ident => ($id:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Stable identifier used on the CLI and in config files
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            /// Literal Arabic label embedded in the prompt
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// All choices, in form display order
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id | $label => Ok($name::$variant),)+
                    other => Err(DomainError::UnknownOption {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

option_enum!(
    /// Language the answer must be written in
    Language, "language", FormalArabic,
    {
        FormalArabic => ("arabic", "العربية الفصحى"),
        French => ("french", "الفرنسية"),
    }
);

option_enum!(
    /// Academic track of the Moroccan baccalaureate student
    Track, "track", SciencesMaths,
    {
        SciencesMaths => ("sciences-maths", "علوم رياضية"),
        SciencesExperimentales => ("sciences-exp", "علوم تجريبية"),
        LettresHumanites => ("lettres", "آداب وعلوم إنسانية"),
        TroncCommunScientifique => ("tronc-commun", "جدع مشترك علمي"),
    }
);

option_enum!(
    /// Desired explanation length
    Verbosity, "verbosity", Medium,
    {
        Short => ("short", "مختصر"),
        Medium => ("medium", "متوسط"),
        VeryDetailed => ("detailed", "مُفصَّل جداً"),
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_roundtrip() {
        for lang in Language::all() {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), *lang);
        }
        for track in Track::all() {
            assert_eq!(track.as_str().parse::<Track>().unwrap(), *track);
        }
        for verbosity in Verbosity::all() {
            assert_eq!(verbosity.as_str().parse::<Verbosity>().unwrap(), *verbosity);
        }
    }

    #[test]
    fn test_labels_parse_too() {
        assert_eq!("الفرنسية".parse::<Language>().unwrap(), Language::French);
        assert_eq!("علوم تجريبية".parse::<Track>().unwrap(), Track::SciencesExperimentales);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownOption {
                kind: "language",
                value: "klingon".to_string()
            }
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Language::default(), Language::FormalArabic);
        assert_eq!(Track::default(), Track::SciencesMaths);
        assert_eq!(Verbosity::default(), Verbosity::Medium);
    }

    #[test]
    fn test_display_is_arabic_label() {
        assert_eq!(Language::French.to_string(), "الفرنسية");
        assert_eq!(Verbosity::VeryDetailed.to_string(), "مُفصَّل جداً");
    }

    #[test]
    fn test_track_count_is_fixed() {
        assert_eq!(Track::all().len(), 4);
    }
}
