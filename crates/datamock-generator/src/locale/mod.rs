//! Locale data pools.
//!
//! A [`Locale`] is a tree of string pools. Every node defaults to empty, so a
//! custom locale only needs the pools it overrides; consumers fall back to
//! [`Locale::en`] one field at a time through [`resolve`].

mod en;

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

/// Return `custom` when it has elements, `default` otherwise.
pub fn resolve<'a, T>(custom: &'a [T], default: &'a [T]) -> &'a [T] {
    if custom.is_empty() {
        default
    } else {
        custom
    }
}

/// [`resolve`] for string pools such as syllable alphabets.
pub fn resolve_str<'a>(custom: &'a str, default: &'a str) -> &'a str {
    if custom.is_empty() {
        default
    } else {
        custom
    }
}

/// Error loading a locale file.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Failed to read locale file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse locale YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub title: String,
    pub person: PersonLocale,
    pub internet: InternetLocale,
    pub word: WordLocale,
    pub syntax: SyntaxLocale,
    pub time: TimeLocale,
}

impl Locale {
    /// Built-in English locale.
    pub fn en() -> Arc<Locale> {
        static EN: OnceLock<Arc<Locale>> = OnceLock::new();
        Arc::clone(EN.get_or_init(|| Arc::new(en::build())))
    }

    /// Parse a locale from YAML. Missing pools stay empty.
    pub fn from_yaml(yaml: &str) -> Result<Self, LocaleError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a locale from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LocaleError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// Pools split by gender, with an optional gender-neutral pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderPools {
    pub general: Vec<String>,
    pub male: Vec<String>,
    pub female: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderLocale {
    pub binary: Vec<String>,
    pub pool: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTitleLocale {
    pub descriptor: Vec<String>,
    pub level: Vec<String>,
    pub job: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonLocale {
    pub first_name: GenderPools,
    pub middle_name: GenderPools,
    pub last_name: GenderPools,
    pub gender: GenderLocale,
    pub prefix: GenderPools,
    pub suffix: GenderPools,
    pub title: JobTitleLocale,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailLocale {
    pub free: Vec<String>,
    pub example: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainLocale {
    pub suffix: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetLocale {
    pub avatar: Vec<String>,
    pub email: EmailLocale,
    pub domain: DomainLocale,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordLocale {
    pub adjective: Vec<String>,
    pub adverb: Vec<String>,
    pub conjunction: Vec<String>,
    pub interjection: Vec<String>,
    pub noun: Vec<String>,
    pub preposition: Vec<String>,
    pub verb: Vec<String>,
}

/// Letters used to assemble lorem syllables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxLocale {
    pub consonants: String,
    pub vowels: String,
}

/// Full and abbreviated names, index 0 being the first month or Sunday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedUnits {
    pub names: Vec<String>,
    pub abbr: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeLocale {
    pub month: NamedUnits,
    pub weekday: NamedUnits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_custom() {
        let custom = vec!["a".to_string()];
        let default = vec!["b".to_string()];
        assert_eq!(resolve(&custom, &default), &custom[..]);
        assert_eq!(resolve(&[], &default), &default[..]);
        assert_eq!(resolve_str("", "xyz"), "xyz");
        assert_eq!(resolve_str("q", "xyz"), "q");
    }

    #[test]
    fn test_en_locale_is_shared_and_complete() {
        let a = Locale::en();
        let b = Locale::en();
        assert!(Arc::ptr_eq(&a, &b));

        assert_eq!(a.title, "English");
        assert!(!a.person.first_name.male.is_empty());
        assert!(!a.person.first_name.female.is_empty());
        assert!(!a.person.last_name.general.is_empty());
        assert_eq!(a.person.gender.binary, vec!["Female", "Male"]);
        assert!(!a.internet.email.free.is_empty());
        assert!(!a.internet.domain.suffix.is_empty());
        assert!(!a.word.noun.is_empty());
        assert!(!a.syntax.vowels.is_empty());
        assert_eq!(a.time.month.names.len(), 12);
        assert_eq!(a.time.month.abbr.len(), 12);
        assert_eq!(a.time.weekday.names.len(), 7);
        assert_eq!(a.time.weekday.abbr.len(), 7);
    }

    #[test]
    fn test_partial_yaml_locale() {
        let yaml = r#"
title: custom
syntax:
  consonants: xyz
time:
  month:
    names: [M1, M2, M3, M4, M5, M6, M7, M8, M9, M10, M11, M12]
"#;
        let locale = Locale::from_yaml(yaml).unwrap();
        assert_eq!(locale.title, "custom");
        assert_eq!(locale.syntax.consonants, "xyz");
        assert!(locale.syntax.vowels.is_empty());
        assert_eq!(locale.time.month.names[2], "M3");
        assert!(locale.time.month.abbr.is_empty());
        assert!(locale.person.first_name.male.is_empty());
    }
}
