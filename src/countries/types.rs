//! # Country Records
//!
//! Wire types for the REST Countries dataset. The same shape is used
//! throughout the app: the controller keeps these values as-is and the
//! TUI renders them directly.
//!
//! Fields the `/all?fields=` projection leaves out (`timezones`,
//! `currencies`, `continents`) default to empty so that a record from
//! either endpoint renders the same way.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    pub flags: Flags,
    #[serde(default)]
    pub cca2: String,
    pub cca3: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub continents: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Country {
    /// The first listed capital, if any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital
            .as_ref()
            .and_then(|capitals| capitals.first())
            .map(String::as_str)
    }

    /// Language display names in code order.
    pub fn language_names(&self) -> Vec<&str> {
        self.languages
            .as_ref()
            .map(|langs| langs.values().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// `cca3` codes of neighbouring countries. Empty for islands and for
    /// records fetched without the field.
    pub fn border_codes(&self) -> &[String] {
        self.borders.as_deref().unwrap_or_default()
    }

    /// Flag description, falling back to "Flag of <name>".
    pub fn flag_description(&self) -> String {
        match self.flags.alt.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt.to_string(),
            _ => format!("Flag of {}", self.name.common),
        }
    }

    /// "Region • Subregion", or just the region when there is no subregion.
    pub fn region_line(&self) -> String {
        match self.subregion.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{} • {}", self.region, sub),
            _ => self.region.clone(),
        }
    }
}
