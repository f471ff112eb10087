//! Alphabetical ordering and identity checks for country lists.
//!
//! Names are compared on a folded key first (lower-cased, Latin diacritics
//! removed) so that "Åland Islands" sorts with the A's and "Curaçao" before
//! "Cyprus". Ties fall back to the raw name to keep the order total.

use std::cmp::Ordering;
use std::collections::HashSet;

use log::warn;

use crate::countries::Country;

/// Compares two display names the way a reader expects an index to be ordered.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

/// Sorts countries by `name.common`, ascending.
pub fn sort_countries(countries: &mut [Country]) {
    countries.sort_by(|a, b| compare_names(&a.name.common, &b.name.common));
}

/// Drops later records whose `cca3` was already seen. Order is preserved.
pub fn dedupe_by_code(countries: Vec<Country>) -> Vec<Country> {
    let mut seen = HashSet::with_capacity(countries.len());
    let total = countries.len();
    let unique: Vec<Country> = countries
        .into_iter()
        .filter(|c| seen.insert(c.cca3.clone()))
        .collect();
    if unique.len() != total {
        warn!(
            "Dropped {} countries with duplicate cca3 codes",
            total - unique.len()
        );
    }
    unique
}

/// Sort + de-duplicate: the shape every list takes before the UI sees it.
pub fn normalize(countries: Vec<Country>) -> Vec<Country> {
    let mut countries = dedupe_by_code(countries);
    sort_countries(&mut countries);
    countries
}

fn fold_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match fold_char(c) {
            Some(folded) => key.push_str(folded),
            None => key.push(c),
        }
    }
    key
}

fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ł' | 'ľ' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::country;

    #[test]
    fn test_compare_names_ignores_case_and_accents() {
        assert_eq!(compare_names("Åland Islands", "Albania"), Ordering::Less);
        assert_eq!(compare_names("Curaçao", "Cyprus"), Ordering::Less);
        assert_eq!(compare_names("réunion", "Romania"), Ordering::Less);
        assert_eq!(compare_names("Zambia", "zambia"), "Zambia".cmp("zambia"));
    }

    #[test]
    fn test_sort_countries_matches_compare_names() {
        let mut countries = vec![
            country("Zimbabwe", "ZWE"),
            country("Åland Islands", "ALA"),
            country("Afghanistan", "AFG"),
            country("Brazil", "BRA"),
        ];
        sort_countries(&mut countries);
        let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Afghanistan", "Åland Islands", "Brazil", "Zimbabwe"]);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let mut dup = country("France (dup)", "FRA");
        dup.population = 1;
        let countries = vec![country("France", "FRA"), country("Chile", "CHL"), dup];
        let unique = dedupe_by_code(countries);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].name.common, "France");
        assert_eq!(unique[1].cca3, "CHL");
    }
}
