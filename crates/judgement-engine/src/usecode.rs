//! Annexed-table use codes: vocabulary, prefix matching, display names
//!
//! Use codes are hierarchical, underscore-segmented identifiers from the
//! Order's annexed table, e.g. "06_i_2" (hospital class) or "16_i"
//! (composite-use with specified occupancies). Every rule guard admits a
//! building through [`use_code_matches`], a plain prefix test over a closed,
//! controlled vocabulary — no normalization, no case folding.

/// Prefixes denoting a composite-use (mixed-tenant) building.
///
/// "16_2" and "16_3" share the leading digits but are distinct single-use
/// categories (underground malls), not composites — hence the full segment
/// prefixes here rather than "16".
pub const COMPOSITE_USE_PREFIXES: &[&str] = &["16_i", "16_ro"];

/// Whether `code` starts with any of `prefixes`.
///
/// The sole admission test used by every rule guard. `None` never matches.
pub fn use_code_matches(code: Option<&str>, prefixes: &[&str]) -> bool {
    match code {
        Some(code) => prefixes.iter().any(|prefix| code.starts_with(prefix)),
        None => false,
    }
}

/// Whether `code` classifies a composite-use building, triggering
/// per-tenant decomposition.
pub fn is_composite_use(code: &str) -> bool {
    use_code_matches(Some(code), COMPOSITE_USE_PREFIXES)
}

/// Display-name lookup for use codes. Injected into the engine; used only
/// for message text, never for rule logic.
pub trait UseDisplay {
    fn display_name(&self, code: &str) -> String;
}

/// Canonical code vocabulary with display labels.
pub const USE_TABLE: &[(&str, &str)] = &[
    ("01_i", "theater, movie theater, or performance hall"),
    ("01_ro", "public hall or assembly hall"),
    ("02_i", "cabaret, cafe, or nightclub"),
    ("02_ro", "game hall or dance hall"),
    ("02_ha", "adult entertainment premises"),
    ("02_ni", "karaoke box or compartmented amusement facility"),
    ("03_i", "waiting hall or entertainment restaurant"),
    ("03_ro", "restaurant or eating house"),
    ("04", "department store, market, or retail store"),
    ("05_i", "hotel, inn, or lodging house"),
    ("05_ro", "apartment house, dormitory, or boarding house"),
    ("06_i_1", "hospital providing emergency or surgical inpatient care"),
    ("06_i_2", "other hospital or clinic with inpatient beds"),
    ("06_i_3", "clinic with overnight beds"),
    ("06_i_4", "clinic without overnight beds"),
    ("06_ro", "residential care facility"),
    ("06_ha", "day-service or other welfare facility"),
    ("06_ni", "kindergarten or special-needs school"),
    ("07", "school"),
    ("08", "library, museum, or art gallery"),
    ("09_i", "steam bath or hot-air bath facility"),
    ("09_ro", "other public bathhouse"),
    ("10", "station or terminal waiting area"),
    ("11", "shrine, temple, or church"),
    ("12_i", "factory or workshop"),
    ("12_ro", "movie or broadcast studio"),
    ("13_i", "garage or parking structure"),
    ("13_ro", "aircraft or rotorcraft hangar"),
    ("14", "warehouse"),
    ("15", "office or other business premises"),
    ("16_i", "composite-use building containing specified uses"),
    ("16_ro", "other composite-use building"),
    ("16_2", "underground shopping mall"),
    ("16_3", "building connected to an underground mall"),
    ("17", "designated cultural property"),
    ("18", "arcade"),
    ("19", "forest"),
    ("20", "stored vessel or vehicle"),
];

/// Default [`UseDisplay`] backed by the static annexed table. Unknown codes
/// fall back to the raw code.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnexedUseTable;

impl UseDisplay for AnnexedUseTable {
    fn display_name(&self, code: &str) -> String {
        USE_TABLE
            .iter()
            .find(|(table_code, _)| *table_code == code)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn none_never_matches() {
        assert!(!use_code_matches(None, &["01"]));
        assert!(!use_code_matches(None, &[]));
    }

    #[test]
    fn plain_prefix_semantics() {
        // "11" is covered by the shorter prefix "1"...
        assert!(use_code_matches(Some("11"), &["1"]));
        // ...but "2" is not covered by "11".
        assert!(!use_code_matches(Some("2"), &["11"]));
        assert!(!use_code_matches(Some("1"), &["11"]));
    }

    #[test]
    fn zero_padding_keeps_sibling_categories_apart() {
        // (1) theaters vs (11) shrines: the canonical vocabulary is
        // zero-padded, so the category prefixes never collide.
        assert!(use_code_matches(Some("01_i"), &["01"]));
        assert!(!use_code_matches(Some("11"), &["01"]));
        assert!(!use_code_matches(Some("01_i"), &["11"]));
        // (6)(i)(2) is admitted by the (6) and (6)(i) groups.
        assert!(use_code_matches(Some("06_i_2"), &["06"]));
        assert!(use_code_matches(Some("06_i_2"), &["06_i"]));
        assert!(!use_code_matches(Some("06_ro"), &["06_i"]));
    }

    #[test]
    fn composite_prefixes_exclude_underground_malls() {
        assert!(is_composite_use("16_i"));
        assert!(is_composite_use("16_ro"));
        assert!(!is_composite_use("16_2"));
        assert!(!is_composite_use("16_3"));
        assert!(!is_composite_use("15"));
    }

    #[test]
    fn every_vocabulary_code_matches_itself_and_only_its_ancestors() {
        for (code, _) in USE_TABLE {
            assert!(use_code_matches(Some(code), &[code]), "{code} vs itself");
            for (other, _) in USE_TABLE {
                let expected = code.starts_with(other);
                assert_eq!(
                    use_code_matches(Some(code), &[other]),
                    expected,
                    "{code} against prefix {other}"
                );
            }
        }
    }

    #[test]
    fn display_name_falls_back_to_the_raw_code() {
        let table = AnnexedUseTable;
        assert_eq!(
            table.display_name("04"),
            "department store, market, or retail store"
        );
        assert_eq!(table.display_name("99_zz"), "99_zz");
    }

    proptest! {
        #[test]
        fn matching_agrees_with_starts_with(
            code in "[0-9_a-z]{0,8}",
            prefixes in proptest::collection::vec("[0-9_a-z]{0,4}", 0..4),
        ) {
            let refs: Vec<&str> = prefixes.iter().map(String::as_str).collect();
            let expected = refs.iter().any(|p| code.starts_with(p));
            prop_assert_eq!(use_code_matches(Some(&code), &refs), expected);
        }
    }
}
