//! Search-key normalization for chemical, polymer and solvent names.
//!
//! Names are entered by hand and arrive as `"Methanol (HPLC grade)"`,
//! `"methanol(hplc-grade)"` or `"METHANOL, HPLC GRADE"`. Every name record
//! stores the raw text next to a search key produced here, and lookups compare
//! search keys only.

/// Characters deleted from a name wherever they occur.
pub const REMOVED_CHARS: &[char] =
    &[':', '{', '}', '-', ' ', '(', ')', '[', ']', ',', '\'', '"'];

/// Leading pair of a right single quote (U+2019) whose UTF-8 bytes were
/// decoded as Windows-1252 (`â€™`). Present in legacy imports.
const LEGACY_QUOTE_LEAD: (char, char) = ('\u{e2}', '\u{20ac}');

/// Trailing character of the legacy sequence, dropped only right after a lead.
const LEGACY_QUOTE_TAIL: char = '\u{2122}';

/// Derive the search key for a raw name.
///
/// Lowercases, drops [`REMOVED_CHARS`] and the legacy mis-encoded apostrophe,
/// and trims surrounding whitespace. Every other character is kept in place.
/// Total and idempotent: `make_name_searchable(&make_name_searchable(s))`
/// equals `make_name_searchable(s)`.
#[must_use]
pub fn make_name_searchable(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut after_legacy_lead = false;

    for c in lowered.chars() {
        if REMOVED_CHARS.contains(&c) {
            continue;
        }
        if c == LEGACY_QUOTE_LEAD.1 && out.ends_with(LEGACY_QUOTE_LEAD.0) {
            out.pop();
            after_legacy_lead = true;
            continue;
        }
        if c == LEGACY_QUOTE_TAIL && after_legacy_lead {
            after_legacy_lead = false;
            continue;
        }
        after_legacy_lead = false;
        out.push(c);
    }

    // Removal can expose whitespace other than ' ' at either end ("( \tx").
    let trimmed = out.trim();
    if trimmed.len() == out.len() { out } else { trimmed.to_owned() }
}

/// Short alias for [`make_name_searchable`].
#[must_use]
pub fn normalize(raw: &str) -> String {
    make_name_searchable(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(&str, &str)] = &[
        ("colon:remove", "colonremove"),
        ("Upper_Case", "upper_case"),
        ("{bracket}", "bracket"),
        ("space exists", "spaceexists"),
        ("(parenthesis)", "parenthesis"),
        ("[brackets]", "brackets"),
        ("comma,", "comma"),
        ("dash-", "dash"),
        ("'single quote", "singlequote"),
        ("\"doublequote\"", "doublequote"),
        ("Ma{n}y_di[]fferent -'iss:\"(u)e-s", "many_differentissues"),
    ];

    const SAMPLES: &[&str] = &[
        "",
        " ",
        "Methanol (HPLC grade)",
        "  N,N-Dimethylformamide  ",
        "poly(methyl methacrylate)",
        "1,4-Dioxane",
        "\t( \tx",
        "Tetrahydrofuran\n",
        "ÄTHANOL",
        "İstanbul",
        "caf\u{e9} au lait",
        "Dimethyl sulfoxide \u{e2}\u{20ac}\u{2122}s",
        "\u{e2}\u{e2}\u{20ac}\u{20ac}\u{2122}",
        "\u{e2}-\u{20ac}x",
        "\u{c2}\u{20ac}",
        "already_normalized",
        "tm\u{2122}",
    ];

    #[test]
    fn known_names_normalize_exactly() {
        for (raw, expected) in CASES {
            assert_eq!(make_name_searchable(raw), *expected, "input: {raw:?}");
        }
    }

    #[test]
    fn empty_name_stays_empty() {
        assert_eq!(make_name_searchable(""), "");
        assert_eq!(make_name_searchable("   "), "");
    }

    #[test]
    fn normalize_alias_matches() {
        for (raw, _) in CASES {
            assert_eq!(normalize(raw), make_name_searchable(raw));
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in SAMPLES.iter().chain(CASES.iter().map(|(raw, _)| raw)) {
            let once = make_name_searchable(raw);
            assert_eq!(make_name_searchable(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn output_has_no_removed_characters() {
        for raw in SAMPLES.iter().chain(CASES.iter().map(|(raw, _)| raw)) {
            let key = make_name_searchable(raw);
            assert!(!key.contains(REMOVED_CHARS), "{key:?} from {raw:?}");
        }
    }

    #[test]
    fn output_has_no_uppercase() {
        for raw in SAMPLES {
            let key = make_name_searchable(raw);
            assert!(!key.chars().any(char::is_uppercase), "{key:?} from {raw:?}");
        }
    }

    #[test]
    fn other_characters_are_kept_in_order() {
        assert_eq!(make_name_searchable("a_b.c/d;e"), "a_b.c/d;e");
        assert_eq!(make_name_searchable("aa--bb"), "aabb");
        assert_eq!(make_name_searchable("caf\u{e9} au lait"), "caf\u{e9}aulait");
        assert_eq!(make_name_searchable("line\tbreak"), "line\tbreak");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(make_name_searchable("  Toluene \n"), "toluene");
        assert_eq!(make_name_searchable("\t( \tx"), "x");
    }

    #[test]
    fn legacy_apostrophe_is_removed() {
        assert_eq!(make_name_searchable("Ringer\u{e2}\u{20ac}\u{2122}s solution"), "ringerssolution");
        assert_eq!(make_name_searchable("Ringer\u{e2}\u{20ac}'s"), "ringers");
        assert_eq!(make_name_searchable("\u{c2}\u{20ac}"), "");
        assert_eq!(make_name_searchable("\u{e2}-\u{20ac}x"), "x");
    }

    #[test]
    fn lone_legacy_characters_are_kept() {
        assert_eq!(make_name_searchable("p\u{e2}te"), "p\u{e2}te");
        assert_eq!(make_name_searchable("\u{20ac}5"), "\u{20ac}5");
        assert_eq!(make_name_searchable("tm\u{2122}"), "tm\u{2122}");
    }

    #[test]
    fn case_and_spacing_variants_share_a_key() {
        let key = make_name_searchable("Methanol (HPLC grade)");
        assert_eq!(key, "methanolhplcgrade");
        for variant in ["methanol (hplc grade)", "METHANOL(HPLC GRADE)", "methanol hplc grade"] {
            assert_eq!(make_name_searchable(variant), key);
        }
    }
}
