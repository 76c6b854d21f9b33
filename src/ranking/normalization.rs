use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Grouping key for a player display name.
///
/// Strips diacritics, keeps ASCII letters and digits plus whitespace, `.` and
/// `-`, lower-cases and collapses whitespace. Letters without an ASCII base
/// (`ł`, Cyrillic) are dropped. An empty key means the name cannot be identified.
pub fn normalize_name(name: &str) -> String {
    let stripped: String = name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| is_kept_char(*c))
        .collect();

    collapse_whitespace(&stripped.trim().to_lowercase())
}

fn is_kept_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '.' || c == '-'
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_spacing() {
        assert_eq!(normalize_name("José  Pérez"), "jose perez");
    }

    #[test]
    fn test_letters_without_ascii_base_are_dropped() {
        assert_eq!(normalize_name("Łukasz Żółć"), "ukasz zoc");
        assert_eq!(normalize_name("Øystein Иван"), "ystein");
    }

    #[test]
    fn test_keeps_periods_and_hyphens() {
        assert_eq!(normalize_name(" Smith-Jones, J. "), "smith-jones j.");
    }

    #[test]
    fn test_unidentifiable_name_is_empty() {
        assert_eq!(normalize_name("  ***  "), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let samples = [
            "José  Pérez",
            "Łukasz Żółć",
            "MÜLLER,\tHans",
            "İlhan Öztürk",
            "ﬁscher ²",
            "  Kowalski  ,  Jan  ",
        ];

        for sample in samples {
            let once = normalize_name(sample);
            assert_eq!(normalize_name(&once), once, "not idempotent for {sample:?}");
        }
    }
}
