//! Display Label Normalization
//!
//! Series names spell out their transport and direction in full; chart
//! labels need the short forms. The replacements are literal substring
//! rewrites, applied in order; stream-qualified phrases collapse before
//! the bare direction words can match inside them.

const REPLACEMENTS: &[(&str, &str)] = &[
    ("Stream Serialization", "StrSer"),
    ("Stream Deserialization", "StrDes"),
    ("Serialization", "Ser"),
    ("Deserialization", "Des"),
];

/// Shorten a raw series name into a display label.
///
/// Presentation-only: two distinct raw names that normalize to the same
/// label remain distinct series entries.
pub fn normalize_label(name: &str) -> String {
    let mut label = name.to_string();
    for (long, short) in REPLACEMENTS {
        label = label.replace(long, short);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_qualified_phrases_collapse_first() {
        assert_eq!(normalize_label("Json Stream Serialization"), "Json StrSer");
        assert_eq!(
            normalize_label("Yaml Stream Deserialization"),
            "Yaml StrDes"
        );
    }

    #[test]
    fn test_bare_directions() {
        assert_eq!(normalize_label("Json Serialization"), "Json Ser");
        assert_eq!(normalize_label("Toml Deserialization"), "Toml Des");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(normalize_label("Warmup Overhead"), "Warmup Overhead");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_idempotent() {
        let names = [
            "Json Stream Serialization",
            "Json Serialization",
            "Toml Deserialization",
            "Something Else",
        ];
        for name in names {
            let once = normalize_label(name);
            assert_eq!(normalize_label(&once), once, "not idempotent for {name:?}");
        }
    }
}
