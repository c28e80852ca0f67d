//! Sample words per script, with the (input, expected) pairs built from
//! them. Test-only.

pub const SAMPLES: &[(&str, &str)] = &[
    ("Latin",              "dabcZYX"),
    ("Latin supplemental", "ÀÊÖØåöøüÿ"),
    ("Chinese",            "他走過城市的狗他的兄弟生氣了"),
    ("Chinese Simplified", "渔夫从远处看见一位渔夫罕见的字符"),
    ("Arabic",             "العربية"),
    ("Devanagari",         "देवनागरीलिपि"),
    ("Eastern Nagari",     "পৰবনগৰ"),
    ("Cyrillic",           "НочьУлицаФонарьАптекаЃё"),
    ("Kana",               "かなカナウィキペディア日本語版"),
    ("Javanese",           "ꦗꦮ"),
    ("Hangul",             "한글조선글"),
    ("Telugu",             "తెలుగు"),
    ("Tamil",              "நன்னூல்"),
    ("Gujarati",           "ગુજરાતી"),
    ("Kannada",            "ಕನ್ನಡ"),
    ("Burmese",            "မြန်မာ"),
    ("Malayalam",          "മലയാളം"),
    ("Thai",               "ไทย"),
    ("Sundanese",          "ᮞᮥᮔ᮪ᮓ"),
    ("Gurmukhi",           "ਗੁਰਮੁਖੀ"),
    ("Lao",                "ລາວ"),
    ("Odia",               "ଉତ୍କଳ"),
    ("Ge'ez",              "ግዕዝ"),
    ("Sinhalese",          "සිංහල"),
    ("Hebrew",             "אלפבית"),
    ("Armenian",           "Հայոց"),
    ("Khmer",              "ខ្មែរ"),
    ("Greek",              "Ελληνικό"),
    ("Batak",              "ᯅᯖᯂ᯲ᯆᯗᯂ᯳ᯅᯖᯃ᯳ᯅᯗᯂ᯲ᯅᯖᯄᯱ᯲"),
    ("Lontara",            "ᨒᨚᨈᨑ"),
    ("Balinese",           "ᬩᬮᬶ"),
    ("Georgian",           "ქართული"),
    ("Modern Yi",          "ꆈꌠ"),
    ("Mongolian",          "ᠮᠣᠩᠭᠣᠯ"),
    ("Tifinagh",           "ⵜⵉⴼⵉⵏⴰⵖ"),
    ("Tai Le",             "ᥖᥭᥰᥘᥫᥴ"),
    ("New Tai Lue",        "ᦑᦟᦹᧉ"),
    ("Syriac",             "ܣܘܪܝܬ"),
    ("Thaana",             "ދިވެހި"),
    ("Inuktitut",          "ᐃᓄᒃᑎᑐᑦ"),
    ("Cherokee",           "ᏣᎳᎩ"),
    ("Hanunó'o",           "ᜱᜨᜳᜨᜳᜢ"),
];

/// Digits around the word, all of which must go.
pub fn smoke_case(text: &str) -> (String, String) {
    (format!("1{}2", text), text.to_string())
}

/// Junk at both edges and a `%` marker in the middle; only the edges go.
pub fn edge_case(text: &str) -> (String, String) {
    let mid = text.chars().count() / 2;
    let split = text.char_indices().nth(mid).map(|(i, _)| i).unwrap_or(text.len());
    let (head, tail) = text.split_at(split);
    let expected = format!("{}%{}", head, tail);
    (format!("#!{}^@", expected), expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(smoke_case("abc"), ("1abc2".to_string(), "abc".to_string()));
        assert_eq!(edge_case("abcd"), ("#!ab%cd^@".to_string(), "ab%cd".to_string()));
        assert_eq!(edge_case("ไทย"), ("#!ไ%ทย^@".to_string(), "ไ%ทย".to_string()));
        assert_eq!(edge_case(""), ("#!%^@".to_string(), "%".to_string()));
    }
}
