/// Languages offered by the composer and viewer pickers, as (code, native
/// display name) pairs. Post language tags stay free-form; codes outside
/// this table are tolerated everywhere.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "हिंदी (Hindi)"),
    ("bn", "বাংলা (Bengali)"),
    ("ta", "தமிழ் (Tamil)"),
    ("te", "తెలుగు (Telugu)"),
    ("mr", "मराठी (Marathi)"),
    ("gu", "ગુજરાતી (Gujarati)"),
    ("kn", "ಕನ್ನಡ (Kannada)"),
    ("ml", "മലയാളം (Malayalam)"),
    ("pa", "ਪੰਜਾਬੀ (Punjabi)"),
    ("or", "ଓଡ଼ିଆ (Odia)"),
    ("as", "অসমীয়া (Assamese)"),
    ("ur", "اردو (Urdu)"),
    ("ne", "नेपाली (Nepali)"),
    ("si", "සිංහල (Sinhala)"),
    ("sa", "संस्कृतम् (Sanskrit)"),
    ("kok", "कोंकणी (Konkani)"),
    ("mai", "मैथिली (Maithili)"),
    ("mni", "ꯃꯤꯇꯩꯂꯣꯟ (Manipuri)"),
    ("sd", "سنڌي (Sindhi)"),
    ("ks", "کٲشُر (Kashmiri)"),
    ("doi", "डोगरी (Dogri)"),
];

/// Native display name for a language code, if it is in the picker table.
pub fn display_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_look_up_display_names_by_code() {
        assert_eq!(display_name("hi"), Some("हिंदी (Hindi)"));
        assert_eq!(display_name("xx"), None);
    }

    #[test]
    fn it_should_tolerate_unknown_codes() {
        assert!(is_supported("kok"));
        assert!(!is_supported("klingon"));
    }
}
