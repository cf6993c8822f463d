//! Static language lookup tables. Table order is load-bearing: the first
//! entry whose name appears in the query wins, so both tables are fixed
//! ordered slices rather than maps.

pub type LanguageTable = &'static [(&'static str, &'static str)];

pub const REGIONAL_LANGUAGES: LanguageTable = &[
    ("kannada", "kn"),
    ("telugu", "te"),
    ("tamil", "ta"),
    ("malayalam", "ml"),
    ("hindi", "hi"),
    ("marathi", "mr"),
    ("bengali", "bn"),
    ("punjabi", "pa"),
    ("gujarati", "gu"),
    ("odia", "or"),
    ("assamese", "as"),
];

pub const WORLD_LANGUAGES: LanguageTable = &[
    ("english", "en"),
    ("korean", "ko"),
    ("japanese", "ja"),
    ("spanish", "es"),
    ("french", "fr"),
    ("chinese", "zh"),
    ("german", "de"),
    ("italian", "it"),
    ("arabic", "ar"),
    ("turkish", "tr"),
];

/// Returns the code of the first table entry whose language name occurs as a
/// substring of the (already lowercased) query.
pub fn match_language(query: &str, table: LanguageTable) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| query.contains(name))
        .map(|(_, code)| *code)
}
