//! Static language table
//!
//! Maps the supported language codes to English display names and back.

use serde::Serialize;

/// Source code used when a display name has no entry in the table
pub const DEFAULT_SOURCE_CODE: &str = "en";

/// A supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

/// Supported languages, in the order they are offered as translation targets
pub const LANGUAGES: [Language; 6] = [
    Language { code: "en", label: "English" },
    Language { code: "pt", label: "Portuguese" },
    Language { code: "es", label: "Spanish" },
    Language { code: "ru", label: "Russian" },
    Language { code: "tr", label: "Turkish" },
    Language { code: "fr", label: "French" },
];

/// Languages the user may pick as a translation target
pub fn translation_targets() -> &'static [Language] {
    &LANGUAGES
}

/// Display name for a code, if the code is known
pub fn name_for_code(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|l| l.code == code).map(|l| l.label)
}

/// Display name for a code, falling back to the raw code
pub fn display_name(code: &str) -> String {
    name_for_code(code).map_or_else(|| code.to_string(), str::to_string)
}

/// Code for a display name, if the name is known
pub fn code_for_name(name: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|l| l.label == name).map(|l| l.code)
}

/// Source code to translate from, given a detected language name.
///
/// Names outside the table (including raw codes the detector returned
/// unmapped) resolve to [`DEFAULT_SOURCE_CODE`].
pub fn source_code_for(name: &str) -> &'static str {
    code_for_name(name).unwrap_or(DEFAULT_SOURCE_CODE)
}

/// Whether `code` is one of the offered translation targets
pub fn is_translation_target(code: &str) -> bool {
    translation_targets().iter().any(|l| l.code == code)
}
