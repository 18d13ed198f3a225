//! Locale tag helpers and locale detection from catalog file names.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// ISO 639 language codes recognised when detecting a locale from a path.
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "af", "ak", "am", "ar", "as", "az", "be", "bg", "bn", "bo", "br", "bs", "ca", "cs", "cy",
        "da", "de", "dv", "dz", "el", "en", "eo", "es", "et", "eu", "fa", "fi", "fil", "fj", "fo",
        "fr", "fy", "ga", "gd", "gl", "gn", "gu", "ha", "he", "hi", "hr", "hu", "hy", "id", "ig",
        "is", "it", "ja", "jv", "ka", "kk", "km", "kn", "ko", "kok", "ku", "ky", "la", "lb", "ln",
        "lo", "lt", "lv", "mg", "mi", "mk", "ml", "mn", "mo", "mr", "ms", "mt", "my", "na", "nb",
        "ne", "nl", "nn", "no", "ns", "oc", "om", "or", "pa", "pl", "ps", "pt", "qu", "rm", "ro",
        "ru", "rw", "sa", "sd", "se", "si", "sk", "sl", "so", "sq", "sr", "su", "sv", "sw", "syr",
        "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "tr", "ts", "tt", "ug", "uk", "ur", "uz",
        "vi", "wa", "wo", "xh", "yo", "za", "zh", "zu",
    ]
    .into_iter()
    .collect()
});

/// Script subtags that may sit between language and region (`sr_Latn_RS`).
const SCRIPT_CODES: &[&str] = &["Latn", "Cyrl", "Hans", "Hant", "Arab"];

/// Normalize a locale tag for comparisons (lowercase, `-` replaced by `_`).
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.trim().to_lowercase().replace('-', "_")
}

/// Primary language subtag of a locale (`"pt_BR"` -> `"pt"`).
#[must_use]
pub fn language_of(tag: &str) -> String {
    normalize_language_code(tag).split('_').next().unwrap_or_default().to_string()
}

fn is_language_code(part: &str) -> bool {
    LANGUAGE_CODES.contains(part.to_lowercase().as_str())
}

fn is_region_code(part: &str) -> bool {
    let uppercase_region = part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase());
    let numeric_region = part.len() == 3 && part.chars().all(|c| c.is_ascii_digit());
    uppercase_region || numeric_region
}

/// Finds the right-most locale in a list of name parts.
fn detect_in_parts(parts: &[&str]) -> Option<String> {
    for (index, part) in parts.iter().enumerate().rev() {
        if is_region_code(part) || SCRIPT_CODES.contains(part) {
            // Walk left over script/region subtags to the language subtag.
            let start = parts.get(..index).and_then(|head| {
                head.iter().rposition(|candidate| {
                    !is_region_code(candidate) && !SCRIPT_CODES.contains(candidate)
                })
            });
            let Some(start) = start else {
                continue;
            };
            if parts.get(start).is_some_and(|language| is_language_code(language)) {
                return parts.get(start..=index).map(|subtags| subtags.join("_"));
            }
            continue;
        }
        if is_language_code(part) {
            return Some((*part).to_string());
        }
    }
    None
}

/// Detect the target locale of a catalog from its path.
///
/// The file stem is split on `_`, `-` and `.`, and searched from the right for a
/// known language code, optionally followed by script and region subtags. Parent
/// directory names are tried next.
///
/// # Examples
/// - `translations/brickstore_de.ts` → `de`
/// - `translations/brickstore_pt_BR.ts` → `pt_BR`
/// - `i18n/fr/app.ts` → `fr`
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> Option<String> {
    let stem = file_path.file_stem()?.to_string_lossy();
    let parts: Vec<&str> = stem.split(['_', '-', '.']).filter(|part| !part.is_empty()).collect();
    if let Some(language) = detect_in_parts(&parts) {
        return Some(language);
    }

    file_path.parent()?.ancestors().find_map(|dir| {
        let name = dir.file_name()?.to_string_lossy();
        let parts: Vec<&str> = name.split(['_', '-']).filter(|part| !part.is_empty()).collect();
        // A directory name must be a locale as a whole.
        let detected = detect_in_parts(&parts)?;
        (detected.len() == name.len()).then_some(detected)
    })
}
