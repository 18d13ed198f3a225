//! Numerus (plural form) rules.
//!
//! A numerus message carries one translated form per plural category of the target
//! language. The rule for a language maps a magnitude to the index of the form to use,
//! in the order translators enter them (English: singular, plural).

use crate::input::language::{
    language_of,
    normalize_language_code,
};

/// Cardinal plural rule of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// One form for every magnitude (Japanese, Chinese, Turkish, ...).
    Single,
    /// `n == 1` and everything else (English, German, ...).
    OneOther,
    /// `n < 2` and everything else (French, Brazilian Portuguese).
    French,
    /// `1, 21, 31…` / `2–4, 22–24…` / the rest (Russian, Ukrainian, Serbian, ...).
    Slavic,
    Polish,
    /// `1` / `2–4` / the rest (Czech, Slovak).
    CzechSlovak,
    /// `x01` / `x02` / `x03–x04` / the rest.
    Slovenian,
    /// `1` / `2` / the rest.
    Irish,
    /// `x1` except `x11` / non-zero / zero.
    Latvian,
    Lithuanian,
    Romanian,
    /// zero / one / two / few / many / other.
    Arabic,
    Maltese,
    /// `1` / `2` / `8, 11` / the rest.
    Welsh,
    Macedonian,
    /// `x1` except `x11` / the rest.
    Icelandic,
}

impl PluralRule {
    /// Rule of a locale tag (`de`, `pt_BR`, `sr-Latn`, ...). Unknown languages use
    /// [`PluralRule::OneOther`].
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        Self::for_known_language(tag).unwrap_or(Self::OneOther)
    }

    /// Rule of a locale tag, or `None` when the language is not in the table.
    #[must_use]
    pub fn for_known_language(tag: &str) -> Option<Self> {
        let normalized = normalize_language_code(tag);
        if normalized == "pt_br" {
            return Some(Self::French);
        }

        let rule = match language_of(&normalized).as_str() {
            "bo" | "dz" | "fa" | "fj" | "gn" | "hu" | "id" | "ja" | "jv" | "ka" | "km" | "ko"
            | "lo" | "ms" | "my" | "na" | "om" | "su" | "th" | "tr" | "tt" | "vi" | "yo" | "za"
            | "zh" => Self::Single,
            "en" | "de" | "nl" | "fy" | "sv" | "da" | "no" | "nb" | "nn" | "fo"
            | "es" | "pt" | "it" | "ca" | "gl" | "eu" | "el" | "bg" | "fi" | "et" | "he"
            | "eo" | "af" | "sq" | "hy" | "az" | "bn" | "hi" | "gu" | "kn" | "ml" | "mr"
            | "ne" | "pa" | "ta" | "te" | "ur" | "sw" | "zu" | "xh" | "kk" | "ky" | "mn"
            | "uz" | "ps" | "so" | "ku" | "la" | "lb" | "rm" | "ia" | "ha" | "si" | "as"
            | "or" | "tk" | "ug" | "yi" => Self::OneOther,
            "fr" | "ak" | "am" | "fil" | "ln" | "mg" | "ti" | "wa" => Self::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Slavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::CzechSlovak,
            "sl" => Self::Slovenian,
            "ga" | "gd" => Self::Irish,
            "lv" => Self::Latvian,
            "lt" => Self::Lithuanian,
            "ro" | "mo" => Self::Romanian,
            "ar" => Self::Arabic,
            "mt" => Self::Maltese,
            "cy" => Self::Welsh,
            "mk" => Self::Macedonian,
            "is" => Self::Icelandic,
            _ => return None,
        };
        Some(rule)
    }

    /// Number of forms a translation for this rule must provide.
    #[must_use]
    pub const fn form_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::OneOther | Self::French | Self::Icelandic => 2,
            Self::Slavic
            | Self::Polish
            | Self::CzechSlovak
            | Self::Irish
            | Self::Latvian
            | Self::Lithuanian
            | Self::Romanian
            | Self::Macedonian => 3,
            Self::Slovenian | Self::Maltese | Self::Welsh => 4,
            Self::Arabic => 6,
        }
    }

    /// Index of the form to use for `n`; always below [`PluralRule::form_count`].
    ///
    /// Negative magnitudes select by their absolute value.
    #[must_use]
    pub fn form_index(self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let mod10 = n % 10;
        let mod100 = n % 100;

        match self {
            Self::Single => 0,
            Self::OneOther => usize::from(n != 1),
            Self::French => usize::from(n >= 2),
            Self::Slavic => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if mod10 >= 2 && mod10 <= 4 && (mod100 < 10 || mod100 >= 20) {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if mod10 >= 2 && mod10 <= 4 && (mod100 < 10 || mod100 >= 20) {
                    1
                } else {
                    2
                }
            }
            Self::CzechSlovak => {
                if n == 1 {
                    0
                } else if n >= 2 && n <= 4 {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => match mod100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            Self::Latvian => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            Self::Lithuanian => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if mod10 >= 2 && (mod100 < 10 || mod100 >= 20) {
                    1
                } else {
                    2
                }
            }
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (mod100 >= 1 && mod100 <= 19) {
                    1
                } else {
                    2
                }
            }
            Self::Arabic => {
                if n == 0 {
                    0
                } else if n == 1 {
                    1
                } else if n == 2 {
                    2
                } else if mod100 >= 3 && mod100 <= 10 {
                    3
                } else if mod100 >= 11 {
                    4
                } else {
                    5
                }
            }
            Self::Maltese => {
                if n == 1 {
                    0
                } else if n == 0 || (mod100 >= 1 && mod100 <= 10) {
                    1
                } else if mod100 >= 11 && mod100 <= 19 {
                    2
                } else {
                    3
                }
            }
            Self::Welsh => match n {
                1 => 0,
                2 => 1,
                8 | 11 => 2,
                _ => 3,
            },
            Self::Macedonian => match mod10 {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            Self::Icelandic => usize::from(!(mod10 == 1 && mod100 != 11)),
        }
    }
}
