//! English count-noun inflection for identifiers.
//!
//! Only the last word of an identifier is inflected: `blog_post` → `blog_posts`,
//! `UserProfile` → `UserProfiles`. The word's case shape (lower, Capitalized,
//! UPPER) is restored afterwards.
//!
//! Both directions are idempotent: a word already in the requested form is
//! returned unchanged. Every rule below is written so its output is
//! recognised as "already done" by the same direction.
//!
//! ## Limitations
//!
//! - Words containing anything other than ASCII letters pass through untouched.
//! - Regular words ending in a vowel + `s` (`lens`) are read as plurals.
//! - Nouns ending in `u` pluralize only when listed in `U_NOUNS`; any other
//!   word whose regular plural would read back as a singular (`pepsi`,
//!   `pepsis`) is left as typed.

/// Nouns with no distinct plural.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
];

/// `(singular, plural)` pairs the suffix rules get wrong.
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("axis", "axes"),
    ("cache", "caches"),
    ("canvas", "canvases"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("diagnosis", "diagnoses"),
    ("foot", "feet"),
    ("gas", "gases"),
    ("goose", "geese"),
    ("half", "halves"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("niche", "niches"),
    ("ox", "oxen"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("shelf", "shelves"),
    ("taxi", "taxis"),
    ("thesis", "theses"),
    ("tooth", "teeth"),
    ("wife", "wives"),
    ("woman", "women"),
];

/// Nouns ending in `u` whose plural is a plain `+s` (`skus`, `menus`).
///
/// Any other word ending in `us` is read as a singular (`status`, `bus`).
const U_NOUNS: &[&str] = &[
    "bayou", "bijou", "cpu", "emu", "gnu", "gpu", "guru", "haiku", "impromptu", "kudzu", "mcu",
    "menu", "sku", "sudoku", "tabu", "tiramisu", "tofu", "tpu", "tutu", "vpu", "zebu",
];

/// Pluralize the last word of `name`.
pub fn pluralize(name: &str) -> String {
    inflect_last_word(name, pluralize_word)
}

/// Singularize the last word of `name`.
pub fn singularize(name: &str) -> String {
    inflect_last_word(name, singularize_word)
}

// A rule's output is only taken when the same direction would leave it
// alone; otherwise the word is returned unchanged.

fn pluralize_word(word: &str) -> String {
    if is_plural(word) {
        return word.to_string();
    }

    let plural = match IRREGULAR.iter().find(|(s, _)| *s == word) {
        Some((_, plural)) => (*plural).to_string(),
        None => plural_by_rule(word),
    };

    if is_plural(&plural) {
        plural
    } else {
        word.to_string()
    }
}

fn singularize_word(word: &str) -> String {
    if is_singular(word) {
        return word.to_string();
    }

    let singular = match IRREGULAR.iter().find(|(_, p)| *p == word) {
        Some((singular, _)) => (*singular).to_string(),
        None => singular_by_rule(word),
    };

    if is_singular(&singular) {
        singular
    } else {
        word.to_string()
    }
}

/// Fixed points of [`pluralize_word`].
fn is_plural(word: &str) -> bool {
    if UNCOUNTABLE.contains(&word) || IRREGULAR.iter().any(|(_, p)| *p == word) {
        return true;
    }
    if IRREGULAR.iter().any(|(s, _)| *s == word) {
        return false;
    }
    looks_plural(word)
}

/// Fixed points of [`singularize_word`].
fn is_singular(word: &str) -> bool {
    if UNCOUNTABLE.contains(&word) || IRREGULAR.iter().any(|(s, _)| *s == word) {
        return true;
    }
    if IRREGULAR.iter().any(|(_, p)| *p == word) {
        return false;
    }
    !looks_plural(word)
}

fn plural_by_rule(word: &str) -> String {
    if word.ends_with("sis") || word.ends_with("xis") {
        format!("{}es", &word[..word.len() - 2])
    } else if U_NOUNS.contains(&word) {
        format!("{word}s")
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|end| word.ends_with(end)) {
        format!("{word}es")
    } else if ends_with_consonant_y(word) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

fn singular_by_rule(word: &str) -> String {
    let len = word.len();
    if word.ends_with("ies") && len > 3 {
        format!("{}y", &word[..len - 3])
    } else if word.ends_with("sses") {
        word[..len - 2].to_string()
    } else if word.ends_with("uses") {
        // statuses -> status, but houses -> house
        match word[..len - 4].chars().last() {
            Some(c) if !matches!(c, 'a' | 'o' | 'u') => word[..len - 2].to_string(),
            _ => word[..len - 1].to_string(),
        }
    } else if word.ends_with("yses") {
        format!("{}is", &word[..len - 2])
    } else if ["xes", "ches", "shes", "zzes"]
        .iter()
        .any(|end| word.ends_with(end))
    {
        word[..len - 2].to_string()
    } else {
        word[..len - 1].to_string()
    }
}

/// Suffix heuristic for a lowercase word outside the tables.
fn looks_plural(word: &str) -> bool {
    if word.len() < 2 || !word.ends_with('s') || word.ends_with("ss") {
        return false;
    }
    if word.ends_with("us") {
        return U_NOUNS.contains(&&word[..word.len() - 1]);
    }
    !word.ends_with("sis") && !word.ends_with("xis")
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('y'), Some(prev)) => !matches!(prev, 'a' | 'e' | 'i' | 'o' | 'u'),
        _ => false,
    }
}

// ============================================================================
// Word extraction and case shape
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Lower,
    Capitalized,
    Upper,
}

impl Shape {
    fn of(word: &str) -> Self {
        let letters = word.chars().filter(char::is_ascii_alphabetic).count();
        if letters > 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
            Self::Upper
        } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            Self::Capitalized
        } else {
            Self::Lower
        }
    }

    fn apply(self, lower: &str) -> String {
        match self {
            Self::Lower => lower.to_string(),
            Self::Upper => lower.to_ascii_uppercase(),
            Self::Capitalized => {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            }
        }
    }
}

fn inflect_last_word(name: &str, rule: fn(&str) -> String) -> String {
    let start = last_word_start(name);
    let (head, word) = name.split_at(start);

    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return name.to_string();
    }

    let shape = Shape::of(word);
    let inflected = rule(&word.to_ascii_lowercase());
    format!("{head}{}", shape.apply(&inflected))
}

/// Byte offset where the last word of `name` begins.
///
/// Boundaries are separators (`_`, `-`, space, `.`), a lower/digit → upper
/// transition (`userProfile`) and the end of an acronym (`HTTPRequest`).
fn last_word_start(name: &str) -> usize {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let (idx, c) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|(_, n)| *n);

        let after_separator = matches!(prev, '_' | '-' | ' ' | '.');
        let camel = (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && c.is_ascii_uppercase();
        let acronym_end = prev.is_ascii_uppercase()
            && c.is_ascii_uppercase()
            && next.is_some_and(|n| n.is_ascii_lowercase());

        if after_separator || camel || acronym_end {
            start = idx;
        }
    }

    start
}
