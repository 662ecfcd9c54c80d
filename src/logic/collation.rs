//! Human-friendly string ordering for names shown in the dashboard.
//!
//! Comparison runs in three passes, like a browser's default collation:
//! letters ignoring accents and case first, then accents (plain before
//! accented), then case (lower before upper). Only if all three tie does the
//! raw code point order decide.

use std::cmp::Ordering;

/// Compare two strings the way the dashboard lists them
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let a_keys: Vec<CollationKey> = a.chars().map(CollationKey::from_char).collect();
    let b_keys: Vec<CollationKey> = b.chars().map(CollationKey::from_char).collect();

    compare_by(&a_keys, &b_keys, |k| k.base)
        .then_with(|| compare_by(&a_keys, &b_keys, |k| k.accented))
        .then_with(|| compare_by(&a_keys, &b_keys, |k| k.upper))
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy)]
struct CollationKey {
    base: char,
    accented: bool,
    upper: bool,
}

impl CollationKey {
    fn from_char(c: char) -> Self {
        let upper = c.is_uppercase();
        let lower = c.to_lowercase().next().unwrap_or(c);
        let base = strip_accent(lower);
        Self {
            base,
            accented: base != lower,
            upper,
        }
    }
}

fn compare_by<K, F>(a: &[CollationKey], b: &[CollationKey], key: F) -> Ordering
where
    K: Ord,
    F: Fn(&CollationKey) -> K,
{
    a.iter().map(&key).cmp(b.iter().map(&key))
}

/// Latin-1 and Latin Extended-A letters used in Portuguese and Spanish names
fn strip_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}
