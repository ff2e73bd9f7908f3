//! Term normalization: lower-casing followed by Porter (1980) suffix stripping.
//!
//! ```
//! use anirec::vectorizer::stem::normalize;
//!
//! assert_eq!(normalize("Running"), "run");
//! assert_eq!(normalize("studies"), "studi");
//! assert_eq!(normalize("generalization"), "gener");
//! ```

/// Lower-case `raw` and reduce it to its Porter stem.
///
/// Words of two letters or fewer, and words containing non-ASCII
/// characters, are returned lower-cased but otherwise unchanged.
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.len() <= 2 || !lower.is_ascii() {
        return lower;
    }
    let mut word = lower.into_bytes();
    step1a(&mut word);
    step1b(&mut word);
    step1c(&mut word);
    step2(&mut word);
    step3(&mut word);
    step4(&mut word);
    step5(&mut word);
    // only ASCII bytes were removed or appended
    String::from_utf8(word).unwrap_or_default()
}

#[inline]
fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// number of VC sequences in `w`: [C](VC)^m[V]
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut i = 0;
    while i < n && is_consonant(w, i) {
        i += 1;
    }
    let mut m = 0;
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
        if i >= n {
            return m;
        }
    }
}

fn has_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// consonant-vowel-consonant ending where the last consonant is not w, x or y
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

#[inline]
fn stem_len(w: &[u8], suffix: &str) -> Option<usize> {
    w.ends_with(suffix.as_bytes()).then(|| w.len() - suffix.len())
}

fn replace_tail(w: &mut Vec<u8>, keep: usize, replacement: &str) {
    w.truncate(keep);
    w.extend_from_slice(replacement.as_bytes());
}

/// Apply the first rule whose suffix matches, when the stem measure exceeds `min_measure`.
/// Later rules are not tried once a suffix matched.
fn apply_rules(w: &mut Vec<u8>, rules: &[(&str, &str)], min_measure: usize) {
    for (suffix, replacement) in rules {
        if let Some(keep) = stem_len(w, suffix) {
            if measure(&w[..keep]) > min_measure {
                replace_tail(w, keep, replacement);
            }
            return;
        }
    }
}

fn step1a(w: &mut Vec<u8>) {
    if let Some(keep) = stem_len(w, "sses") {
        replace_tail(w, keep, "ss");
    } else if let Some(keep) = stem_len(w, "ies") {
        replace_tail(w, keep, "i");
    } else if !w.ends_with(b"ss") {
        if let Some(keep) = stem_len(w, "s") {
            w.truncate(keep);
        }
    }
}

fn step1b(w: &mut Vec<u8>) {
    if let Some(keep) = stem_len(w, "eed") {
        if measure(&w[..keep]) > 0 {
            replace_tail(w, keep, "ee");
        }
        return;
    }
    let stripped = ["ed", "ing"].iter().any(|suffix| match stem_len(w, suffix) {
        Some(keep) if has_vowel(&w[..keep]) => {
            w.truncate(keep);
            true
        }
        _ => false,
    });
    if !stripped {
        return;
    }
    if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
        w.push(b'e');
    } else if ends_double_consonant(w) && !matches!(w[w.len() - 1], b'l' | b's' | b'z') {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

fn step1c(w: &mut Vec<u8>) {
    if let Some(keep) = stem_len(w, "y") {
        if has_vowel(&w[..keep]) {
            w[keep] = b'i';
        }
    }
}

fn step2(w: &mut Vec<u8>) {
    const RULES: &[(&str, &str)] = &[
        ("ational", "ate"),
        ("tional", "tion"),
        ("enci", "ence"),
        ("anci", "ance"),
        ("izer", "ize"),
        ("abli", "able"),
        ("alli", "al"),
        ("entli", "ent"),
        ("eli", "e"),
        ("ousli", "ous"),
        ("ization", "ize"),
        ("ation", "ate"),
        ("ator", "ate"),
        ("alism", "al"),
        ("iveness", "ive"),
        ("fulness", "ful"),
        ("ousness", "ous"),
        ("aliti", "al"),
        ("iviti", "ive"),
        ("biliti", "ble"),
    ];
    apply_rules(w, RULES, 0);
}

fn step3(w: &mut Vec<u8>) {
    const RULES: &[(&str, &str)] = &[
        ("icate", "ic"),
        ("ative", ""),
        ("alize", "al"),
        ("iciti", "ic"),
        ("ical", "ic"),
        ("ful", ""),
        ("ness", ""),
    ];
    apply_rules(w, RULES, 0);
}

fn step4(w: &mut Vec<u8>) {
    const SUFFIXES: &[&str] = &[
        "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
        "ou", "ism", "ate", "iti", "ous", "ive", "ize",
    ];
    for suffix in SUFFIXES {
        if let Some(keep) = stem_len(w, suffix) {
            let stem = &w[..keep];
            let allowed = *suffix != "ion" || matches!(stem.last(), Some(b's') | Some(b't'));
            if allowed && measure(stem) > 1 {
                w.truncate(keep);
            }
            return;
        }
    }
}

fn step5(w: &mut Vec<u8>) {
    if let Some(keep) = stem_len(w, "e") {
        let stem = &w[..keep];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            w.truncate(keep);
        }
    }
    if w.ends_with(b"ll") && measure(w) > 1 {
        w.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pairs: &[(&str, &str)]) {
        for (input, expected) in pairs {
            assert_eq!(normalize(input), *expected, "stem of {input:?}");
        }
    }

    #[test]
    fn plurals_and_past_participles() {
        check(&[
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("ties", "ti"),
            ("caress", "caress"),
            ("cats", "cat"),
            ("feed", "feed"),
            ("agreed", "agre"),
            ("plastered", "plaster"),
            ("bled", "bled"),
            ("motoring", "motor"),
            ("sing", "sing"),
        ]);
    }

    #[test]
    fn step1b_restoration() {
        check(&[
            ("conflated", "conflat"),
            ("troubled", "troubl"),
            ("sized", "size"),
            ("hopping", "hop"),
            ("tanned", "tan"),
            ("falling", "fall"),
            ("hissing", "hiss"),
            ("fizzed", "fizz"),
            ("failing", "fail"),
            ("filing", "file"),
            ("running", "run"),
        ]);
    }

    #[test]
    fn y_to_i() {
        check(&[("happy", "happi"), ("sky", "sky"), ("comedy", "comedi")]);
    }

    #[test]
    fn double_suffixes() {
        check(&[
            ("relational", "relat"),
            ("conditional", "condit"),
            ("valenci", "valenc"),
            ("digitizer", "digit"),
            ("vietnamization", "vietnam"),
            ("operator", "oper"),
            ("hopefulness", "hope"),
            ("sensitiviti", "sensit"),
            ("generalization", "gener"),
        ]);
    }

    #[test]
    fn step3_and_step4() {
        check(&[
            ("triplicate", "triplic"),
            ("formative", "form"),
            ("electrical", "electr"),
            ("hopeful", "hope"),
            ("goodness", "good"),
            ("revival", "reviv"),
            ("allowance", "allow"),
            ("adjustable", "adjust"),
            ("adoption", "adopt"),
            ("action", "action"),
            ("replacement", "replac"),
        ]);
    }

    #[test]
    fn final_e_and_ll() {
        check(&[
            ("probate", "probat"),
            ("rate", "rate"),
            ("cease", "ceas"),
            ("controll", "control"),
            ("roll", "roll"),
            ("adventure", "adventur"),
            ("romance", "romanc"),
        ]);
    }

    #[test]
    fn lowercases_and_passes_short_or_foreign_words() {
        check(&[
            ("Action", "action"),
            ("IS", "is"),
            ("a", "a"),
            ("", ""),
            ("Café", "café"),
            ("sci-fi,", "sci-fi,"),
            ("1999", "1999"),
        ]);
    }

    #[test]
    fn is_deterministic() {
        let words = ["Adventures", "fighting", "magical", "supernatural"];
        let first: Vec<String> = words.iter().map(|w| normalize(w)).collect();
        let second: Vec<String> = words.iter().map(|w| normalize(w)).collect();
        assert_eq!(first, second);
    }
}
