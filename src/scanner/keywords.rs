use regex::Regex;
use std::sync::LazyLock;

/// Phrases that signal a "key" comic in a listing title. +1 each.
pub const KEY_TERMS: [&str; 11] = [
    "key issue",
    "first appearance",
    "1st appearance",
    "#1",
    "origin",
    "newsstand",
    "bronze age",
    "silver age",
    "early issue",
    "first full",
    "first cameo",
];

/// Known valuable issues worth extra attention. +2 each.
pub const BOOST_TITLES: [&str; 14] = [
    "Amazing Spider-Man #361",
    "ASM #361",
    "ASM 361",
    "Amazing Spider-Man #300",
    "ASM #300",
    "Batman #457",
    "OMAC #1",
    "Swamp Thing #1",
    "Marvel Comics Presents #72",
    "Wolverine #1",
    "Incredible Hulk #181",
    "Hulk #181",
    "New Mutants #98",
    "X-Men #266",
];

// Issue number signal: '#' or whitespace, then 1-3 digits at a word boundary.
static ISSUE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(#|\s)\d{1,3}\b").unwrap());

/// How "key-ish" a listing title looks. 0 means not worth ranking at all.
pub fn keyishness(title: &str) -> u32 {
    let t = title.to_lowercase();
    let mut score = 0;

    for kw in KEY_TERMS {
        if t.contains(kw) {
            score += 1;
        }
    }
    for bt in BOOST_TITLES {
        if t.contains(&bt.to_lowercase()) {
            score += 2;
        }
    }
    if ISSUE_NUMBER_RE.is_match(&t) {
        score += 1;
    }

    score
}
