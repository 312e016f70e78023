//! Preposition + article contraction.
//!
//! `di`, `a`, `da`, `in` and `su` fuse with a following definite article
//! (`di` + `il` → `del`). Pairs the table does not know are left unfused.

/// One row of the contraction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractionEntry {
    /// Simple preposition
    pub preposition: &'static str,
    /// Definite article it precedes
    pub article: &'static str,
    /// Fused form
    pub fused: &'static str,
}

const fn row(
    preposition: &'static str,
    article: &'static str,
    fused: &'static str,
) -> ContractionEntry {
    ContractionEntry {
        preposition,
        article,
        fused,
    }
}

static CONTRACTIONS: &[ContractionEntry] = &[
    row("di", "il", "del"),
    row("di", "lo", "dello"),
    row("di", "la", "della"),
    row("di", "l'", "dell'"),
    row("di", "i", "dei"),
    row("di", "gli", "degli"),
    row("di", "le", "delle"),
    row("a", "il", "al"),
    row("a", "lo", "allo"),
    row("a", "la", "alla"),
    row("a", "l'", "all'"),
    row("a", "i", "ai"),
    row("a", "gli", "agli"),
    row("a", "le", "alle"),
    row("da", "il", "dal"),
    row("da", "lo", "dallo"),
    row("da", "la", "dalla"),
    row("da", "l'", "dall'"),
    row("da", "i", "dai"),
    row("da", "gli", "dagli"),
    row("da", "le", "dalle"),
    row("in", "il", "nel"),
    row("in", "lo", "nello"),
    row("in", "la", "nella"),
    row("in", "l'", "nell'"),
    row("in", "i", "nei"),
    row("in", "gli", "negli"),
    row("in", "le", "nelle"),
    row("su", "il", "sul"),
    row("su", "lo", "sullo"),
    row("su", "la", "sulla"),
    row("su", "l'", "sull'"),
    row("su", "i", "sui"),
    row("su", "gli", "sugli"),
    row("su", "le", "sulle"),
];

/// Returns the full contraction table.
#[must_use]
pub fn entries() -> &'static [ContractionEntry] {
    CONTRACTIONS
}

/// Looks up the fused form of a preposition and article, ignoring case.
#[must_use]
pub fn lookup(preposition: &str, article: &str) -> Option<&'static str> {
    let preposition = preposition.trim();
    let article = article.trim();
    CONTRACTIONS
        .iter()
        .find(|e| {
            e.preposition.eq_ignore_ascii_case(preposition) && e.article.eq_ignore_ascii_case(article)
        })
        .map(|e| e.fused)
}

/// Contracts a preposition with a definite article.
///
/// Unknown pairs come back as `"preposition article"`; this never fails.
#[must_use]
pub fn contract(preposition: &str, article: &str) -> String {
    match lookup(preposition, article) {
        Some(fused) => fused.to_string(),
        None => format!("{preposition} {article}"),
    }
}
