//! Category suggestions for uncategorised vocabulary.
//!
//! Scores a term against a fixed rule table of keywords and endings. Used by
//! the vocabulary store to label entries that arrive as "other", so they can
//! fill pattern roles.

use frasario_foundation::DEFAULT_CATEGORY;

const KEYWORD_SCORE: u32 = 10;
const ENDING_SCORE: u32 = 5;

/// Keywords shorter than this only match exactly, never as a substring.
const MIN_SUBSTRING_KEYWORD: usize = 4;

/// One category's matching rules.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRule {
    /// Category suggested on a match
    pub category: &'static str,
    /// Whole words worth ten points each
    pub keywords: &'static [&'static str],
    /// Word endings worth five points each
    pub endings: &'static [&'static str],
}

static RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "verbs",
        keywords: &[
            "parlare", "mangiare", "bere", "andare", "fare", "dire", "venire", "vedere", "sapere",
            "volere", "potere", "dovere",
        ],
        endings: &["are", "ere", "ire", "rsi"],
    },
    CategoryRule {
        category: "food",
        keywords: &[
            "pane", "pasta", "carne", "pesce", "formaggio", "vino", "acqua", "caffè", "tè",
            "latte", "frutta", "verdura", "dolce", "zucchero", "sale", "olio", "riso", "pizza",
            "gelato", "biscotti",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "numbers",
        keywords: &[
            "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove", "dieci",
            "cento", "mille", "primo", "secondo", "terzo",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "time",
        keywords: &[
            "ora", "giorno", "settimana", "mese", "anno", "oggi", "domani", "ieri", "mattina",
            "sera", "notte", "pomeriggio", "momento", "tempo", "lunedì", "martedì", "mercoledì",
            "giovedì", "venerdì", "sabato", "domenica",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "family",
        keywords: &[
            "madre", "padre", "figlio", "figlia", "fratello", "sorella", "nonno", "nonna", "zio",
            "zia", "cugino", "marito", "moglie", "famiglia", "bambino", "bambina", "ragazzo",
            "ragazza",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "body",
        keywords: &[
            "testa", "occhio", "orecchio", "naso", "bocca", "mano", "piede", "braccio", "gamba",
            "cuore", "corpo", "dito", "capelli",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "colors",
        keywords: &[
            "rosso", "blu", "verde", "giallo", "nero", "bianco", "grigio", "marrone", "arancione",
            "rosa", "viola", "colore",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "places",
        keywords: &[
            "casa", "città", "paese", "strada", "piazza", "chiesa", "scuola", "ospedale",
            "negozio", "ristorante", "bar", "hotel", "aeroporto", "stazione", "museo", "teatro",
            "parco", "centro", "posto", "luogo",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "clothing",
        keywords: &[
            "vestito", "camicia", "pantaloni", "gonna", "cappello", "scarpe", "giacca",
            "cappotto", "maglietta", "calze", "vestiti",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "travel",
        keywords: &[
            "viaggio", "treno", "aereo", "autobus", "macchina", "biglietto", "partenza",
            "arrivo", "valigia", "passaporto", "turista",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "weather",
        keywords: &[
            "tempo", "sole", "pioggia", "neve", "vento", "caldo", "freddo", "nuvola", "cielo",
            "temperatura",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "adjectives",
        keywords: &[
            "bello", "brutto", "grande", "piccolo", "buono", "cattivo", "nuovo", "vecchio",
            "giovane", "alto", "basso", "lungo", "corto", "facile", "difficile", "importante",
            "necessario", "possibile",
        ],
        endings: &["o", "a", "e"],
    },
    CategoryRule {
        category: "greetings",
        keywords: &[
            "ciao", "buongiorno", "buonasera", "buonanotte", "arrivederci", "grazie", "prego",
            "scusa", "permesso", "salve",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "pronouns",
        keywords: &[
            "io", "tu", "lui", "lei", "noi", "voi", "loro", "mi", "ti", "ci", "vi", "questo",
            "quello", "qualche", "tutto",
        ],
        endings: &[],
    },
    CategoryRule {
        category: "prepositions",
        keywords: &["di", "a", "da", "in", "con", "su", "per", "tra", "fra"],
        endings: &[],
    },
    CategoryRule {
        category: "conjunctions",
        keywords: &["e", "ma", "o", "però", "quindi", "perché", "se", "quando", "come"],
        endings: &[],
    },
];

/// Scores `term` against one rule.
#[must_use]
pub fn score(rule: &CategoryRule, term: &str) -> u32 {
    let term = term.trim().to_lowercase();
    let keyword_hits = rule
        .keywords
        .iter()
        .filter(|k| {
            term == **k || (k.chars().count() >= MIN_SUBSTRING_KEYWORD && term.contains(**k))
        })
        .count();
    let ending_hits = rule.endings.iter().filter(|e| term.ends_with(**e)).count();

    u32::try_from(keyword_hits).unwrap_or(u32::MAX) * KEYWORD_SCORE
        + u32::try_from(ending_hits).unwrap_or(u32::MAX) * ENDING_SCORE
}

/// Suggests a category for `term`.
///
/// The highest-scoring rule wins; ties go to the rule listed first. Terms
/// matching nothing get [`DEFAULT_CATEGORY`].
#[must_use]
pub fn suggest_category(term: &str) -> &'static str {
    let mut best: Option<(&'static str, u32)> = None;
    for rule in RULES {
        let s = score(rule, term);
        if s > 0 && best.is_none_or(|(_, top)| s > top) {
            best = Some((rule.category, s));
        }
    }
    best.map_or(DEFAULT_CATEGORY, |(category, _)| category)
}
