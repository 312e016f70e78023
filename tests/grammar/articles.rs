//! Integration tests for article resolution.

use frasario_grammar::{
    Gender, MorphProfile, Number, SoundClass, attach, classify, resolve_articles,
};

fn articles_for(word: &str) -> (String, String) {
    let set = resolve_articles(classify(word));
    (set.with_definite(word), set.with_indefinite(word))
}

#[test]
fn singular_article_table() {
    let cases = [
        ("libro", "il libro", "un libro"),
        ("zaino", "lo zaino", "uno zaino"),
        ("albero", "l'albero", "un albero"),
        ("casa", "la casa", "una casa"),
        ("studentessa", "la studentessa", "una studentessa"),
        ("isola", "l'isola", "un'isola"),
    ];
    for (word, definite, indefinite) in cases {
        assert_eq!(articles_for(word), (definite.to_string(), indefinite.to_string()));
    }
}

#[test]
fn plural_article_table() {
    use Gender::{Feminine, Masculine};
    use SoundClass::{Cluster, Consonant, Vowel};

    let cases = [
        (Masculine, Consonant, "i", "dei"),
        (Masculine, Cluster, "gli", "degli"),
        (Masculine, Vowel, "gli", "degli"),
        (Feminine, Consonant, "le", "delle"),
        (Feminine, Vowel, "le", "delle"),
    ];
    for (gender, sound, definite, indefinite) in cases {
        let set = resolve_articles(MorphProfile::new(gender, Number::Plural, sound));
        assert_eq!(set.definite, definite);
        assert_eq!(set.indefinite, indefinite);
    }
}

#[test]
fn vowel_profiles_always_elide_definite() {
    for gender in [Gender::Masculine, Gender::Feminine] {
        let set = resolve_articles(MorphProfile::new(gender, Number::Singular, SoundClass::Vowel));
        assert_eq!(set.definite, "l'");
    }
}

#[test]
fn attach_spacing() {
    assert_eq!(attach("l'", "acqua"), "l'acqua");
    assert_eq!(attach("il", "pane"), "il pane");
    assert_eq!(attach("dell'", "isola"), "dell'isola");
}
