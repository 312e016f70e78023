//! Integration tests for preposition + article contraction.

use frasario_grammar::contract;
use frasario_grammar::contraction::{entries, lookup};

#[test]
fn full_singular_table() {
    let expected = [
        ("di", ["del", "dello", "della", "dell'"]),
        ("a", ["al", "allo", "alla", "all'"]),
        ("da", ["dal", "dallo", "dalla", "dall'"]),
        ("in", ["nel", "nello", "nella", "nell'"]),
        ("su", ["sul", "sullo", "sulla", "sull'"]),
    ];
    for (prep, forms) in expected {
        for (article, fused) in ["il", "lo", "la", "l'"].iter().zip(forms) {
            assert_eq!(contract(prep, article), fused, "{prep} + {article}");
        }
    }
}

#[test]
fn plural_rows() {
    assert_eq!(contract("di", "gli"), "degli");
    assert_eq!(contract("in", "i"), "nei");
    assert_eq!(contract("su", "le"), "sulle");
}

#[test]
fn unknown_pairs_are_left_unfused() {
    assert_eq!(contract("con", "il"), "con il");
    assert_eq!(contract("per", "la"), "per la");
    assert_eq!(lookup("tra", "il"), None);
}

#[test]
fn table_is_complete() {
    assert_eq!(entries().len(), 35);
}
