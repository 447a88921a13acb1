//! Ordering of transliterated Sedra words.

mod common;

use std::cmp::Ordering;

use aramaic_mapper::prelude::*;
use common::{is_sedra_dotting, letter_ordinals};

fn sedra_sort() -> impl Fn(Option<&str>, Option<&str>) -> Ordering {
    get_sort(letter_ordinals(), DottingClassifier::new(is_sedra_dotting))
}

#[test]
fn test_absent_word_sorts_first() {
    let sort = sedra_sort();
    let word = "DXSR;A-DI;L;IOS";
    assert_eq!(sort(None, Some(word)), Ordering::Less);
    assert_eq!(sort(Some(word), None), Ordering::Greater);
    assert_eq!(sort(None, None), Ordering::Equal);
}

#[test]
fn test_blank_word_sorts_as_absent() {
    let sort = sedra_sort();
    assert_eq!(sort(Some(""), None), Ordering::Equal);
    assert_eq!(sort(Some(""), Some("DXSR;A-DI;L;IOS")), Ordering::Less);
}

#[test]
fn test_vocalised_word_sorts_after_its_skeleton() {
    let sort = sedra_sort();
    assert_eq!(
        sort(Some("DXSR;A-DI;L;IOS"), Some("D'XeSaRi;aA-D,I,i;Li;I'oOS")),
        Ordering::Less
    );
}

#[test]
fn test_consonant_only_ordering() {
    let sort = sedra_sort();
    assert_eq!(
        sort(Some("LBELDBB;CON"), Some("DXSR;A-DI;L;IOS")),
        Ordering::Greater
    );
    assert_eq!(
        sort(Some("DXSR;A-DI;L;IOS"), Some("LBELDBB;CON")),
        Ordering::Less
    );
    assert_eq!(
        sort(Some("DXSR;A-DI;L;IOS"), Some("DXSR;A-DI;L;IOS")),
        Ordering::Equal
    );
}

#[test]
fn test_vowel_order_decides_tie_break() {
    // Equal skeletons fall back to the full words, where the ordinal table
    // ranks the vowels in Sedra order after every consonant.
    let sort = sedra_sort();
    assert_eq!(sort(Some("ABa"), Some("ABe")), Ordering::Less);
    assert_eq!(sort(Some("ABu"), Some("ABa")), Ordering::Greater);
}

#[test]
fn test_sorting_a_word_list() {
    let sort = sedra_sort();
    let mut words = vec![
        "LBELDBB;CON",
        "DXSR;A-DI;L;IOS",
        "AaB,oHaOH_;",
        "ABHOH;",
        "BTSLON;XA",
    ];
    words.sort_by(|a, b| sort(Some(*a), Some(*b)));
    assert_eq!(
        words,
        vec![
            "ABHOH;",
            "AaB,oHaOH_;",
            "BTSLON;XA",
            "DXSR;A-DI;L;IOS",
            "LBELDBB;CON",
        ]
    );
}

#[test]
fn test_seyame_ignored_in_tie_break() {
    // The seyame ordinal is empty, so a seyame-only difference ties.
    let sort = sedra_sort();
    assert_eq!(sort(Some("MLCA"), Some("MLC*A")), Ordering::Equal);
}
