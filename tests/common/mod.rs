//! Shared Sedra and CAL fixtures for the integration suites.
//!
//! The catalogues mirror the ASCII Sedra 3 encoding and the CAL code of
//! Classical Syriac: 22 consonants in the standard Aramaic order, the Sedra
//! `[a o e i u]` vowels (CAL adds Eastern short E and long O at positions 6
//! and 7), and the four Sedra diacritics.

#![allow(dead_code)]

use aramaic_mapper::prelude::*;

pub const SEDRA_CONSONANTS: [char; 22] = [
    'A', 'B', 'G', 'D', 'H', 'O', 'Z', 'K', 'Y', ';', 'C', 'L', 'M', 'N', 'S', 'E', 'I', '/',
    'X', 'R', 'W', 'T',
];

pub const CAL_CONSONANTS: [char; 22] = [
    ')', 'b', 'g', 'd', 'h', 'w', 'z', 'x', 'T', 'y', 'k', 'l', 'm', 'n', 's', '(', 'p', 'c',
    'q', 'r', '$', 't',
];

pub const VOWELS: [char; 5] = ['a', 'o', 'e', 'i', 'u'];

pub const DIACRITICS: [char; 4] = ['\'', ',', '_', '*'];

pub fn sedra_writing() -> Writing {
    Writing::new(SEDRA_CONSONANTS.to_vec(), VOWELS.to_vec()).with_diacritics(DIACRITICS.to_vec())
}

pub fn cal_writing() -> Writing {
    let mut vowels = VOWELS.to_vec();
    vowels.extend(['E', 'O']);
    Writing::new(CAL_CONSONANTS.to_vec(), vowels).with_diacritics(DIACRITICS.to_vec())
}

pub fn is_sedra_consonant(c: char) -> bool {
    SEDRA_CONSONANTS.contains(&c)
}

pub fn is_sedra_dotting(c: char) -> bool {
    VOWELS.contains(&c) || DIACRITICS.contains(&c)
}

/// Letter ordinal values used for sorting:
/// `a b c d e f g h i j k l m n o p q r s t u v - A O E I U`.
pub fn letter_ordinals() -> MappingTable {
    MappingTable::from_entries([
        ('A', "a"),
        ('B', "b"),
        ('G', "c"),
        ('D', "d"),
        ('H', "e"),
        ('O', "f"),
        ('Z', "g"),
        ('K', "h"),
        ('Y', "i"),
        (';', "j"),
        ('C', "k"),
        ('L', "l"),
        ('M', "m"),
        ('N', "n"),
        ('S', "o"),
        ('E', "p"),
        ('I', "q"),
        ('/', "r"),
        ('X', "s"),
        ('R', "t"),
        ('W', "u"),
        ('T', "v"),
        ('a', "w"),
        ('o', "x"),
        ('e', "y"),
        ('i', "z"),
        ('u', "{"),
        ('\'', ""),
        (',', ","),
        ('_', ""),
        ('*', ""),
    ])
}

/// Customized Sedra to CAL mapping: glide/vowel pairs are stored reversed in
/// Sedra and need reordering on the way out.
pub fn sedra_hook(
    word: &[char],
    index: usize,
    table: &MappingTable,
    _context: Option<&()>,
) -> Option<String> {
    let map = |c: char| {
        table
            .get(c)
            .map(str::to_owned)
            .unwrap_or_else(|| c.to_string())
    };
    let c = word[index];
    let next = word.get(index + 1).copied();
    let followed_by_consonant = word
        .get(index + 2)
        .copied()
        .map_or(false, is_sedra_consonant);
    let fragment = match c {
        // Sedra stores (yi) as (i;)
        'i' if next == Some(';') && followed_by_consonant => "yi".to_string(),
        // Sedra stores (wu) as (uO)
        'u' if next == Some('O') && followed_by_consonant => "wu".to_string(),
        // Eastern O is stored as (oO) in Sedra
        'o' if next == Some('O') && followed_by_consonant => "wO".to_string(),
        _ => map(c),
    };
    Some(fragment)
}
