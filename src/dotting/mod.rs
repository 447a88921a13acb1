//! Dotting detection and removal.
//!
//! "Dotting" is the collective term for the vowel and diacritic marks
//! layered over a consonantal skeleton. Which characters count as dotting
//! differs per script, so both operations here are parameterized by a
//! caller-supplied character predicate rather than coupled to any
//! [`Writing`](crate::writing::Writing). A writing's
//! [`is_dotting`](crate::writing::Writing::is_dotting) is the usual
//! predicate source.
//!
//! # Example
//!
//! ```rust
//! use std::borrow::Cow;
//! use aramaic_mapper::dotting::DottingClassifier;
//!
//! let vowels = ['a', 'o', 'e', 'i', 'u'];
//! let classifier = DottingClassifier::new(move |c| vowels.contains(&c));
//!
//! assert!(classifier.has_dotting("BaG"));
//! assert_eq!(classifier.clear_dotting("BaG"), "BG");
//!
//! // A word with no dotting comes back borrowed, not copied.
//! assert!(matches!(classifier.clear_dotting("BG"), Cow::Borrowed("BG")));
//! ```

use std::borrow::Cow;

/// Whole-word dotting operations over a character predicate.
///
/// The classifier closes over an `is_dotting` predicate classifying the
/// vowels and diacritics of one script, and lifts it to word level.
#[derive(Clone, Copy, Debug)]
pub struct DottingClassifier<P> {
    is_dotting: P,
}

impl<P> DottingClassifier<P>
where
    P: Fn(char) -> bool,
{
    /// Create a classifier from a dotting predicate.
    pub fn new(is_dotting: P) -> Self {
        DottingClassifier { is_dotting }
    }

    /// Whether `word` carries any dotting character.
    ///
    /// Scans left to right and stops at the first match; the empty word has
    /// none.
    pub fn has_dotting(&self, word: &str) -> bool {
        word.chars().any(|c| (self.is_dotting)(c))
    }

    /// Strip every dotting character from `word`, leaving the consonantal
    /// skeleton.
    ///
    /// When no character matches the predicate the input is returned as
    /// `Cow::Borrowed`, so callers can detect "no dotting was present"
    /// without comparing contents. Idempotent: clearing a skeleton returns
    /// it unchanged.
    pub fn clear_dotting<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match word.char_indices().find(|&(_, c)| (self.is_dotting)(c)) {
            None => Cow::Borrowed(word),
            Some((start, _)) => {
                let mut skeleton = String::with_capacity(word.len());
                skeleton.push_str(&word[..start]);
                skeleton.extend(
                    word[start..].chars().filter(|&c| !(self.is_dotting)(c)),
                );
                Cow::Owned(skeleton)
            }
        }
    }
}

/// Seam between dotting removal and the ordinal comparator.
///
/// Implemented by [`DottingClassifier`], by plain function pointers of the
/// matching shape, and by references to either, so
/// [`get_sort`](crate::sort::get_sort) accepts any of them.
pub trait DottingRemover {
    /// Reduce `word` to its consonantal skeleton.
    fn remove_dotting<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

impl<P> DottingRemover for DottingClassifier<P>
where
    P: Fn(char) -> bool,
{
    #[inline]
    fn remove_dotting<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.clear_dotting(word)
    }
}

impl DottingRemover for for<'a> fn(&'a str) -> Cow<'a, str> {
    #[inline]
    fn remove_dotting<'a>(&self, word: &'a str) -> Cow<'a, str> {
        (*self)(word)
    }
}

impl<R> DottingRemover for &R
where
    R: DottingRemover + ?Sized,
{
    #[inline]
    fn remove_dotting<'a>(&self, word: &'a str) -> Cow<'a, str> {
        (**self).remove_dotting(word)
    }
}
