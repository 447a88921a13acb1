//! Writing-system catalogues.
//!
//! A [`Writing`] is an immutable, ordered description of one script's
//! character inventory, partitioned into five categories. The ordering is
//! the mapping contract: character `i` of a category corresponds to
//! character `i` of the same category in any paired writing.
//!
//! Expected category orders:
//!
//! - **Consonants**: the standard Aramaic order.
//! - **Vowels**: the Sedra `[a o e i u]` order, optionally extended with
//!   Eastern/Hebrew short E and long O at positions 6 and 7.
//! - **Diacritics**: the Sedra `[' , _ *]` order, that is Qushaya,
//!   Rukkakha, Linea Occultans and Seyame. Further marks such as verb or
//!   homograph dots go after these four.
//! - **Punctuation** and **other** symbols (crosses etc.) are optional.
//!
//! Construction performs no validation; aligned category lengths across a
//! pair of writings are a precondition of table construction, checkable
//! explicitly with [`Writing::check_alignment`].

use thiserror::Error;

/// One of the five ordered character categories of a [`Writing`].
///
/// [`Category::ALL`] lists the categories in the fixed order used when a
/// character table is built from a pair of writings. A source character
/// appearing in more than one category resolves to the latest category in
/// this order (last write wins).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Consonants, in the standard Aramaic order. Required.
    Consonants,
    /// Vowels, in the Sedra order. Required.
    Vowels,
    /// Diacritical marks, in the Sedra order. Optional.
    Diacritics,
    /// Punctuation marks. Optional.
    Punctuation,
    /// Other symbols, e.g. decorative crosses. Optional.
    Other,
}

impl Category {
    /// All categories, in table-construction order.
    pub const ALL: [Category; 5] = [
        Category::Consonants,
        Category::Vowels,
        Category::Diacritics,
        Category::Punctuation,
        Category::Other,
    ];

    /// Lowercase category name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Consonants => "consonants",
            Category::Vowels => "vowels",
            Category::Diacritics => "diacritics",
            Category::Punctuation => "punctuation",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Category length mismatch between two paired writings.
///
/// Produced only by the explicit [`Writing::check_alignment`] step; plain
/// table construction stays lenient and treats excess source positions as
/// unmapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "category `{category}` is misaligned: \
     {from_len} source characters but only {to_len} destination characters"
)]
pub struct AlignmentError {
    /// The misaligned category.
    pub category: Category,
    /// Length of the category in the source writing.
    pub from_len: usize,
    /// Length of the category in the destination writing.
    pub to_len: usize,
}

/// An immutable catalogue of one writing system's characters.
///
/// Consonants and vowels are required; diacritics, punctuation and other
/// symbols are optional. All sequences are stored exactly as given, with no
/// normalization, deduplication or validation.
///
/// # Example
///
/// ```rust
/// use aramaic_mapper::writing::Writing;
///
/// let sedra = Writing::new(
///     vec!['A', 'B', 'G', 'D'],
///     vec!['a', 'o', 'e', 'i', 'u'],
/// )
/// .with_diacritics(vec!['\'', ',', '_', '*']);
///
/// assert_eq!(sedra.consonants().len(), 4);
/// assert!(sedra.is_dotting('a'));
/// assert!(!sedra.is_dotting('B'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Writing {
    consonants: Vec<char>,
    vowels: Vec<char>,
    diacritics: Option<Vec<char>>,
    punctuation: Option<Vec<char>>,
    other: Option<Vec<char>>,
}

impl Writing {
    /// Create a writing from its required categories.
    ///
    /// Optional categories are absent until added with the `with_*`
    /// constructors.
    pub fn new(consonants: Vec<char>, vowels: Vec<char>) -> Self {
        Writing {
            consonants,
            vowels,
            diacritics: None,
            punctuation: None,
            other: None,
        }
    }

    /// Add the diacritics category.
    pub fn with_diacritics(mut self, diacritics: Vec<char>) -> Self {
        self.diacritics = Some(diacritics);
        self
    }

    /// Add the punctuation category.
    pub fn with_punctuation(mut self, punctuation: Vec<char>) -> Self {
        self.punctuation = Some(punctuation);
        self
    }

    /// Add the other-symbols category.
    pub fn with_other(mut self, other: Vec<char>) -> Self {
        self.other = Some(other);
        self
    }

    /// Consonants, in the standard Aramaic order.
    #[inline]
    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    /// Vowels, in the Sedra order.
    #[inline]
    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    /// Diacritics, if this writing carries any.
    #[inline]
    pub fn diacritics(&self) -> Option<&[char]> {
        self.diacritics.as_deref()
    }

    /// Punctuation, if this writing carries any.
    #[inline]
    pub fn punctuation(&self) -> Option<&[char]> {
        self.punctuation.as_deref()
    }

    /// Other symbols, if this writing carries any.
    #[inline]
    pub fn other(&self) -> Option<&[char]> {
        self.other.as_deref()
    }

    /// Uniform view of a category: `Some` for the required categories and
    /// for present optional ones, `None` for absent optional ones.
    pub fn category(&self, category: Category) -> Option<&[char]> {
        match category {
            Category::Consonants => Some(&self.consonants),
            Category::Vowels => Some(&self.vowels),
            Category::Diacritics => self.diacritics(),
            Category::Punctuation => self.punctuation(),
            Category::Other => self.other(),
        }
    }

    /// Whether `c` belongs to the given category of this writing.
    pub fn contains(&self, category: Category, c: char) -> bool {
        self.category(category)
            .map_or(false, |units| units.contains(&c))
    }

    /// Whether `c` is a dotting character of this writing, i.e. a vowel or
    /// a diacritic.
    ///
    /// Handy as the predicate for
    /// [`DottingClassifier`](crate::dotting::DottingClassifier).
    pub fn is_dotting(&self, c: char) -> bool {
        self.contains(Category::Vowels, c) || self.contains(Category::Diacritics, c)
    }

    /// Check that no category present in both `self` and `to` runs longer
    /// on the source side.
    ///
    /// A longer destination category is legitimate (e.g. the CAL vowel
    /// extensions at positions 6 and 7 have no Sedra counterpart); the
    /// unpaired tail is simply never produced. A longer *source* category is
    /// the degrading case: its tail would silently lose its mapping and pass
    /// through unchanged.
    ///
    /// Table construction does not require this check: it stays lenient.
    /// Callers wanting a fail-fast configuration check run this first, or
    /// use
    /// [`MapperBuilder::validate_alignment`](crate::mapper::MapperBuilder::validate_alignment).
    pub fn check_alignment(&self, to: &Writing) -> Result<(), AlignmentError> {
        for category in Category::ALL {
            if let (Some(from_units), Some(to_units)) =
                (self.category(category), to.category(category))
            {
                if from_units.len() > to_units.len() {
                    return Err(AlignmentError {
                        category,
                        from_len: from_units.len(),
                        to_len: to_units.len(),
                    });
                }
            }
        }
        Ok(())
    }
}
