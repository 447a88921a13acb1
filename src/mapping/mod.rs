//! Frozen character tables.
//!
//! A [`MappingTable`] maps single source characters to destination
//! replacement strings. Tables are built once, either from a pair of
//! [`Writing`]s ([`MappingTable::build`]) or from explicit entries
//! ([`MappingTable::from_entries`]), and expose no mutators afterward.
//!
//! The table distinguishes a character that **maps to the empty string**
//! (deliberate deletion during transliteration) from a character with **no
//! mapping at all** (identity pass-through); the two produce different
//! transform behavior.
//!
//! Alongside the character entries, a table carries a *multiples set*: the
//! registry of multi-character replacement fragments that consume exactly
//! one source character when produced by a substitution hook. See
//! [`Mapper::with_multiples`](crate::mapper::Mapper::with_multiples).

use rustc_hash::{FxHashMap, FxHashSet};

use crate::writing::{Category, Writing};

/// A frozen mapping from source characters to replacement strings.
///
/// # Construction
///
/// [`build`](MappingTable::build) zips the paired categories of two writings
/// in the fixed [`Category::ALL`] order. Optional categories contribute only
/// when present on both sides. If the destination category is shorter than
/// the source one, the excess source characters are simply left unmapped;
/// that leniency is deliberate, not an error. A source character recorded by
/// more than one category keeps the last recording.
///
/// # Example
///
/// ```rust
/// use aramaic_mapper::mapping::MappingTable;
/// use aramaic_mapper::writing::Writing;
///
/// let from = Writing::new(vec!['A', 'B'], vec!['a', 'o', 'e', 'i', 'u']);
/// let to = Writing::new(vec![')', 'b'], vec!['a', 'o', 'e', 'i', 'u']);
/// let table = MappingTable::build(&from, &to);
///
/// assert_eq!(table.get('A'), Some(")"));
/// assert_eq!(table.get('Z'), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: FxHashMap<char, Box<str>>,
    multiples: FxHashSet<Box<str>>,
}

impl MappingTable {
    /// Build the table for a pair of writings.
    ///
    /// Position `i` of each paired category of `from` maps to position `i`
    /// of the same category of `to`.
    pub fn build(from: &Writing, to: &Writing) -> Self {
        let mut entries = FxHashMap::default();
        for category in Category::ALL {
            let (Some(from_units), Some(to_units)) =
                (from.category(category), to.category(category))
            else {
                continue;
            };
            for (i, &fc) in from_units.iter().enumerate() {
                // A short destination category leaves the tail unmapped.
                if let Some(&tc) = to_units.get(i) {
                    entries.insert(fc, String::from(tc).into_boxed_str());
                }
            }
        }
        MappingTable {
            entries,
            multiples: FxHashSet::default(),
        }
    }

    /// Build a table from explicit `(source, replacement)` entries.
    ///
    /// Replacements may be empty (deletion) or longer than one character.
    /// Duplicate sources keep the last entry. This is the construction used
    /// for letter-ordinal tables fed to [`get_sort`](crate::sort::get_sort).
    ///
    /// # Example
    ///
    /// ```rust
    /// use aramaic_mapper::mapping::MappingTable;
    ///
    /// let ordinals = MappingTable::from_entries([('A', "a"), ('\'', "")]);
    /// assert_eq!(ordinals.get('A'), Some("a"));
    /// assert_eq!(ordinals.get('\''), Some(""));
    /// assert_eq!(ordinals.get('?'), None);
    /// ```
    pub fn from_entries<I, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, R)>,
        R: Into<Box<str>>,
    {
        MappingTable {
            entries: entries
                .into_iter()
                .map(|(c, replacement)| (c, replacement.into()))
                .collect(),
            multiples: FxHashSet::default(),
        }
    }

    /// Replacement for `c`, if one is recorded.
    ///
    /// `Some("")` means `c` is deliberately deleted; `None` means `c` has no
    /// mapping and passes through unchanged.
    #[inline]
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(|replacement| &**replacement)
    }

    /// Whether `c` has a recorded replacement (including the empty one).
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// Number of recorded source characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(source, replacement)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(&c, replacement)| (c, &**replacement))
    }

    /// Whether `fragment` is registered as a single-source-character
    /// multi-character replacement.
    #[inline]
    pub fn is_multiple(&self, fragment: &str) -> bool {
        !self.multiples.is_empty() && self.multiples.contains(fragment)
    }

    /// Iterate over the registered multiples, in no particular order.
    pub fn multiples(&self) -> impl Iterator<Item = &str> {
        self.multiples.iter().map(|fragment| &**fragment)
    }

    /// Construction-time registration; the table has no public mutators.
    pub(crate) fn register_multiples<I, R>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<Box<str>>,
    {
        self.multiples
            .extend(fragments.into_iter().map(Into::into));
    }
}
