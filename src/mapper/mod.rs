//! The transliteration engine.
//!
//! A [`Mapper`] owns the frozen [`MappingTable`] built from a pair of
//! [`Writing`]s and rewrites text one logical unit at a time. The default
//! engine performs one-to-one table lookups; a caller-supplied hook
//! ([`CustomHook`]) takes over when context-dependent rewriting is needed,
//! e.g. for source digraphs.
//!
//! # Cursor advancement
//!
//! After appending a fragment, the cursor advances by the fragment's
//! character count, except that:
//!
//! - an empty or absent fragment advances by exactly 1, and
//! - a fragment registered in the table's multiples set advances by exactly
//!   1, because such a fragment stands for a single consumed source
//!   character regardless of its own length.
//!
//! Most mappings rewrite one source character into one destination
//! character, so the two rules coincide. They part ways only under a hook:
//! a hook that collapses N source characters into an N-character fragment
//! needs no registration (the length-based advance consumes exactly the
//! recognized characters), while a hook that expands one source character
//! into a longer fragment registers that fragment as a multiple so the
//! cursor does not overrun.

mod strategy;

pub use strategy::{CustomHook, SubstitutionStrategy, TableLookup};

use smallvec::SmallVec;
use thiserror::Error;

use crate::mapping::MappingTable;
use crate::writing::{AlignmentError, Writing};

/// Transliteration engine from a source writing to a destination writing.
///
/// Stateless after construction: `transform` allocates only call-local
/// state, so a shared `Mapper` may serve concurrent callers freely.
///
/// # Example
///
/// ```rust
/// use aramaic_mapper::mapper::Mapper;
/// use aramaic_mapper::writing::Writing;
///
/// let sedra = Writing::new(vec!['L', 'A', 'D', 'N', 'H'], vec!['a', 'o', 'e', 'i', 'u']);
/// let cal = Writing::new(vec!['l', ')', 'd', 'n', 'h'], vec!['a', 'o', 'e', 'i', 'u']);
///
/// let to_cal = Mapper::new(sedra, cal);
/// assert_eq!(to_cal.transform("LADNH"), "l)dnh");
/// // Unmapped characters pass through unchanged.
/// assert_eq!(to_cal.transform("<LADNH>"), "<l)dnh>");
/// ```
///
/// # Hooked example
///
/// Sedra stores the `yi` sequence as `i;`; a hook recognizes the digraph
/// and emits the reordered pair, falling back to the table elsewhere:
///
/// ```rust
/// use aramaic_mapper::mapper::Mapper;
/// use aramaic_mapper::mapping::MappingTable;
/// use aramaic_mapper::writing::Writing;
///
/// let sedra = Writing::new(vec!['D', 'L', ';'], vec!['a', 'o', 'e', 'i', 'u']);
/// let cal = Writing::new(vec!['d', 'l', 'y'], vec!['a', 'o', 'e', 'i', 'u']);
///
/// let to_cal = Mapper::with_hook(sedra, cal, |word: &[char], i, table: &MappingTable, _| {
///     let c = word[i];
///     if c == 'i' && word.get(i + 1) == Some(&';') {
///         return Some("yi".to_string());
///     }
///     Some(table.get(c).map(str::to_owned).unwrap_or_else(|| c.to_string()))
/// });
///
/// assert_eq!(to_cal.transform("Di;L"), "dyil");
/// ```
#[derive(Clone, Debug)]
pub struct Mapper<S: SubstitutionStrategy = TableLookup> {
    from_writing: Writing,
    to_writing: Writing,
    table: MappingTable,
    strategy: S,
}

impl Mapper<TableLookup> {
    /// Create an engine with the default one-to-one lookup strategy.
    pub fn new(from_writing: Writing, to_writing: Writing) -> Self {
        Mapper::with_strategy(from_writing, to_writing, TableLookup)
    }

    /// Create an engine driven by a context-free substitution hook.
    ///
    /// The hook replaces the default lookup at every position and owns all
    /// lookahead logic; see [`CustomHook`].
    pub fn with_hook<F>(
        from_writing: Writing,
        to_writing: Writing,
        hook: F,
    ) -> Mapper<CustomHook<F>>
    where
        F: Fn(&[char], usize, &MappingTable, Option<&()>) -> Option<String>,
    {
        Mapper::with_strategy(from_writing, to_writing, CustomHook::new(hook))
    }

    /// Create an engine driven by a hook that receives caller context from
    /// [`transform_with`](Mapper::transform_with).
    pub fn with_contextual_hook<F, C>(
        from_writing: Writing,
        to_writing: Writing,
        hook: F,
    ) -> Mapper<CustomHook<F, C>>
    where
        F: Fn(&[char], usize, &MappingTable, Option<&C>) -> Option<String>,
    {
        Mapper::with_strategy(from_writing, to_writing, CustomHook::new(hook))
    }
}

impl<S: SubstitutionStrategy> Mapper<S> {
    /// Create an engine with an explicit strategy.
    pub fn with_strategy(from_writing: Writing, to_writing: Writing, strategy: S) -> Self {
        let table = MappingTable::build(&from_writing, &to_writing);
        Mapper {
            from_writing,
            to_writing,
            table,
            strategy,
        }
    }

    /// Register multi-character fragments that consume a single source
    /// character. Construction-time only; the table is frozen afterward.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aramaic_mapper::mapper::Mapper;
    /// use aramaic_mapper::mapping::MappingTable;
    /// use aramaic_mapper::writing::Writing;
    ///
    /// let from = Writing::new(vec!['P', 'X'], vec!['a', 'o', 'e', 'i', 'u']);
    /// let to = Writing::new(vec!['p', 'x'], vec!['a', 'o', 'e', 'i', 'u']);
    ///
    /// // 'P' expands to the two-character fragment "ph" but consumes only
    /// // itself, so "ph" is registered as a multiple.
    /// let mapper = Mapper::with_hook(from, to, |word: &[char], i, table: &MappingTable, _| {
    ///     let c = word[i];
    ///     if c == 'P' {
    ///         return Some("ph".to_string());
    ///     }
    ///     Some(table.get(c).map(str::to_owned).unwrap_or_else(|| c.to_string()))
    /// })
    /// .with_multiples(["ph"]);
    ///
    /// // Without the registration the cursor would skip the 'X'.
    /// assert_eq!(mapper.transform("PX"), "phx");
    /// ```
    pub fn with_multiples<I, R>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Box<str>>,
    {
        self.table.register_multiples(fragments);
        self
    }

    /// The source writing system.
    pub fn from_writing(&self) -> &Writing {
        &self.from_writing
    }

    /// The destination writing system.
    pub fn to_writing(&self) -> &Writing {
        &self.to_writing
    }

    /// The frozen character table.
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Transliterate `word`.
    ///
    /// The empty word comes back empty; unmapped characters pass through
    /// unchanged. Runs in time linear in the input length, each position
    /// visited exactly once.
    pub fn transform(&self, word: &str) -> String {
        self.transform_impl(word, None)
    }

    /// Transliterate `word`, handing `context` to the strategy at every
    /// position.
    pub fn transform_with(&self, word: &str, context: &S::Context) -> String {
        self.transform_impl(word, Some(context))
    }

    fn transform_impl(&self, word: &str, context: Option<&S::Context>) -> String {
        if word.is_empty() {
            return String::new();
        }
        let units: SmallVec<[char; 32]> = word.chars().collect();
        let mut output = String::with_capacity(word.len());
        let mut index = 0;
        while index < units.len() {
            index += match self.strategy.fragment(&units, index, &self.table, context) {
                Some(fragment) => {
                    output.push_str(&fragment);
                    let consumed = fragment.chars().count();
                    if consumed > 0 && !self.table.is_multiple(&fragment) {
                        consumed
                    } else {
                        1
                    }
                }
                // No contribution; skip the character.
                None => 1,
            };
        }
        output
    }
}

/// Builder for constructing a [`Mapper`] with optional validation.
///
/// The plain constructors keep the lenient contract of the engine: a
/// category length mismatch between the two writings silently leaves excess
/// source positions unmapped. The builder's
/// [`validate_alignment`](MapperBuilder::validate_alignment) step turns that
/// contract violation into a fail-fast configuration error instead.
///
/// # Example
///
/// ```rust
/// use aramaic_mapper::mapper::MapperBuilder;
/// use aramaic_mapper::writing::Writing;
///
/// let from = Writing::new(vec!['A', 'B'], vec!['a', 'o', 'e', 'i', 'u']);
/// let to = Writing::new(vec![')', 'b'], vec!['a', 'o', 'e', 'i', 'u']);
///
/// let mapper = MapperBuilder::new()
///     .from_writing(from)
///     .to_writing(to)
///     .validate_alignment()
///     .build()
///     .expect("aligned catalogues");
/// assert_eq!(mapper.transform("AB"), ")b");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapperBuilder {
    from_writing: Option<Writing>,
    to_writing: Option<Writing>,
    multiples: Vec<Box<str>>,
    validate_alignment: bool,
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// No source writing was provided
    #[error("Source writing is required. Use .from_writing() to set it.")]
    MissingFromWriting,
    /// No destination writing was provided
    #[error("Destination writing is required. Use .to_writing() to set it.")]
    MissingToWriting,
    /// The writings fail the opt-in alignment check
    #[error(transparent)]
    Misaligned(#[from] AlignmentError),
}

impl MapperBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        MapperBuilder::default()
    }

    /// Set the source writing system.
    pub fn from_writing(mut self, writing: Writing) -> Self {
        self.from_writing = Some(writing);
        self
    }

    /// Set the destination writing system.
    pub fn to_writing(mut self, writing: Writing) -> Self {
        self.to_writing = Some(writing);
        self
    }

    /// Register single-source-character multi-character fragments; see
    /// [`Mapper::with_multiples`].
    pub fn multiples<I, R>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Box<str>>,
    {
        self.multiples.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Fail `build` with [`BuilderError::Misaligned`] when any
    /// pairwise-present category runs longer on the source side, i.e. when
    /// some source characters would silently lose their mapping; see
    /// [`Writing::check_alignment`].
    pub fn validate_alignment(mut self) -> Self {
        self.validate_alignment = true;
        self
    }

    /// Build a default table-lookup engine.
    pub fn build(self) -> Result<Mapper<TableLookup>, BuilderError> {
        let (from_writing, to_writing, multiples) = self.into_parts()?;
        Ok(Mapper::new(from_writing, to_writing).with_multiples(multiples))
    }

    /// Build a hook-driven engine.
    pub fn build_with_hook<F>(self, hook: F) -> Result<Mapper<CustomHook<F>>, BuilderError>
    where
        F: Fn(&[char], usize, &MappingTable, Option<&()>) -> Option<String>,
    {
        let (from_writing, to_writing, multiples) = self.into_parts()?;
        Ok(Mapper::with_hook(from_writing, to_writing, hook).with_multiples(multiples))
    }

    fn into_parts(self) -> Result<(Writing, Writing, Vec<Box<str>>), BuilderError> {
        let from_writing = self.from_writing.ok_or(BuilderError::MissingFromWriting)?;
        let to_writing = self.to_writing.ok_or(BuilderError::MissingToWriting)?;
        if self.validate_alignment {
            from_writing.check_alignment(&to_writing)?;
        }
        Ok((from_writing, to_writing, self.multiples))
    }
}
