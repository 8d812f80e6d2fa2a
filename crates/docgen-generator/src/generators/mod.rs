//! Text sources feeding the document generator.
//!
//! The generator only needs a handful of string shapes; anything that can
//! produce them (a word list, a corpus, a fixture) can back it.

pub mod lorem;
mod words;

/// Source of realistic-looking strings.
///
/// Implementations never fail; an exhausted source is a bug in the source.
pub trait TextSource {
    /// A paragraph of a few sentences. Must not contain a blank line.
    fn paragraph(&mut self) -> String;

    /// A short sentence ending in a period.
    fn sentence(&mut self) -> String;

    /// A full person name.
    fn name(&mut self) -> String;

    /// Free text of at most `max_chars` characters.
    fn text(&mut self, max_chars: usize) -> String;

    /// A fresh identifier.
    fn uuid(&mut self) -> uuid::Uuid;
}
