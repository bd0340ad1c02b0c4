use otic_ir::AutomatonError;
use thiserror::Error;

/// Errors surfaced by the successor engines and the inclusion search.
///
/// Both variants are caller-input errors: the engines never fail at run time
/// on well-formed input. A disabled action or a fully elapsed configuration
/// is a normal outcome, not an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The two-automaton letterword encoding is only defined for words with
    /// at most two positions and at most two letters; anything larger is
    /// rejected rather than guessed at.
    #[error("unsupported letterword shape: {positions} positions, {letters} letters")]
    UnsupportedShape { positions: usize, letters: usize },

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
