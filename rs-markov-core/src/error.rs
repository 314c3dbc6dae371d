use thiserror::Error;

/// Errors raised while parsing caller input.
///
/// Query execution itself never fails, and corpus read failures are
/// absorbed by [`crate::io::load_corpus`].
#[derive(Debug, Error)]
pub enum Error {
	#[error("unknown generation mode '{0}', expected 'all' or 'one'")]
	UnknownMode(String),
}
