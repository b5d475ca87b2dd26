use thiserror::Error;

use crate::movement::Coord;

/// Errors surfaced while loading a tunnel or running a search.
#[derive(Debug, Error)]
pub enum TunnelError {
    /// Reading or writing one of the interface files failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input text does not follow the line format.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The algorithm line names no known search strategy.
    #[error("unknown algorithm {0:?}, expected BFS, UCS or A*")]
    UnknownAlgorithm(String),

    /// A declared movement code is outside 1-18.
    #[error("invalid movement code {code} declared at {at:?}")]
    InvalidMovement { code: u8, at: Coord },

    /// An axis extent is zero or negative.
    #[error("tunnel dimensions {0:?} must be positive on every axis")]
    InvalidDimensions(Coord),

    /// A declared point lies outside the tunnel bounds.
    #[error("declared point {0:?} lies outside the tunnel bounds")]
    OutOfBounds(Coord),

    /// An in-bounds coordinate was reached that no input line declared.
    /// Distinct from out-of-bounds, which is ordinary "no passage".
    #[error("no point declared at in-bounds coordinate {0:?}")]
    UndeclaredPoint(Coord),
}

pub type Result<T> = std::result::Result<T, TunnelError>;
