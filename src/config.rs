use std::fmt;
use std::str::FromStr;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::TunnelError;
use crate::movement::Coord;

/// Search strategy selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bfs,
    Ucs,
    AStar,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Ucs => "UCS",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = TunnelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BFS" => Ok(Algorithm::Bfs),
            "UCS" => Ok(Algorithm::Ucs),
            "A*" => Ok(Algorithm::AStar),
            other => Err(TunnelError::UnknownAlgorithm(other.to_owned())),
        }
    }
}

/// One declared cell: its coordinates and the raw movement codes it permits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointConfig {
    pub coordinates: Coord,
    pub movements: Vec<u8>,
}

impl PointConfig {
    pub fn new(coordinates: Coord, movements: impl Into<Vec<u8>>) -> Self {
        PointConfig {
            coordinates,
            movements: movements.into(),
        }
    }
}

/// Full description of a tunnel and the search to run on it.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
pub struct TunnelConfig {
    pub algorithm: Algorithm,
    pub dimensions: Coord,
    pub start: Coord,
    pub goal: Coord,
    #[builder(default)]
    pub points: Vec<PointConfig>,
}
