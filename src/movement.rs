/// Coordinates of a cell in the tunnel.
pub type Coord = (i32, i32, i32);

/// Cost of a movement along a single axis.
pub const AXIS_COST: u32 = 10;

/// Cost of a movement along two axes at once.
pub const DIAGONAL_COST: u32 = 14;

/// One of the 18 directional movements a cell can permit.
///
/// Codes 1-6 are axis-aligned, codes 7-18 are two-axis diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
    PosXPosY,
    PosXNegY,
    NegXPosY,
    NegXNegY,
    PosXPosZ,
    PosXNegZ,
    NegXPosZ,
    NegXNegZ,
    PosYPosZ,
    PosYNegZ,
    NegYPosZ,
    NegYNegZ,
}

impl Movement {
    /// Decode a wire-format movement code. Codes outside 1-18 are not
    /// movements and must be rejected by the caller.
    pub fn from_code(code: u8) -> Option<Self> {
        let movement = match code {
            1 => Movement::PosX,
            2 => Movement::NegX,
            3 => Movement::PosY,
            4 => Movement::NegY,
            5 => Movement::PosZ,
            6 => Movement::NegZ,
            7 => Movement::PosXPosY,
            8 => Movement::PosXNegY,
            9 => Movement::NegXPosY,
            10 => Movement::NegXNegY,
            11 => Movement::PosXPosZ,
            12 => Movement::PosXNegZ,
            13 => Movement::NegXPosZ,
            14 => Movement::NegXNegZ,
            15 => Movement::PosYPosZ,
            16 => Movement::PosYNegZ,
            17 => Movement::NegYPosZ,
            18 => Movement::NegYNegZ,
            _ => return None,
        };
        Some(movement)
    }

    /// Coordinate delta of this movement.
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Movement::PosX => (1, 0, 0),
            Movement::NegX => (-1, 0, 0),
            Movement::PosY => (0, 1, 0),
            Movement::NegY => (0, -1, 0),
            Movement::PosZ => (0, 0, 1),
            Movement::NegZ => (0, 0, -1),
            Movement::PosXPosY => (1, 1, 0),
            Movement::PosXNegY => (1, -1, 0),
            Movement::NegXPosY => (-1, 1, 0),
            Movement::NegXNegY => (-1, -1, 0),
            Movement::PosXPosZ => (1, 0, 1),
            Movement::PosXNegZ => (1, 0, -1),
            Movement::NegXPosZ => (-1, 0, 1),
            Movement::NegXNegZ => (-1, 0, -1),
            Movement::PosYPosZ => (0, 1, 1),
            Movement::PosYNegZ => (0, 1, -1),
            Movement::NegYPosZ => (0, -1, 1),
            Movement::NegYNegZ => (0, -1, -1),
        }
    }

    /// Fixed cost of taking this movement.
    pub fn cost(self) -> u32 {
        match self {
            Movement::PosX
            | Movement::NegX
            | Movement::PosY
            | Movement::NegY
            | Movement::PosZ
            | Movement::NegZ => AXIS_COST,
            _ => DIAGONAL_COST,
        }
    }

    /// Coordinates reached by taking this movement from `from`.
    pub fn apply(self, from: Coord) -> Coord {
        let (dx, dy, dz) = self.delta();
        (from.0 + dx, from.1 + dy, from.2 + dz)
    }
}
