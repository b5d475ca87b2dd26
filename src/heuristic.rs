use crate::movement::{Coord, DIAGONAL_COST};

/// Manhattan distance between two coordinates.
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) + a.2.abs_diff(b.2)
}

/// Cost-to-go estimate from `from` to `goal`: Manhattan distance scaled by
/// the diagonal movement cost.
///
/// The scaling can exceed the true remaining cost (a single axis step costs
/// 10, a single diagonal covers two units for 14), so A* guided by it may
/// trade optimality for goal-directed expansion. UCS is the mode with a
/// cost-optimality guarantee.
pub fn estimate(from: Coord, goal: Coord) -> u32 {
    manhattan(from, goal) * DIAGONAL_COST
}
