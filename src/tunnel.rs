use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::config::{Algorithm, TunnelConfig};
use crate::error::{Result, TunnelError};
use crate::movement::{Coord, Movement};

/// One addressable cell with its fixed set of legal outgoing movements.
#[derive(Debug, Clone)]
pub struct Point {
    pub coordinates: Coord,
    pub movements: SmallVec<[Movement; 18]>,
}

/// The bounded 3D space of declared points, plus the run parameters.
///
/// Read-only once built; traversal state lives with the search, so the same
/// tunnel can serve repeated runs.
#[derive(Debug)]
pub struct Tunnel {
    pub algorithm: Algorithm,
    pub dimensions: Coord,
    pub start: Coord,
    pub goal: Coord,
    points: IndexMap<Coord, Point>,
}

impl Tunnel {
    pub fn from_config(config: TunnelConfig) -> Result<Self> {
        let (max_x, max_y, max_z) = config.dimensions;
        if max_x <= 0 || max_y <= 0 || max_z <= 0 {
            return Err(TunnelError::InvalidDimensions(config.dimensions));
        }

        let mut points = IndexMap::with_capacity(config.points.len());
        for declared in &config.points {
            let at = declared.coordinates;
            let movements = declared
                .movements
                .iter()
                .map(|&code| {
                    Movement::from_code(code).ok_or(TunnelError::InvalidMovement { code, at })
                })
                .collect::<Result<SmallVec<_>>>()?;
            let point = Point {
                coordinates: at,
                movements,
            };
            // Re-declaring a coordinate replaces the earlier declaration.
            points.insert(at, point);
        }

        let tunnel = Tunnel {
            algorithm: config.algorithm,
            dimensions: config.dimensions,
            start: config.start,
            goal: config.goal,
            points,
        };
        if let Some(outside) = tunnel.points.keys().find(|&&c| !tunnel.in_bounds(c)) {
            return Err(TunnelError::OutOfBounds(*outside));
        }
        Ok(tunnel)
    }

    pub fn in_bounds(&self, (x, y, z): Coord) -> bool {
        let (max_x, max_y, max_z) = self.dimensions;
        (0..max_x).contains(&x) && (0..max_y).contains(&y) && (0..max_z).contains(&z)
    }

    /// Declared point at `coordinates`, if any.
    pub fn point(&self, coordinates: Coord) -> Option<&Point> {
        self.points.get(&coordinates)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Resolve the cell reached by taking `movement` from `point`.
    ///
    /// An out-of-bounds destination is no passage. An in-bounds destination
    /// that no input line declared is a data-consistency fault, not a wall.
    pub fn neighbor(&self, point: &Point, movement: Movement) -> Result<Option<(&Point, u32)>> {
        let next = movement.apply(point.coordinates);
        if !self.in_bounds(next) {
            return Ok(None);
        }
        match self.points.get(&next) {
            Some(neighbor) => Ok(Some((neighbor, movement.cost()))),
            None => Err(TunnelError::UndeclaredPoint(next)),
        }
    }

    pub fn is_goal(&self, point: &Point) -> bool {
        point.coordinates == self.goal
    }

    /// Dense index of an in-bounds coordinate, used for visited bookkeeping.
    pub fn index_of(&self, (x, y, z): Coord) -> usize {
        let (max_x, max_y, _) = self.dimensions;
        ((z * max_y + y) * max_x + x) as usize
    }

    pub fn cell_count(&self) -> usize {
        let (max_x, max_y, max_z) = self.dimensions;
        (max_x * max_y * max_z) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PointConfig, TunnelConfigBuilder};

    fn tunnel_with_points(points: Vec<PointConfig>) -> Result<Tunnel> {
        let config = TunnelConfigBuilder::default()
            .algorithm(Algorithm::Ucs)
            .dimensions((3, 3, 3))
            .start((0, 0, 0))
            .goal((2, 2, 2))
            .points(points)
            .build()
            .unwrap();
        Tunnel::from_config(config)
    }

    #[test]
    fn bounds_are_half_open_per_axis() {
        let tunnel = tunnel_with_points(vec![]).unwrap();
        assert!(tunnel.in_bounds((0, 0, 0)));
        assert!(tunnel.in_bounds((2, 2, 2)));
        assert!(!tunnel.in_bounds((3, 0, 0)));
        assert!(!tunnel.in_bounds((0, -1, 0)));
        assert!(!tunnel.in_bounds((0, 0, 3)));
    }

    #[test]
    fn neighbor_resolves_declared_points_with_cost() {
        let tunnel = tunnel_with_points(vec![
            PointConfig::new((0, 0, 0), [1, 7]),
            PointConfig::new((1, 0, 0), [2]),
            PointConfig::new((1, 1, 0), []),
        ])
        .unwrap();
        let start = tunnel.point((0, 0, 0)).unwrap();

        let (axis, cost) = tunnel.neighbor(start, Movement::PosX).unwrap().unwrap();
        assert_eq!(axis.coordinates, (1, 0, 0));
        assert_eq!(cost, 10);

        let (diagonal, cost) = tunnel.neighbor(start, Movement::PosXPosY).unwrap().unwrap();
        assert_eq!(diagonal.coordinates, (1, 1, 0));
        assert_eq!(cost, 14);
    }

    #[test]
    fn out_of_bounds_neighbor_is_no_passage() {
        let tunnel = tunnel_with_points(vec![PointConfig::new((0, 0, 0), [2])]).unwrap();
        let start = tunnel.point((0, 0, 0)).unwrap();
        assert!(tunnel.neighbor(start, Movement::NegX).unwrap().is_none());
    }

    #[test]
    fn undeclared_in_bounds_neighbor_is_a_fault() {
        let tunnel = tunnel_with_points(vec![PointConfig::new((0, 0, 0), [1])]).unwrap();
        let start = tunnel.point((0, 0, 0)).unwrap();
        assert!(matches!(
            tunnel.neighbor(start, Movement::PosX),
            Err(TunnelError::UndeclaredPoint((1, 0, 0)))
        ));
    }

    #[test]
    fn rejects_movement_codes_outside_the_table() {
        let err = tunnel_with_points(vec![PointConfig::new((0, 0, 0), [19])]).unwrap_err();
        assert!(matches!(
            err,
            TunnelError::InvalidMovement { code: 19, at: (0, 0, 0) }
        ));
    }

    #[test]
    fn rejects_points_declared_outside_the_bounds() {
        let err = tunnel_with_points(vec![PointConfig::new((3, 0, 0), [])]).unwrap_err();
        assert!(matches!(err, TunnelError::OutOfBounds((3, 0, 0))));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let config = TunnelConfigBuilder::default()
            .algorithm(Algorithm::Bfs)
            .dimensions((2, 0, 2))
            .start((0, 0, 0))
            .goal((1, 0, 1))
            .build()
            .unwrap();
        assert!(matches!(
            Tunnel::from_config(config),
            Err(TunnelError::InvalidDimensions((2, 0, 2)))
        ));
    }

    #[test]
    fn goal_check_compares_coordinates() {
        let tunnel = tunnel_with_points(vec![
            PointConfig::new((0, 0, 0), []),
            PointConfig::new((2, 2, 2), []),
        ])
        .unwrap();
        assert!(!tunnel.is_goal(tunnel.point((0, 0, 0)).unwrap()));
        assert!(tunnel.is_goal(tunnel.point((2, 2, 2)).unwrap()));
    }

    #[test]
    fn redeclaring_a_coordinate_keeps_the_last_declaration() {
        let tunnel = tunnel_with_points(vec![
            PointConfig::new((0, 0, 0), [1]),
            PointConfig::new((0, 0, 0), [5]),
        ])
        .unwrap();
        let point = tunnel.point((0, 0, 0)).unwrap();
        assert_eq!(point.movements.as_slice(), &[Movement::PosZ]);
        assert_eq!(tunnel.point_count(), 1);
    }

    #[test]
    fn dense_index_covers_every_cell_once() {
        let tunnel = tunnel_with_points(vec![]).unwrap();
        let mut seen = vec![false; tunnel.cell_count()];
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    let index = tunnel.index_of((x, y, z));
                    assert!(!seen[index]);
                    seen[index] = true;
                }
            }
        }
        assert!(seen.into_iter().all(|v| v));
    }
}
