use fixedbitset::FixedBitSet;
use serde::Serialize;

use crate::config::Algorithm;
use crate::error::{Result, TunnelError};
use crate::frontier::{Frontier, SearchNode};
use crate::heuristic;
use crate::movement::Coord;
use crate::tunnel::Tunnel;

impl Algorithm {
    /// Accumulated cost of a child reached over an edge of `edge_cost`.
    fn child_cost(self, parent_cost: u32, edge_cost: u32) -> u32 {
        match self {
            Algorithm::Bfs => parent_cost + 1,
            Algorithm::Ucs | Algorithm::AStar => parent_cost + edge_cost,
        }
    }

    /// Cost recorded for the arriving edge in the report.
    fn step_cost(self, edge_cost: u32) -> u32 {
        match self {
            Algorithm::Bfs => 1,
            Algorithm::Ucs | Algorithm::AStar => edge_cost,
        }
    }

    /// Frontier ordering key for a child node.
    fn priority(self, child_cost: u32, to_goal: u32) -> u32 {
        match self {
            Algorithm::Bfs => 0,
            Algorithm::Ucs => child_cost,
            Algorithm::AStar => child_cost + to_goal,
        }
    }
}

/// A completed search: the path found and its per-edge costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_cost: u32,
    pub path: Vec<Coord>,
    pub step_costs: Vec<u32>,
}

impl Report {
    /// Number of points on the path, both endpoints included.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Terminal state of a search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Found(Report),
    Failed,
}

/// Run the tunnel's configured algorithm from its start to its goal.
///
/// Each point is expanded at most once. The frontier may hold several
/// entries for the same point; entries whose point was already expanded are
/// dropped on dequeue. An exhausted frontier is the ordinary `Failed`
/// outcome, not an error.
pub fn search(tunnel: &Tunnel) -> Result<Outcome> {
    tunnel
        .point(tunnel.start)
        .ok_or(TunnelError::UndeclaredPoint(tunnel.start))?;

    let algorithm = tunnel.algorithm;
    let mut visited = FixedBitSet::with_capacity(tunnel.cell_count());
    let mut frontier = Frontier::new(algorithm);
    frontier.enqueue(SearchNode {
        coordinates: tunnel.start,
        path: Vec::new(),
        total_cost: 0,
        priority: 0,
        step_costs: vec![0],
    });

    let mut expanded = 0usize;
    while let Some(node) = frontier.dequeue() {
        let index = tunnel.index_of(node.coordinates);
        if visited.contains(index) {
            continue;
        }
        visited.insert(index);
        expanded += 1;

        let point = tunnel
            .point(node.coordinates)
            .ok_or(TunnelError::UndeclaredPoint(node.coordinates))?;
        if tunnel.is_goal(point) {
            log::debug!("goal reached after expanding {expanded} points");
            let mut path = node.path;
            path.push(node.coordinates);
            return Ok(Outcome::Found(Report {
                total_cost: node.total_cost,
                path,
                step_costs: node.step_costs,
            }));
        }

        for &movement in &point.movements {
            let Some((next, edge_cost)) = tunnel.neighbor(point, movement)? else {
                continue;
            };
            if visited.contains(tunnel.index_of(next.coordinates)) {
                continue;
            }
            let total_cost = algorithm.child_cost(node.total_cost, edge_cost);
            let priority = algorithm.priority(
                total_cost,
                heuristic::estimate(next.coordinates, tunnel.goal),
            );
            let mut path = node.path.clone();
            path.push(node.coordinates);
            let mut step_costs = node.step_costs.clone();
            step_costs.push(algorithm.step_cost(edge_cost));
            frontier.enqueue(SearchNode {
                coordinates: next.coordinates,
                path,
                total_cost,
                priority,
                step_costs,
            });
        }
    }

    log::debug!("frontier exhausted after expanding {expanded} points");
    Ok(Outcome::Failed)
}
