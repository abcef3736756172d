//! Store-to-distribution-center routing as a tabu-search problem.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::tabu::{TabuMove, TabuProblem};

/// A store relocation: remove the store at `(from_route, from_pos)` and
/// reinsert it after `(to_route, to_slot)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Relocation {
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_slot: usize,
}

/// Facility-assignment routing: each distribution center runs one cyclic
/// delivery route, and every store belongs to exactly one route.
///
/// Nodes `0..centers` are the distribution centers, the remaining indices
/// are stores; `distances[a][b]` is the travel cost from node `a` to node
/// `b`. A solution is one stop sequence per center, each beginning with its
/// center; the cost is the summed cyclic length of all routes.
pub struct StoreRouting {
    distances: Vec<Vec<f64>>,
    centers: usize,
}

impl StoreRouting {
    /// Creates a problem over the given square distance matrix.
    ///
    /// Fails when there is no center, no store, or the matrix is not square.
    pub fn new(centers: usize, distances: Vec<Vec<f64>>) -> Result<Self, String> {
        if centers == 0 {
            return Err("at least one distribution center is required".to_string());
        }
        let nodes = distances.len();
        if nodes <= centers {
            return Err(format!(
                "need at least one store: {nodes} nodes for {centers} centers"
            ));
        }
        if distances.iter().any(|row| row.len() != nodes) {
            return Err("distance matrix must be square".to_string());
        }
        Ok(Self { distances, centers })
    }

    /// Number of distribution centers (and routes).
    pub fn centers(&self) -> usize {
        self.centers
    }

    /// Number of stores.
    pub fn stores(&self) -> usize {
        self.distances.len() - self.centers
    }

    /// Tabu tenure matched to the instance: a tenth of the node count.
    pub fn suggested_tenure(&self) -> usize {
        (self.distances.len() / 10).max(1)
    }

    fn leg(&self, a: usize, b: usize) -> f64 {
        self.distances[a][b]
    }

    /// Cyclic length of one route (last stop travels back to the center).
    fn route_cost(&self, route: &[usize]) -> f64 {
        let len = route.len();
        if len < 2 {
            return 0.0;
        }
        (0..len).map(|j| self.leg(route[j], route[(j + 1) % len])).sum()
    }

    /// Cheapest relocation of the store at `(route, pos)` into any other
    /// slot, same route or not. Each candidate slot is costed in O(1) from
    /// the removal and insertion leg deltas against `base_cost`.
    fn best_relocation(
        &self,
        routes: &[Vec<usize>],
        base_cost: f64,
        route: usize,
        pos: usize,
    ) -> Option<(f64, Relocation)> {
        let store = routes[route][pos];
        let prev = routes[route][pos - 1];
        let next = routes[route][(pos + 1) % routes[route].len()];
        let removal = self.leg(prev, next) - self.leg(prev, store) - self.leg(store, next);

        let mut best: Option<(f64, Relocation)> = None;
        for target in 0..routes.len() {
            let len = routes[target].len();
            for slot in 0..len {
                // Reinserting around the store's current slot is a no-op.
                if target == route && (slot == pos || slot + 1 == pos) {
                    continue;
                }
                let d = routes[target][slot];
                let e = routes[target][(slot + 1) % len];
                let cost =
                    base_cost + removal + self.leg(d, store) + self.leg(store, e) - self.leg(d, e);
                if best.as_ref().is_none_or(|&(c, _)| cost < c) {
                    best = Some((
                        cost,
                        Relocation {
                            from_route: route,
                            from_pos: pos,
                            to_route: target,
                            to_slot: slot,
                        },
                    ));
                }
            }
        }
        best
    }

    /// Applies a relocation to a fresh copy of the routes.
    fn apply(&self, routes: &[Vec<usize>], mv: &Relocation) -> Vec<Vec<usize>> {
        let mut new_routes = routes.to_vec();
        let store = new_routes[mv.from_route].remove(mv.from_pos);
        // Insert after `to_slot`; removing an earlier position in the same
        // route shifts the slot left by one.
        let mut insert_at = mv.to_slot + 1;
        if mv.from_route == mv.to_route && mv.from_pos < insert_at {
            insert_at -= 1;
        }
        new_routes[mv.to_route].insert(insert_at, store);
        new_routes
    }
}

impl TabuProblem for StoreRouting {
    type Solution = Vec<Vec<usize>>;
    /// The relocated store's node id.
    type Key = usize;

    /// Greedy seeding: visit the stores in random order and append each to
    /// the route whose last stop is nearest.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<Vec<usize>> {
        let mut routes: Vec<Vec<usize>> = (0..self.centers).map(|c| vec![c]).collect();

        let mut store_ids: Vec<usize> = (self.centers..self.distances.len()).collect();
        store_ids.shuffle(rng);

        for store in store_ids {
            let mut best_route = 0;
            for r in 1..self.centers {
                let last = routes[r][routes[r].len() - 1];
                let best_last = routes[best_route][routes[best_route].len() - 1];
                if self.leg(last, store) < self.leg(best_last, store) {
                    best_route = r;
                }
            }
            routes[best_route].push(store);
        }
        routes
    }

    fn cost(&self, routes: &Vec<Vec<usize>>) -> f64 {
        routes.iter().map(|route| self.route_cost(route)).sum()
    }

    /// One candidate per store: its cheapest relocation across all routes.
    /// Every candidate is built on a fresh copy of the routes.
    fn neighbors<R: Rng>(
        &self,
        routes: &Vec<Vec<usize>>,
        _rng: &mut R,
    ) -> Vec<TabuMove<Vec<Vec<usize>>, usize>> {
        let base_cost = self.cost(routes);
        let mut moves = Vec::with_capacity(self.stores());

        for route in 0..routes.len() {
            for pos in 1..routes[route].len() {
                if let Some((cost, relocation)) =
                    self.best_relocation(routes, base_cost, route, pos)
                {
                    moves.push(TabuMove {
                        solution: self.apply(routes, &relocation),
                        key: routes[route][pos],
                        cost,
                    });
                }
            }
        }
        moves
    }
}
