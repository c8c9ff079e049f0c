use std::{
    fmt::{Debug, Display},
    iter::FusedIterator,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::frontier::{Frontier, ToVisit};

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, comparable and not references (hence 'static)
pub trait NodeReference: Copy + Eq + Debug + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + Clone + 'static>: MapStorage<T, Reference = Self::Reference>;

    /// Check if the provided node reference is valid
    fn is_valid(&self, node: Self::Reference) -> bool;

    /// Return an iterator over the neighbors of the provided node and the cost required to go there
    fn neighbors_of(
        &self,
        node: Self::Reference,
        movement: Movement,
    ) -> impl Iterator<Item = (Self::Reference, usize)>;

    /// Estimate the remaining cost between two nodes. Must never overestimate.
    fn estimate(&self, from: Self::Reference, to: Self::Reference, movement: Movement) -> usize;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn is_valid(&self, node: Self::Reference) -> bool;
    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    GreedyBestFirst,
    #[default]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ];

    fn uses_estimate(self) -> bool {
        matches!(self, Algorithm::GreedyBestFirst | Algorithm::AStar)
    }

    fn priority(self, cost: usize, estimate: usize) -> usize {
        match self {
            Algorithm::GreedyBestFirst => estimate,
            Algorithm::AStar => cost + estimate,
            Algorithm::DepthFirst | Algorithm::BreadthFirst => 0,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Algorithm::DepthFirst => "DFS",
                Algorithm::BreadthFirst => "BFS",
                Algorithm::GreedyBestFirst => "Greedy BFS",
                Algorithm::AStar => "A*",
            }
        )
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "greedy" | "best-first" => Ok(Algorithm::GreedyBestFirst),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(anyhow::anyhow!("Invalid algorithm: {}", s)),
        }
    }
}

/// Which cells count as adjacent
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// North, east, south and west
    Orthogonal,
    /// The orthogonal neighbors plus the four diagonal ones
    #[default]
    Diagonal,
}

impl Movement {
    pub fn toggled(self) -> Self {
        match self {
            Movement::Orthogonal => Movement::Diagonal,
            Movement::Diagonal => Movement::Orthogonal,
        }
    }
}

impl Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Movement::Orthogonal => "orthogonal",
                Movement::Diagonal => "diagonal",
            }
        )
    }
}

impl FromStr for Movement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "orthogonal" | "4" => Ok(Movement::Orthogonal),
            "diagonal" | "8" => Ok(Movement::Diagonal),
            _ => Err(anyhow::anyhow!("Invalid movement: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitedItem<R> {
    /// Best known cost from the start
    pub cost: usize,
    /// Predecessor on the best known route, `None` for the start
    pub from: Option<R>,
    /// Set once the node has been expanded, it is never expanded again
    pub closed: bool,
}

/// Per-node search record, `None` until the node is discovered
#[derive(Clone, Copy, Debug)]
pub struct Visited<R>(Option<VisitedItem<R>>);

impl<R> Default for Visited<R> {
    fn default() -> Self {
        Visited(None)
    }
}
impl<R> Deref for Visited<R> {
    type Target = Option<VisitedItem<R>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<R> DerefMut for Visited<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Unseen,
    /// Discovered and waiting on the frontier
    Open,
    /// Expanded
    Closed,
}

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult<R> {
    /// Every node from start to goal, both included
    pub path: Vec<R>,
    pub start: R,
    pub goal: R,
    pub total_cost: usize,
}

impl<R> PathResult<R> {
    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState<R> {
    Computing,
    NoPathFound,
    PathFound(PathResult<R>),
}

impl<R> PathFinderState<R> {
    pub fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// What a single step of the search did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent<R> {
    /// `point` was expanded, `discovered` are the nodes it added to the frontier for the
    /// first time
    Visited { point: R, discovered: Vec<R> },
    /// The goal was expanded
    Found(PathResult<R>),
    /// The frontier ran empty before the goal was reached
    Exhausted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub steps: usize,
    pub expanded: usize,
    pub discovered: usize,
    pub peak_frontier: usize,
}

/// A search from `start` to `goal` that advances one expansion per [`PathFinder::step`].
///
/// The finder does not own the map, the caller passes it to every step and must not change it
/// in between.
pub struct PathFinder<M: MapTrait> {
    algorithm: Algorithm,
    movement: Movement,
    start: M::Reference,
    goal: M::Reference,
    visited: M::Storage<Visited<M::Reference>>,
    frontier: Frontier<M::Reference>,
    sequence: u64,
    state: PathFinderState<M::Reference>,
    stats: SearchStats,
}

impl<M: MapTrait> PathFinder<M> {
    pub fn new(
        map: &M,
        start: M::Reference,
        goal: M::Reference,
        algorithm: Algorithm,
        movement: Movement,
    ) -> Self {
        let mut finder = Self {
            algorithm,
            movement,
            start,
            goal,
            visited: map.create_storage(),
            frontier: Frontier::new(algorithm),
            sequence: 0,
            state: PathFinderState::Computing,
            stats: SearchStats::default(),
        };
        finder.discover(map, start, 0, None);
        finder.stats.discovered = 1;
        finder
    }

    /// Record a (better) route to `point` and put it on the frontier
    fn discover(&mut self, map: &M, point: M::Reference, cost: usize, from: Option<M::Reference>) {
        *self.visited.get_mut(point) = Visited(Some(VisitedItem {
            cost,
            from,
            closed: false,
        }));

        let estimate = if self.algorithm.uses_estimate() {
            map.estimate(point, self.goal, self.movement)
        } else {
            0
        };
        self.frontier.push(ToVisit {
            priority: self.algorithm.priority(cost, estimate),
            sequence: self.sequence,
            cost,
            point,
        });
        self.sequence += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    /// Run the search to the end
    pub fn finish(
        mut self,
        map: &M,
    ) -> (
        PathFinderState<M::Reference>,
        M::Storage<Visited<M::Reference>>,
    ) {
        while self.step(map).is_some() {}
        (self.state, self.visited)
    }

    /// Iterate over the remaining steps of the search
    pub fn steps<'a>(&'a mut self, map: &'a M) -> Steps<'a, M> {
        Steps { finder: self, map }
    }

    /// Expand one node. Returns `None` once the search has already ended.
    pub fn step(&mut self, map: &M) -> Option<SearchEvent<M::Reference>> {
        if self.state.is_done() {
            return None;
        }
        self.stats.steps += 1;

        // entries of expanded nodes, or ones superseded by a cheaper route, are skipped
        let (visit, item) = loop {
            let Some(visit) = self.frontier.pop() else {
                debug!(
                    "{}: frontier exhausted after {} expansions",
                    self.algorithm, self.stats.expanded
                );
                self.state = PathFinderState::NoPathFound;
                return Some(SearchEvent::Exhausted);
            };

            match *self.visited.get(visit.point) {
                Some(item) if !item.closed && visit.cost <= item.cost => break (visit, item),
                _ => continue,
            }
        };

        *self.visited.get_mut(visit.point) = Visited(Some(VisitedItem {
            closed: true,
            ..item
        }));
        self.stats.expanded += 1;

        if visit.point == self.goal {
            let result = self.backtrack(item.cost);
            debug!(
                "{}: found {:?} at cost {} after {} expansions",
                self.algorithm, self.goal, result.total_cost, self.stats.expanded
            );
            self.state = PathFinderState::PathFound(result.clone());
            return Some(SearchEvent::Found(result));
        }

        let mut discovered = Vec::new();
        for (point, move_cost) in map.neighbors_of(visit.point, self.movement) {
            let cost = item.cost + move_cost;
            match *self.visited.get(point) {
                None => {
                    self.discover(map, point, cost, Some(visit.point));
                    self.stats.discovered += 1;
                    discovered.push(point);
                }
                // a cheaper route to a node still on the frontier, its old entry goes stale
                Some(seen)
                    if self.algorithm == Algorithm::AStar && !seen.closed && cost < seen.cost =>
                {
                    self.discover(map, point, cost, Some(visit.point));
                }
                Some(_) => {}
            }
        }

        Some(SearchEvent::Visited {
            point: visit.point,
            discovered,
        })
    }

    /// Follow the parent pointers back from the goal
    fn backtrack(&self, total_cost: usize) -> PathResult<M::Reference> {
        let mut path = vec![self.goal];
        let mut current = self.goal;
        while let Some(VisitedItem {
            from: Some(from), ..
        }) = *self.visited.get(current)
        {
            path.push(from);
            current = from;
        }
        path.reverse();

        PathResult {
            path,
            start: self.start,
            goal: self.goal,
            total_cost,
        }
    }

    pub fn state(&self) -> &PathFinderState<M::Reference> {
        &self.state
    }

    pub fn get_visited(&self) -> &M::Storage<Visited<M::Reference>> {
        &self.visited
    }

    pub fn status(&self, node: M::Reference) -> NodeStatus {
        if !self.visited.is_valid(node) {
            return NodeStatus::Unseen;
        }
        match *self.visited.get(node) {
            None => NodeStatus::Unseen,
            Some(item) if item.closed => NodeStatus::Closed,
            Some(_) => NodeStatus::Open,
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn start(&self) -> M::Reference {
        self.start
    }

    pub fn goal(&self) -> M::Reference {
        self.goal
    }
}

/// Iterator over the events of a running search, see [`PathFinder::steps`]
pub struct Steps<'a, M: MapTrait> {
    finder: &'a mut PathFinder<M>,
    map: &'a M,
}

impl<'a, M: MapTrait> Iterator for Steps<'a, M> {
    type Item = SearchEvent<M::Reference>;

    fn next(&mut self) -> Option<Self::Item> {
        self.finder.step(self.map)
    }
}

impl<'a, M: MapTrait> FusedIterator for Steps<'a, M> {}

#[cfg(test)]
mod test {

    use super::*;
    use crate::grid::{Grid, Point};
    use crate::util::parse_grid;

    fn p(row: usize, col: usize) -> Point {
        Point::new(row, col)
    }

    fn create_basic_map() -> Grid {
        parse_grid(
            "#######
             #S###E#
             #.###.#
             #.#...#
             #.#.###
             #......
             #######",
        )
        .unwrap()
    }

    fn run(grid: &Grid, algorithm: Algorithm, movement: Movement) -> PathFinderState<Point> {
        PathFinder::new(grid, grid.start(), grid.end(), algorithm, movement)
            .finish(grid)
            .0
    }

    fn expanded(events: &[SearchEvent<Point>]) -> Vec<Point> {
        events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::Visited { point, .. } => Some(*point),
                SearchEvent::Found(result) => Some(result.goal),
                SearchEvent::Exhausted => None,
            })
            .collect()
    }

    /// Every step moves to an adjacent open cell
    fn assert_valid_path(grid: &Grid, result: &PathResult<Point>, movement: Movement) {
        assert_eq!(result.path.first(), Some(&grid.start()));
        assert_eq!(result.path.last(), Some(&grid.end()));
        for step in result.path.windows(2) {
            assert!(
                grid.neighbors(step[0], movement).contains(&step[1]),
                "{} -> {} is not a move",
                step[0],
                step[1]
            );
        }
    }

    #[test]
    fn test_basic_route() {
        let map = create_basic_map();

        for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
            assert!(matches!(
                run(&map, algorithm, Movement::Orthogonal),
                PathFinderState::PathFound(PathResult { total_cost: 12, .. })
            ));
            assert!(matches!(
                run(&map, algorithm, Movement::Diagonal),
                PathFinderState::PathFound(PathResult { total_cost: 8, .. })
            ));
        }
    }

    #[test]
    fn test_open_grid_shortest_length() {
        let grid = Grid::new(5, 5, p(0, 0), p(4, 4)).unwrap();

        for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
            let PathFinderState::PathFound(result) = run(&grid, algorithm, Movement::Orthogonal)
            else {
                panic!("{} did not find a path", algorithm);
            };
            assert_eq!(result.total_cost, 8);
            assert_eq!(result.steps(), 8);
            assert_valid_path(&grid, &result, Movement::Orthogonal);
        }

        // the diagonal is four moves long
        let PathFinderState::PathFound(result) = run(&grid, Algorithm::AStar, Movement::Diagonal)
        else {
            panic!("no diagonal path");
        };
        assert_eq!(result.total_cost, 4);
        assert_eq!(result.path, vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3), p(4, 4)]);
    }

    #[test]
    fn test_wall_with_gap() {
        let grid = parse_grid(
            "S.#..
             ..#..
             ..#..
             ..#..
             ....E",
        )
        .unwrap();

        for movement in [Movement::Orthogonal, Movement::Diagonal] {
            for algorithm in Algorithm::ALL {
                let PathFinderState::PathFound(result) = run(&grid, algorithm, movement) else {
                    panic!("{} found no path", algorithm);
                };
                assert!(result.path.contains(&p(4, 2)), "{} skipped the gap", algorithm);
                assert!(result.path.iter().all(|&c| !grid.is_wall(c)));
                assert_valid_path(&grid, &result, movement);

                if movement == Movement::Orthogonal
                    && matches!(algorithm, Algorithm::BreadthFirst | Algorithm::AStar)
                {
                    assert_eq!(result.total_cost, 8);
                }
            }
        }
    }

    #[test]
    fn test_partition_exhausts() {
        let grid = parse_grid(
            "S.#..
             ..#..
             ..#..
             ..#..
             ..#.E",
        )
        .unwrap();

        for movement in [Movement::Orthogonal, Movement::Diagonal] {
            for algorithm in Algorithm::ALL {
                let mut finder = PathFinder::new(&grid, grid.start(), grid.end(), algorithm, movement);
                let events: Vec<_> = finder.steps(&grid).collect();

                assert_eq!(events.last(), Some(&SearchEvent::Exhausted));
                assert_eq!(finder.state(), &PathFinderState::NoPathFound);
                // the whole left side was expanded, nothing on the right
                assert_eq!(finder.stats().expanded, 10);
                assert_eq!(finder.status(p(0, 3)), NodeStatus::Unseen);
                assert_eq!(finder.frontier_len(), 0);
            }
        }
    }

    #[test]
    fn test_depth_first_order() {
        let grid = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
        let mut finder = PathFinder::new(
            &grid,
            grid.start(),
            grid.end(),
            Algorithm::DepthFirst,
            Movement::Orthogonal,
        );
        let events: Vec<_> = finder.steps(&grid).collect();

        assert_eq!(
            expanded(&events),
            vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]
        );
        assert_eq!(
            events.last(),
            Some(&SearchEvent::Found(PathResult {
                path: vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)],
                start: p(0, 0),
                goal: p(2, 2),
                total_cost: 4,
            }))
        );
    }

    #[test]
    fn test_breadth_first_order() {
        let grid = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
        let mut finder = PathFinder::new(
            &grid,
            grid.start(),
            grid.end(),
            Algorithm::BreadthFirst,
            Movement::Orthogonal,
        );
        let events: Vec<_> = finder.steps(&grid).collect();

        assert_eq!(
            events[0],
            SearchEvent::Visited {
                point: p(0, 0),
                discovered: vec![p(0, 1), p(1, 0)]
            }
        );
        assert_eq!(
            expanded(&events),
            vec![
                p(0, 0),
                p(0, 1),
                p(1, 0),
                p(0, 2),
                p(1, 1),
                p(2, 0),
                p(1, 2),
                p(2, 1),
                p(2, 2)
            ]
        );
        assert!(matches!(
            events.last(),
            Some(SearchEvent::Found(PathResult { total_cost: 4, .. }))
        ));
    }

    #[test]
    fn test_greedy_heads_straight_for_the_goal() {
        let grid = Grid::new(5, 5, p(0, 0), p(4, 4)).unwrap();
        let mut finder = PathFinder::new(
            &grid,
            grid.start(),
            grid.end(),
            Algorithm::GreedyBestFirst,
            Movement::Orthogonal,
        );
        let events: Vec<_> = finder.steps(&grid).collect();

        // on an open grid nothing off the final path gets expanded
        assert_eq!(finder.stats().expanded, 9);
        assert_eq!(
            expanded(&events),
            vec![
                p(0, 0),
                p(0, 1),
                p(0, 2),
                p(0, 3),
                p(0, 4),
                p(1, 4),
                p(2, 4),
                p(3, 4),
                p(4, 4)
            ]
        );
    }

    #[test]
    fn test_same_run_twice() {
        let grid = create_basic_map();

        for movement in [Movement::Orthogonal, Movement::Diagonal] {
            for algorithm in Algorithm::ALL {
                let record = || {
                    let mut finder =
                        PathFinder::new(&grid, grid.start(), grid.end(), algorithm, movement);
                    let events: Vec<_> = finder.steps(&grid).collect();
                    events
                };
                assert_eq!(record(), record());
            }
        }
    }

    #[test]
    fn test_step_after_the_end() {
        let grid = Grid::new(1, 2, p(0, 0), p(0, 1)).unwrap();
        let mut finder = PathFinder::new(
            &grid,
            grid.start(),
            grid.end(),
            Algorithm::BreadthFirst,
            Movement::Orthogonal,
        );

        assert!(matches!(finder.step(&grid), Some(SearchEvent::Visited { .. })));
        assert!(matches!(finder.step(&grid), Some(SearchEvent::Found(_))));
        assert_eq!(finder.step(&grid), None);
        assert_eq!(finder.steps(&grid).count(), 0);
        assert_eq!(finder.stats().steps, 2);
        assert_eq!(finder.status(p(0, 1)), NodeStatus::Closed);
    }

    #[test]
    fn test_frontier_status() {
        let grid = Grid::new(3, 3, p(1, 1), p(2, 2)).unwrap();
        let mut finder = PathFinder::new(
            &grid,
            grid.start(),
            grid.end(),
            Algorithm::BreadthFirst,
            Movement::Orthogonal,
        );
        assert_eq!(finder.status(p(1, 1)), NodeStatus::Open);

        finder.step(&grid);

        assert_eq!(finder.status(p(1, 1)), NodeStatus::Closed);
        assert_eq!(finder.status(p(0, 1)), NodeStatus::Open);
        assert_eq!(finder.status(p(0, 0)), NodeStatus::Unseen);
        assert_eq!(finder.status(p(5, 5)), NodeStatus::Unseen);
        assert_eq!(finder.frontier_len(), 4);
        assert_eq!(finder.stats().peak_frontier, 4);
        assert_eq!(finder.stats().discovered, 5);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("DFS".parse::<Algorithm>().unwrap(), Algorithm::DepthFirst);
        assert_eq!("greedy".parse::<Algorithm>().unwrap(), Algorithm::GreedyBestFirst);
        assert!("dijkstra".parse::<Algorithm>().is_err());
        assert_eq!("4".parse::<Movement>().unwrap(), Movement::Orthogonal);
        assert_eq!(Movement::Orthogonal.toggled(), Movement::Diagonal);
        assert_eq!(Algorithm::GreedyBestFirst.to_string(), "Greedy BFS");
    }

    /// A small weighted graph to exercise the map abstraction without a grid
    struct Graph {
        edges: Vec<Vec<(usize, usize)>>,
    }

    impl NodeReference for usize {}

    struct VecStorage<T>(Vec<T>);

    impl<T: Copy + 'static> MapStorage<T> for VecStorage<T> {
        type Reference = usize;

        fn is_valid(&self, node: usize) -> bool {
            node < self.0.len()
        }

        fn get(&self, node: usize) -> T {
            self.0[node]
        }

        fn get_mut(&mut self, node: usize) -> &mut T {
            &mut self.0[node]
        }
    }

    impl MapTrait for Graph {
        type Reference = usize;
        type Storage<T: Default + Copy + Clone + 'static> = VecStorage<T>;

        fn is_valid(&self, node: usize) -> bool {
            node < self.edges.len()
        }

        fn neighbors_of(
            &self,
            node: usize,
            _movement: Movement,
        ) -> impl Iterator<Item = (usize, usize)> {
            self.edges[node].clone().into_iter()
        }

        fn estimate(&self, _from: usize, _to: usize, _movement: Movement) -> usize {
            0
        }

        fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
            VecStorage(vec![T::default(); self.edges.len()])
        }
    }

    #[test]
    fn test_a_star_relaxes_frontier_costs() {
        // the direct edge 0 -> 2 is found first but the detour over 1 is cheaper
        let graph = Graph {
            edges: vec![vec![(1, 1), (2, 4)], vec![(2, 1)], vec![(3, 1)], vec![]],
        };

        let (state, visited) =
            PathFinder::new(&graph, 0, 3, Algorithm::AStar, Movement::Orthogonal).finish(&graph);

        assert_eq!(
            state,
            PathFinderState::PathFound(PathResult {
                path: vec![0, 1, 2, 3],
                start: 0,
                goal: 3,
                total_cost: 3,
            })
        );
        assert!(matches!(*visited.get(2), Some(VisitedItem { cost: 2, .. })));

        // breadth first keeps the first route it saw
        let (state, _) = PathFinder::new(&graph, 0, 3, Algorithm::BreadthFirst, Movement::Orthogonal)
            .finish(&graph);
        assert!(matches!(
            state,
            PathFinderState::PathFound(PathResult { total_cost: 5, .. })
        ));
    }
}
