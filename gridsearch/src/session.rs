use std::collections::VecDeque;
use std::fmt::Display;

use log::{debug, info, warn};

use crate::error::Error;
use crate::find::{
    Algorithm, Movement, NodeStatus, PathFinder, PathFinderState, PathResult, SearchEvent,
    SearchStats,
};
use crate::grid::{Grid, Point, Tile};

/// Where the session is in its search lifecycle.
///
/// `Idle -> Running -> {Found, Exhausted, Cancelled}`, and every phase goes back to `Idle`
/// through a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Found,
    Exhausted,
    Cancelled,
}

impl Phase {
    /// Found, Exhausted and Cancelled only leave through a reset
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Found | Phase::Exhausted | Phase::Cancelled)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Phase::Idle => "idle",
                Phase::Running => "running",
                Phase::Found => "found",
                Phase::Exhausted => "exhausted",
                Phase::Cancelled => "cancelled",
            }
        )
    }
}

/// A request from the interaction layer, applied between two search steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleWall(Point),
    SetWall(Point),
    ClearWall(Point),
    MoveStart(Point),
    MoveEnd(Point),
    SetAlgorithm(Algorithm),
    SetMovement(Movement),
    StartSearch {
        algorithm: Algorithm,
        movement: Movement,
    },
    CancelSearch,
    Reset {
        clear_walls: bool,
    },
    Resize {
        rows: usize,
        columns: usize,
    },
}

/// What the renderer should draw for one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Frontier,
    Path,
}

impl Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CellState::Empty => ".",
                CellState::Wall => "#",
                CellState::Start => "S",
                CellState::End => "E",
                CellState::Visited => "x",
                CellState::Frontier => "o",
                CellState::Path => "*",
            }
        )
    }
}

/// A read-only picture of the grid and the search overlay at one moment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Snapshot {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Panics if `p` lies outside of the snapshot
    pub fn get(&self, p: Point) -> CellState {
        self.cells[p.row * self.columns + p.col]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Point::new(i / columns, i % columns), state))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.columns) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// The grid together with the user's selections and the search running on it.
///
/// The grid can only be edited while the session is idle, and the search only ever reads it,
/// so the two never overlap.
pub struct Session {
    grid: Grid,
    algorithm: Algorithm,
    movement: Movement,
    phase: Phase,
    finder: Option<PathFinder<Grid>>,
    commands: VecDeque<Command>,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            algorithm: Algorithm::default(),
            movement: Movement::default(),
            phase: Phase::Idle,
            finder: None,
            commands: VecDeque::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// The search of the current run, gone once the run was cancelled or reset
    pub fn finder(&self) -> Option<&PathFinder<Grid>> {
        self.finder.as_ref()
    }

    pub fn stats(&self) -> Option<SearchStats> {
        self.finder.as_ref().map(PathFinder::stats)
    }

    pub fn result(&self) -> Option<&PathResult<Point>> {
        match self.finder.as_ref()?.state() {
            PathFinderState::PathFound(result) => Some(result),
            _ => None,
        }
    }

    fn ensure_idle(&self, action: &'static str) -> Result<(), Error> {
        if self.phase == Phase::Idle {
            Ok(())
        } else {
            Err(Error::InvalidState {
                action,
                phase: self.phase,
            })
        }
    }

    fn ensure_not_running(&self, action: &'static str) -> Result<(), Error> {
        if self.phase == Phase::Running {
            Err(Error::InvalidState {
                action,
                phase: self.phase,
            })
        } else {
            Ok(())
        }
    }

    pub fn toggle_wall(&mut self, p: Point) -> Result<Tile, Error> {
        self.ensure_idle("toggle a wall")?;
        self.grid.toggle_wall(p)
    }

    pub fn set_wall(&mut self, p: Point) -> Result<bool, Error> {
        self.ensure_idle("place a wall")?;
        self.grid.set_wall(p)
    }

    pub fn clear_wall(&mut self, p: Point) -> Result<bool, Error> {
        self.ensure_idle("clear a wall")?;
        self.grid.clear_wall(p)
    }

    pub fn move_start(&mut self, p: Point) -> Result<(), Error> {
        self.ensure_idle("move the start")?;
        self.grid.move_start(p)
    }

    pub fn move_end(&mut self, p: Point) -> Result<(), Error> {
        self.ensure_idle("move the end")?;
        self.grid.move_end(p)
    }

    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<(), Error> {
        self.ensure_idle("resize the grid")?;
        self.grid.resize(rows, columns)?;
        info!("grid resized to {}x{}", rows, columns);
        Ok(())
    }

    /// Select the algorithm used by the next search
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), Error> {
        self.ensure_not_running("change the algorithm")?;
        self.algorithm = algorithm;
        Ok(())
    }

    /// Select the movement mode used by the next search
    pub fn set_movement(&mut self, movement: Movement) -> Result<(), Error> {
        self.ensure_not_running("change the movement mode")?;
        self.movement = movement;
        Ok(())
    }

    pub fn start_search(&mut self, algorithm: Algorithm, movement: Movement) -> Result<(), Error> {
        self.ensure_idle("start a search")?;

        self.algorithm = algorithm;
        self.movement = movement;
        self.finder = Some(PathFinder::new(
            &self.grid,
            self.grid.start(),
            self.grid.end(),
            algorithm,
            movement,
        ));
        self.phase = Phase::Running;
        info!(
            "{} search started from {} to {} ({} movement)",
            algorithm,
            self.grid.start(),
            self.grid.end(),
            movement
        );
        Ok(())
    }

    /// Stop the running search and throw its state away
    pub fn cancel_search(&mut self) -> Result<(), Error> {
        if self.phase != Phase::Running {
            return Err(Error::InvalidState {
                action: "cancel the search",
                phase: self.phase,
            });
        }

        self.finder = None;
        self.phase = Phase::Cancelled;
        info!("search cancelled");
        Ok(())
    }

    /// Drop any search results and go back to idle, optionally removing all walls too
    pub fn reset(&mut self, clear_walls: bool) {
        self.finder = None;
        self.phase = Phase::Idle;
        if clear_walls {
            self.grid.clear_walls();
        }
        info!("session reset (walls cleared: {})", clear_walls);
    }

    /// Queue a command for the next [`Session::process_commands`]
    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn apply(&mut self, command: Command) -> Result<(), Error> {
        match command {
            Command::ToggleWall(p) => self.toggle_wall(p).map(|_| ()),
            Command::SetWall(p) => self.set_wall(p).map(|_| ()),
            Command::ClearWall(p) => self.clear_wall(p).map(|_| ()),
            Command::MoveStart(p) => self.move_start(p),
            Command::MoveEnd(p) => self.move_end(p),
            Command::SetAlgorithm(algorithm) => self.set_algorithm(algorithm),
            Command::SetMovement(movement) => self.set_movement(movement),
            Command::StartSearch {
                algorithm,
                movement,
            } => self.start_search(algorithm, movement),
            Command::CancelSearch => self.cancel_search(),
            Command::Reset { clear_walls } => {
                self.reset(clear_walls);
                Ok(())
            }
            Command::Resize { rows, columns } => self.resize(rows, columns),
        }
    }

    /// Apply every queued command in order. Refused commands are logged and returned, they
    /// never stop the commands behind them.
    pub fn process_commands(&mut self) -> Vec<(Command, Error)> {
        let mut rejected = Vec::new();
        while let Some(command) = self.commands.pop_front() {
            if let Err(e) = self.apply(command) {
                match command {
                    // dragging across a running search produces a lot of these
                    Command::SetWall(_) | Command::ClearWall(_) => {
                        debug!("{:?} rejected: {}", command, e)
                    }
                    _ => warn!("{:?} rejected: {}", command, e),
                }
                rejected.push((command, e));
            }
        }
        rejected
    }

    /// Advance the running search by one step
    pub fn step(&mut self) -> Option<SearchEvent<Point>> {
        if self.phase != Phase::Running {
            return None;
        }
        let event = self.finder.as_mut()?.step(&self.grid)?;

        match &event {
            SearchEvent::Found(result) => {
                self.phase = Phase::Found;
                info!("path found, {} steps long", result.steps());
            }
            SearchEvent::Exhausted => {
                self.phase = Phase::Exhausted;
                info!("no path exists");
            }
            SearchEvent::Visited { .. } => {}
        }
        Some(event)
    }

    /// Drain the command queue, then take one search step if a search is still running
    pub fn tick(&mut self) -> Option<SearchEvent<Point>> {
        self.process_commands();
        self.step()
    }

    /// Run the current search to its end
    pub fn run_to_end(&mut self) -> Vec<SearchEvent<Point>> {
        std::iter::from_fn(|| self.step()).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut cells: Vec<CellState> = self
            .grid
            .points()
            .map(|p| {
                if p == self.grid.start() {
                    CellState::Start
                } else if p == self.grid.end() {
                    CellState::End
                } else if self.grid.is_wall(p) {
                    CellState::Wall
                } else {
                    match self.finder.as_ref().map(|f| f.status(p)) {
                        Some(NodeStatus::Closed) => CellState::Visited,
                        Some(NodeStatus::Open) => CellState::Frontier,
                        Some(NodeStatus::Unseen) | None => CellState::Empty,
                    }
                }
            })
            .collect();

        if let Some(result) = self.result() {
            for p in &result.path {
                if *p != self.grid.start() && *p != self.grid.end() {
                    cells[p.row * self.grid.columns() + p.col] = CellState::Path;
                }
            }
        }

        Snapshot {
            rows: self.grid.rows(),
            columns: self.grid.columns(),
            cells,
        }
    }
}
