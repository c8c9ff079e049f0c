pub mod error;
pub mod find;
mod frontier;
pub mod grid;
pub mod session;
pub mod util;

pub use error::Error;
pub use find::{
    Algorithm, MapStorage, MapTrait, Movement, NodeReference, NodeStatus, PathFinder,
    PathFinderState, PathResult, SearchEvent, SearchStats, Visited, VisitedItem,
};
pub use grid::{CellStorage, Grid, Point, Tile};
pub use session::{CellState, Command, Phase, Session, Snapshot};
