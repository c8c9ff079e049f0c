use egui::{Key, PointerButton};
use gridsearch::{Command, Phase, Point, Session, Tile};

/// What a primary click on a cell does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Wall,
    Start,
    End,
}

/// Turns key presses and pointer input on the grid into session commands.
///
/// Edits made after a search ended first reset the search, so the user never
/// has to clear a finished run by hand before changing the grid.
#[derive(Debug, Default)]
pub struct Controls {
    placement: Placement,
    /// The tile a drag paints, set by the press that started it
    painting: Option<Tile>,
    last_cell: Option<Point>,
}

impl Controls {
    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn key(&mut self, key: Key, session: &Session) -> Vec<Command> {
        let mut commands = Vec::new();
        match key {
            Key::S => self.placement = Placement::Start,
            Key::E => self.placement = Placement::End,
            Key::Space => {
                if session.phase() != Phase::Running {
                    reset_if_done(session, &mut commands);
                    commands.push(Command::StartSearch {
                        algorithm: session.algorithm(),
                        movement: session.movement(),
                    });
                }
            }
            Key::D => commands.push(Command::SetMovement(session.movement().toggled())),
            Key::R => commands.push(Command::Reset { clear_walls: false }),
            Key::C => commands.push(Command::Reset { clear_walls: true }),
            _ => {}
        }
        commands
    }

    pub fn pointer_pressed(
        &mut self,
        cell: Point,
        button: PointerButton,
        session: &Session,
    ) -> Vec<Command> {
        let mut commands = Vec::new();
        let grid = session.grid();
        if !grid.is_editable(cell) {
            return commands;
        }
        self.last_cell = Some(cell);

        let command = match (button, self.placement) {
            (PointerButton::Primary, Placement::Start) => {
                self.placement = Placement::Wall;
                Command::MoveStart(cell)
            }
            (PointerButton::Primary, Placement::End) => {
                self.placement = Placement::Wall;
                Command::MoveEnd(cell)
            }
            (PointerButton::Primary, Placement::Wall) => {
                if cell == grid.start() || cell == grid.end() {
                    return commands;
                }
                self.painting = Some(if grid.is_wall(cell) {
                    Tile::Empty
                } else {
                    Tile::Wall
                });
                Command::ToggleWall(cell)
            }
            (PointerButton::Secondary, _) => {
                self.painting = Some(Tile::Empty);
                Command::ClearWall(cell)
            }
            _ => return commands,
        };

        reset_if_done(session, &mut commands);
        commands.push(command);
        commands
    }

    /// The pointer moved onto `cell` with a button held down
    pub fn pointer_dragged(&mut self, cell: Point, session: &Session) -> Vec<Command> {
        let mut commands = Vec::new();
        let Some(tile) = self.painting else {
            return commands;
        };
        let grid = session.grid();
        if self.last_cell == Some(cell)
            || !grid.is_editable(cell)
            || cell == grid.start()
            || cell == grid.end()
        {
            return commands;
        }
        self.last_cell = Some(cell);

        reset_if_done(session, &mut commands);
        commands.push(match tile {
            Tile::Wall => Command::SetWall(cell),
            Tile::Empty => Command::ClearWall(cell),
        });
        commands
    }

    pub fn pointer_released(&mut self) {
        self.painting = None;
        self.last_cell = None;
    }
}

/// Queue a reset first when the last search has ended
pub fn reset_if_done(session: &Session, commands: &mut Vec<Command>) {
    if session.phase().is_terminal() {
        commands.push(Command::Reset { clear_walls: false });
    }
}
