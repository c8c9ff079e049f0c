use std::time::Duration;

use egui::{Color32, Key, PointerButton, Sense, Stroke, Vec2};
use gridsearch::{Algorithm, CellState, Command, Grid, Movement, Phase, Session};
use log::warn;

use crate::{
    input::{reset_if_done, Controls, Placement},
    layout::GridLayout,
};

const KEYS: [Key; 6] = [Key::S, Key::E, Key::Space, Key::D, Key::R, Key::C];

/// Never take more than this many search steps in a single frame
const MAX_STEPS_PER_FRAME: f32 = 1000.0;

pub struct App {
    state: State,
    session: Session,
    controls: Controls,
    /// Search steps owed to the running search, fractional until a whole step is due
    pending_steps: f32,
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct State {
    algorithm: Algorithm,
    movement: Movement,
    steps_per_second: f32,
    rows: usize,
    columns: usize,
    draw_grid_lines: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            movement: Movement::Diagonal,
            steps_per_second: 100.0,
            rows: 30,
            columns: 30,
            draw_grid_lines: true,
        }
    }
}

impl App {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let state: State = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Default::default()
        };

        let grid = Grid::with_border(state.rows, state.columns).unwrap_or_else(|e| {
            warn!("ignoring stored grid size: {}", e);
            Grid::default()
        });

        let mut session = Session::new(grid);
        session.push(Command::SetAlgorithm(state.algorithm));
        session.push(Command::SetMovement(state.movement));
        session.process_commands();

        let mut app = App {
            state,
            session,
            controls: Controls::default(),
            pending_steps: 0.0,
        };
        app.sync_state();
        app
    }

    /// Copy the selections the session accepted back into the persisted state
    fn sync_state(&mut self) {
        self.state.algorithm = self.session.algorithm();
        self.state.movement = self.session.movement();
        self.state.rows = self.session.grid().rows();
        self.state.columns = self.session.grid().columns();
    }

    fn push_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.session.push(command);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let pressed: Vec<Key> = ctx.input(|i| {
            KEYS.into_iter()
                .filter(|key| i.key_pressed(*key))
                .collect()
        });
        for key in pressed {
            let commands = self.controls.key(key, &self.session);
            self.push_all(commands);
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, layout: &GridLayout) {
        let (pressed, down, released, pos) = ctx.input(|i| {
            (
                [PointerButton::Primary, PointerButton::Secondary]
                    .into_iter()
                    .find(|button| i.pointer.button_pressed(*button)),
                i.pointer.any_down(),
                i.pointer.any_released(),
                i.pointer.interact_pos(),
            )
        });

        if let Some(cell) = pos.and_then(|pos| layout.cell_at(pos)) {
            let commands = match pressed {
                Some(button) => self.controls.pointer_pressed(cell, button, &self.session),
                None if down => self.controls.pointer_dragged(cell, &self.session),
                None => Vec::new(),
            };
            self.push_all(commands);
        }
        if released {
            self.controls.pointer_released();
        }
    }

    /// Advance a running search by as many steps as the elapsed time allows
    fn advance(&mut self, ctx: &egui::Context) {
        if self.session.phase() != Phase::Running {
            self.pending_steps = 0.0;
            return;
        }

        let dt = ctx.input(|i| i.unstable_dt).min(0.1);
        self.pending_steps =
            (self.pending_steps + dt * self.state.steps_per_second).min(MAX_STEPS_PER_FRAME);
        while self.pending_steps >= 1.0 && self.session.step().is_some() {
            self.pending_steps -= 1.0;
        }

        if self.session.phase() == Phase::Running {
            ctx.request_repaint_after(Duration::from_secs_f32(
                1.0 / self.state.steps_per_second.max(1.0),
            ));
        }
    }

    fn side_panel(&mut self, ui: &mut egui::Ui) {
        let running = self.session.phase() == Phase::Running;
        let mut commands = Vec::new();

        ui.heading("Legend");
        for (state, label) in [
            (CellState::Empty, "Empty (right click)"),
            (CellState::Wall, "Wall (left click)"),
            (CellState::Start, "Start (S key)"),
            (CellState::End, "End (E key)"),
            (CellState::Frontier, "Frontier"),
            (CellState::Visited, "Visited"),
            (CellState::Path, "Final path"),
        ] {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(14.0), Sense::hover());
                ui.painter().rect_filled(rect, 0.0, cell_color(state));
                ui.painter()
                    .rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK));
                ui.label(label);
            });
        }
        match self.controls.placement() {
            Placement::Wall => {}
            Placement::Start => {
                ui.label("Click a cell to place the start");
            }
            Placement::End => {
                ui.label("Click a cell to place the end");
            }
        }
        ui.separator();

        ui.heading("Algorithm");
        ui.add_enabled_ui(!running, |ui| {
            egui::Grid::new("algorithms").show(ui, |ui| {
                for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
                    let selected = self.session.algorithm() == algorithm;
                    if ui
                        .selectable_label(selected, algorithm.to_string())
                        .clicked()
                    {
                        reset_if_done(&self.session, &mut commands);
                        commands.push(Command::StartSearch {
                            algorithm,
                            movement: self.session.movement(),
                        });
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

            let mut diagonal = self.session.movement() == Movement::Diagonal;
            if ui
                .checkbox(&mut diagonal, "Diagonal movement (D key)")
                .changed()
            {
                commands.push(Command::SetMovement(self.session.movement().toggled()));
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Reset (R key)").clicked() {
                commands.push(Command::Reset { clear_walls: false });
            }
            if ui.button("Clear (C key)").clicked() {
                commands.push(Command::Reset { clear_walls: true });
            }
        });
        if ui
            .add_enabled(!running, egui::Button::new("Begin search (SPACE key)"))
            .clicked()
        {
            reset_if_done(&self.session, &mut commands);
            commands.push(Command::StartSearch {
                algorithm: self.session.algorithm(),
                movement: self.session.movement(),
            });
        }
        ui.separator();

        ui.add(
            egui::Slider::new(&mut self.state.steps_per_second, 1.0..=1000.0)
                .logarithmic(true)
                .text("steps/s"),
        );
        let (mut rows, mut columns) = (self.state.rows, self.state.columns);
        ui.add_enabled_ui(!running, |ui| {
            let rows_changed = ui
                .add(egui::Slider::new(&mut rows, 5..=100).text("rows"))
                .changed();
            let columns_changed = ui
                .add(egui::Slider::new(&mut columns, 5..=100).text("columns"))
                .changed();
            if rows_changed || columns_changed {
                reset_if_done(&self.session, &mut commands);
                commands.push(Command::Resize { rows, columns });
            }
        });
        ui.checkbox(&mut self.state.draw_grid_lines, "Draw grid lines");
        ui.separator();

        ui.label(format!(
            "{} ({}): {}",
            self.session.algorithm(),
            self.session.movement(),
            self.session.phase()
        ));
        if let Some(stats) = self.session.stats() {
            ui.label(format!(
                "steps: {}\nexpanded: {}\ndiscovered: {}\npeak frontier: {}",
                stats.steps, stats.expanded, stats.discovered, stats.peak_frontier
            ));
        }
        if let Some(result) = self.session.result() {
            ui.label(format!("path length: {}", result.steps()));
        } else if self.session.phase() == Phase::Exhausted {
            ui.label("no path exists");
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            powered_by_egui_and_eframe(ui);
            egui::warn_if_debug_build(ui);
        });

        self.push_all(commands);
    }

    fn paint_grid(&self, painter: &egui::Painter, layout: &GridLayout) {
        let snapshot = self.session.snapshot();
        for (p, state) in snapshot.iter() {
            painter.rect_filled(layout.cell_rect(p), 0.0, cell_color(state));
        }

        // lines get in the way once cells are only a few pixels wide
        if self.state.draw_grid_lines && layout.cell_size() > 4.0 {
            let rect = layout.rect();
            let stroke = Stroke::new(1.0, Color32::WHITE);
            for row in 0..=snapshot.rows() {
                let y = rect.top() + row as f32 * layout.cell_size();
                painter.line_segment(
                    [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                    stroke,
                );
            }
            for col in 0..=snapshot.columns() {
                let x = rect.left() + col as f32 * layout.cell_size();
                painter.line_segment(
                    [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                    stroke,
                );
            }
        }
    }
}

impl eframe::App for App {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.add_space(16.0);

                egui::widgets::global_dark_light_mode_buttons(ui);
            });
        });

        egui::SidePanel::left("side_panel").show(ctx, |ui| {
            self.side_panel(ui);
        });

        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

            let grid = self.session.grid();
            let layout = GridLayout::fit(response.rect, grid.rows(), grid.columns());
            self.handle_pointer(ctx, &layout);

            self.session.process_commands();
            self.sync_state();
            self.advance(ctx);

            // the grid may have been resized by the commands above
            let grid = self.session.grid();
            let layout = GridLayout::fit(response.rect, grid.rows(), grid.columns());
            self.paint_grid(&painter, &layout);
        });
    }
}

fn cell_color(state: CellState) -> Color32 {
    match state {
        CellState::Empty => Color32::from_gray(200),
        CellState::Wall => Color32::BLACK,
        CellState::Start => Color32::from_rgb(0, 255, 0),
        CellState::End => Color32::from_rgb(255, 0, 0),
        CellState::Frontier => Color32::from_rgb(0, 0, 255),
        CellState::Visited => Color32::from_rgb(0, 255, 255),
        CellState::Path => Color32::from_rgb(255, 255, 0),
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
