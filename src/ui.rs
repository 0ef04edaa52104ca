// ui.rs - egui front end: event translation and grid painting

use eframe::egui;
use egui::{Color32, Key, PointerButton, Rect, Sense, Vec2};

use crate::controller::Controller;
use crate::grid::Cell;
use crate::input::{Button, ControlKey, InputEvent};

pub struct LifeApp {
    controller: Controller,
    live_color: Color32,
    dead_color: Color32,
    gap_color: Color32,
}

impl LifeApp {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            // Reference color scheme: black cells on white, cyan grid lines.
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            gap_color: Color32::from_rgb(0, 255, 255),
        }
    }

    /// Translate this frame's egui events into the controller's vocabulary,
    /// preserving arrival order. Key repeats are dropped so a held key fires
    /// its action once, like a discrete key-down.
    fn collect_events(&self, ctx: &egui::Context) -> Vec<InputEvent> {
        ctx.input(|i| {
            let mut events = Vec::new();
            for event in &i.events {
                match event {
                    egui::Event::PointerButton {
                        button: PointerButton::Primary,
                        pressed,
                        ..
                    } => events.push(if *pressed {
                        InputEvent::PointerDown(Button::Primary)
                    } else {
                        InputEvent::PointerUp(Button::Primary)
                    }),
                    egui::Event::PointerButton {
                        button: PointerButton::Secondary,
                        pressed,
                        ..
                    } => events.push(if *pressed {
                        InputEvent::PointerDown(Button::Secondary)
                    } else {
                        InputEvent::PointerUp(Button::Secondary)
                    }),
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => match key {
                        Key::Space => events.push(InputEvent::Key(ControlKey::ToggleRun)),
                        Key::Enter => events.push(InputEvent::Key(ControlKey::Step)),
                        Key::R => events.push(InputEvent::Key(ControlKey::Reset)),
                        Key::Escape => events.push(InputEvent::Quit),
                        _ => {}
                    },
                    _ => {}
                }
            }
            events
        })
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_events(ctx);
        let pointer = ctx.input(|i| i.pointer.hover_pos());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.controller.generation()));
                ui.separator();
                ui.label(format!(
                    "Live cells: {}",
                    self.controller.grid().population()
                ));
                ui.separator();
                ui.label(if self.controller.running() {
                    "▶ running"
                } else {
                    "⏸ paused"
                });
                ui.separator();
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });
            ui.label("Left-drag draws, right-drag erases. Space runs, enter steps, R resets.");
            ui.separator();

            let layout = *self.controller.layout();
            let (grid_w, grid_h) = layout.grid_size();
            let (response, painter) =
                ui.allocate_painter(Vec2::new(grid_w, grid_h), Sense::click_and_drag());
            let origin = response.rect.min;

            // One controller tick per rendered frame, before the paint pass
            // so the render below reads a fully settled generation.
            let local = pointer.map(|p| (p.x - origin.x, p.y - origin.y));
            self.controller.frame(&events, local);

            painter.rect_filled(response.rect, 0.0, self.gap_color);
            let grid = self.controller.grid();
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let (x, y) = layout.cell_origin(row, col);
                    let rect = Rect::from_min_size(
                        egui::pos2(origin.x + x, origin.y + y),
                        Vec2::splat(layout.cell_size),
                    );
                    let cell = grid
                        .get(row, col)
                        .expect("render loop stays inside the grid");
                    let color = if cell == Cell::Alive {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 2.0, color);
                }
            }
        });

        if self.controller.quit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if self.controller.running() {
            ctx.request_repaint();
        }
    }
}
