// controller.rs - Maps input events to grid edits and simulation control

use tracing::{debug, info};

use crate::grid::{Cell, Grid, GridError};
use crate::input::{Button, ControlKey, InputEvent, Layout};

/// Owns the grid and the transient interaction flags, and is its sole
/// mutator. The host feeds it one batch of events per frame plus the
/// current pointer position; everything else is internal.
pub struct Controller {
    grid: Grid,
    layout: Layout,
    drawing: bool,
    erasing: bool,
    running: bool,
    quit: bool,
    generation: u32,
}

impl Controller {
    pub fn new(layout: Layout) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(layout.rows, layout.cols)?,
            layout,
            drawing: false,
            erasing: false,
            running: false,
            quit: false,
            generation: 0,
        })
    }

    /// Run one frame: apply the pending events in arrival order, then either
    /// paint/erase at the pointer (while a button is held) or, when running
    /// and not editing, advance one generation. At most one of those two
    /// happens per frame.
    pub fn frame(&mut self, events: &[InputEvent], pointer: Option<(f32, f32)>) {
        for &event in events {
            self.apply(event);
        }

        if self.drawing || self.erasing {
            self.edit_at(pointer);
        } else if self.running {
            self.step();
        }
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(Button::Primary) => self.drawing = true,
            InputEvent::PointerUp(Button::Primary) => self.drawing = false,
            InputEvent::PointerDown(Button::Secondary) => self.erasing = true,
            InputEvent::PointerUp(Button::Secondary) => self.erasing = false,
            InputEvent::Key(ControlKey::ToggleRun) => {
                self.running = !self.running;
                debug!(running = self.running, "toggled simulation");
            }
            InputEvent::Key(ControlKey::Step) => self.step(),
            InputEvent::Key(ControlKey::Reset) => self.reset(),
            InputEvent::Quit => {
                info!("quit requested");
                self.quit = true;
            }
        }
    }

    fn step(&mut self) {
        self.grid.advance();
        self.generation += 1;
    }

    /// Clear the grid in place and drop every transient flag. The session
    /// keeps the same grid object, so render-side references stay valid.
    fn reset(&mut self) {
        info!(generation = self.generation, "reset");
        self.grid.reset();
        self.drawing = false;
        self.erasing = false;
        self.running = false;
        self.generation = 0;
    }

    fn edit_at(&mut self, pointer: Option<(f32, f32)>) {
        let Some((x, y)) = pointer else { return };
        let Some((row, col)) = self.layout.hit_test(x, y) else {
            // Pointer in a gap or off the grid: not an error, nothing to do.
            return;
        };
        // Drawing wins if both buttons are somehow held.
        let value = if self.drawing { Cell::Alive } else { Cell::Dead };
        self.grid
            .set(row, col, value)
            .expect("hit test stays inside the grid");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}
