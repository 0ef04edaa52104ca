// input.rs - Host-independent input events and screen-to-cell geometry

/// Pointer buttons the controller distinguishes. Primary draws, secondary
/// erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
}

/// Keyboard controls. The UI layer binds these to concrete keys
/// (space, enter, r).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    ToggleRun,
    Step,
    Reset,
}

/// One input event, delivered per frame in arrival order. The current
/// pointer position is not an event; it is queried once per frame and
/// passed alongside the event batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Button),
    PointerUp(Button),
    Key(ControlKey),
    Quit,
}

/// Pixel geometry of the cell grid: square cells of `cell_size` separated
/// (and surrounded) by `gap`. The same numbers drive layout and hit-testing,
/// so a painted cell and its clickable area always agree.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub gap: f32,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, cell_size: f32, gap: f32) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            gap,
        }
    }

    /// Total pixel size of the grid area: `cols*cell + (cols+1)*gap` wide,
    /// `rows*cell + (rows+1)*gap` tall.
    pub fn grid_size(&self) -> (f32, f32) {
        let width = self.cols as f32 * self.cell_size + (self.cols as f32 + 1.0) * self.gap;
        let height = self.rows as f32 * self.cell_size + (self.rows as f32 + 1.0) * self.gap;
        (width, height)
    }

    /// Top-left corner of cell `(row, col)`, relative to the grid origin.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let stride = self.cell_size + self.gap;
        (
            self.gap + col as f32 * stride,
            self.gap + row as f32 * stride,
        )
    }

    /// Map a position (relative to the grid origin) to the cell under it.
    /// Positions in a gap or outside the grid area map to `None`.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = self.hit_axis(x, self.cols)?;
        let row = self.hit_axis(y, self.rows)?;
        Some((row, col))
    }

    fn hit_axis(&self, v: f32, limit: usize) -> Option<usize> {
        let stride = self.cell_size + self.gap;
        if v < self.gap {
            return None;
        }
        let index = ((v - self.gap) / stride).floor();
        let offset = (v - self.gap) - index * stride;
        // Past the last cell, or in the gap after a cell.
        if index as usize >= limit || offset >= self.cell_size {
            return None;
        }
        Some(index as usize)
    }
}
