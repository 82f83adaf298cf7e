use windrow_core::{Garden, Load};

/// Row-major rectangle of cells implementing [`Garden`] directly, without
/// going through `VecGarden`. Negative loads mark blocked cells.
#[derive(Clone, Debug)]
pub struct Field {
    cols: usize,
    loads: Vec<i64>,
    capacity: Load,
}

impl Field {
    #[must_use]
    pub fn new(cols: usize, loads: Vec<i64>, capacity: Load) -> Self {
        assert!(cols > 0 && loads.len() % cols == 0, "ragged rows");
        Self {
            cols,
            loads,
            capacity,
        }
    }

    fn workable(&self, cell: usize) -> bool {
        self.loads.get(cell).is_some_and(|&load| load >= 0)
    }
}

impl Garden for Field {
    fn name(&self) -> &str {
        "field"
    }

    fn cell_count(&self) -> usize {
        self.loads.len()
    }

    fn load(&self, cell: usize) -> Option<Load> {
        let raw = *self.loads.get(cell)?;
        Load::try_from(raw).ok()
    }

    fn neighbours(&self, cell: usize) -> Vec<usize> {
        if !self.workable(cell) {
            return Vec::new();
        }
        let (row, col) = (cell / self.cols, cell % self.cols);
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push(cell - self.cols);
        }
        if col > 0 {
            out.push(cell - 1);
        }
        if col + 1 < self.cols {
            out.push(cell + 1);
        }
        out.push(cell + self.cols);
        out.retain(|&other| self.workable(other));
        out
    }

    fn capacity(&self) -> Load {
        self.capacity
    }

    fn sink_distance(&self, cell: usize) -> Option<u64> {
        // Sink below the bottom-right corner.
        if cell >= self.loads.len() {
            return None;
        }
        let rows = self.loads.len() / self.cols;
        let (row, col) = (cell / self.cols, cell % self.cols);
        u64::try_from((rows - row) + (self.cols - 1 - col)).ok()
    }
}
