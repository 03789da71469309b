use std::ops::Range;

/// Contiguous run of rows `[start_row, end_row)` owned by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Band {
    index: usize,
    start_row: u32,
    end_row: u32,
}

impl Band {
    #[must_use]
    pub(crate) fn new(index: usize, start_row: u32, end_row: u32) -> Self {
        debug_assert!(start_row < end_row);

        Self {
            index,
            start_row,
            end_row,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    #[must_use]
    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.end_row - self.start_row
    }

    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }
}
