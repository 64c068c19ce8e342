use std::ops::Range;

use crate::error::FinderError;

/// Space a renderer has for candidate rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    width: usize,
}

impl Dimensions {
    pub fn new(rows: usize, width: usize) -> Result<Self, FinderError> {
        if rows == 0 || width == 0 {
            return Err(FinderError::InvalidDimensions { rows, width });
        }
        Ok(Self { rows, width })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Caps the row count, e.g. from a configured maximum.
    pub fn limit_rows(self, max_rows: Option<usize>) -> Self {
        match max_rows {
            Some(max) if max > 0 => Self {
                rows: self.rows.min(max),
                ..self
            },
            _ => self,
        }
    }
}

/// Scroll position of the visible window over the filtered view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the window as little as possible so that `cursor` stays visible,
    /// then returns the visible index range.
    pub fn follow(&mut self, cursor: usize, len: usize, rows: usize) -> Range<usize> {
        if len == 0 || rows == 0 {
            self.offset = 0;
            return 0..0;
        }

        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + rows {
            self.offset = cursor + 1 - rows;
        }

        // list shrank underneath us
        self.offset = self.offset.min(len.saturating_sub(rows));

        self.offset..(self.offset + rows).min(len)
    }
}
