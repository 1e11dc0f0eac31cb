//! Selected record index.

/// Optional index of the highlighted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    /// Select `index`, or clear the selection when it is out of range.
    pub fn select(&mut self, index: usize, len: usize) {
        self.0 = (index < len).then_some(index);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.0
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0 == Some(index)
    }

    /// The selected index if it still points into a list of `len` records.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        self.0.filter(|&i| i < len)
    }
}
