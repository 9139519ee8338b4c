//! Keyboard focus over the page's links.

/// Cursor over a fixed number of focusable links.
///
/// Starts unfocused; the first `next` lands on the first link and the first
/// `prev` on the last. Both wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRing {
    index: Option<usize>,
    len: usize,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { index: None, len }
    }

    pub fn current(&self) -> Option<usize> {
        self.index
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = Some(match self.index {
            Some(i) => (i + 1) % self.len,
            None => 0,
        });
        self.index
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = Some(match self.index {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        });
        self.index
    }
}
