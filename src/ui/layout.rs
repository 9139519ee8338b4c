//! Responsive layout.
//!
//! [`LayoutContext`] wraps the terminal dimensions and answers the few sizing
//! questions the page needs: how wide the reading column is, and whether the
//! nav bar and hint line have to shorten their labels.

use ratatui::layout::Rect;

/// Terminal width breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;
}

/// Widest the reading column grows, in columns.
pub const MAX_COLUMN_WIDTH: u16 = 96;

/// Horizontal gutter on each side of the reading column.
pub const COLUMN_GUTTER: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Narrower than a standard 80-column terminal.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// The centered reading column inside `area`.
    pub fn content_column(&self, area: Rect) -> Rect {
        let available = area.width.saturating_sub(COLUMN_GUTTER * 2).max(1);
        let width = available.min(MAX_COLUMN_WIDTH).min(area.width);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        Rect {
            x,
            y: area.y,
            width,
            height: area.height,
        }
    }
}
