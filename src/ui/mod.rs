//! Terminal rendering.
//!
//! One frame is three bands:
//! - Nav bar: brand, section entries, theme indicator, resume action
//! - Body: the laid-out [`Document`] scrolled to the app's offset, with
//!   unrevealed sections blanked and entering sections drawn low and dim
//! - Hint line: keybinds, shortened on narrow terminals
//!
//! The palette is chosen once per frame from the page's theme snapshot and
//! applied at the root block, so every band switches theme together.

pub mod document;
pub mod icons;
pub mod layout;
pub mod nav_bar;
pub mod palette;
pub mod wrap;

pub use document::Document;
pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use palette::Palette;

use std::ops::Range;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::domain::DocumentGeometry;
use crate::page::SectionId;
use crate::state::RevealPhase;
use nav_bar::{render_nav_bar, NAV_HEIGHT};

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let page = app.page();
    let palette = Palette::for_mode(page.theme);

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Fixed nav bar
            Constraint::Min(1),             // Scrolling body
            Constraint::Length(1),          // Keybind hints
        ])
        .split(area);

    let column = ctx.content_column(chunks[1]);
    let Document { lines, geometry } = Document::build(
        &page,
        usize::from(column.width),
        palette,
        app.focused_link(),
    );
    app.sync_layout(geometry, usize::from(column.height));

    render_nav_bar(
        frame,
        chunks[0],
        &page.nav,
        palette,
        app.current_section(),
        app.focused_link() == Some(0),
    );

    let now = app.tick_count;
    let reveal = app.reveal();
    let body = visible_lines(&lines, app.geometry(), &app.scroll().viewport(), |id| {
        reveal.phase(id, now)
    });
    frame.render_widget(Paragraph::new(body), column);

    frame.render_widget(
        Paragraph::new(keybind_hints(palette, &ctx)),
        hint_area(chunks[2]),
    );
}

/// Rows of `lines` inside `viewport`, with reveal phases applied per section.
///
/// Rows outside every section (hero, footer) are always drawn. A hidden
/// section keeps its height but draws nothing. An entering section is drawn
/// `offset` rows below its settled position and dimmed, clipped to its own
/// range so it never bleeds into the section above.
pub fn visible_lines(
    lines: &[Line<'static>],
    geometry: &DocumentGeometry,
    viewport: &Range<usize>,
    phase_of: impl Fn(SectionId) -> RevealPhase,
) -> Vec<Line<'static>> {
    let end = viewport.end.min(lines.len());
    (viewport.start..end)
        .map(|row| {
            let Some((id, range)) = geometry
                .sections
                .iter()
                .find(|(_, range)| range.contains(&row))
            else {
                return lines[row].clone();
            };
            match phase_of(*id) {
                RevealPhase::Hidden => Line::default(),
                RevealPhase::Settled => lines[row].clone(),
                RevealPhase::Entering { offset } => row
                    .checked_sub(usize::from(offset))
                    .filter(|source| *source >= range.start)
                    .map(|source| lines[source].clone().patch_style(Modifier::DIM))
                    .unwrap_or_default(),
            }
        })
        .collect()
}

fn hint_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1.min(area.width),
        width: area.width.saturating_sub(1),
        ..area
    }
}

/// Keybind hints, shortened as the terminal narrows.
pub fn keybind_hints(palette: &Palette, ctx: &LayoutContext) -> Line<'static> {
    let hints: &[(&'static str, &'static str)] = match ctx.width_category() {
        SizeCategory::ExtraSmall => &[("j/k", "scroll"), ("t", "theme"), ("q", "quit")],
        SizeCategory::Small => &[
            ("j/k", "scroll"),
            ("1-6", "jump"),
            ("Tab", "link"),
            ("t", "theme"),
            ("q", "quit"),
        ],
        SizeCategory::Medium => &[
            ("j/k", "scroll"),
            ("1-6", "jump"),
            ("Tab", "link"),
            ("t", "theme"),
            ("r", "resume"),
            ("q", "quit"),
        ],
        SizeCategory::Large => &[
            ("j/k", "scroll"),
            ("1-6", "sections"),
            ("Tab", "next link"),
            ("Enter", "follow"),
            ("t", "theme"),
            ("r", "resume"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", palette.border()));
        }
        spans.push(Span::styled(format!("[{key}]"), palette.heading()));
        spans.push(Span::styled(format!(" {action}"), palette.muted()));
    }
    Line::from(spans)
}
