//! Fixed navigation bar.
//!
//! Brand on the left, one numbered entry per rendered section, then the
//! theme indicator and the resume action on the right. The entries come
//! straight from [`NavBar::links`], so the bar lists exactly the sections the
//! body renders.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons;
use super::layout::LayoutContext;
use super::palette::Palette;
use crate::page::{NavBar, SectionId};

/// Rows the bar occupies, bottom border included.
pub const NAV_HEIGHT: u16 = 2;

/// Left half: brand and section entries.
pub fn links_line(
    nav: &NavBar,
    palette: &Palette,
    ctx: &LayoutContext,
    current: Option<SectionId>,
) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];

    if !ctx.is_extra_small() {
        spans.push(Span::styled(nav.brand, palette.heading()));
        spans.push(Span::raw("  "));
    }

    for (i, link) in nav.links.iter().enumerate() {
        let number = format!("{}", i + 1);
        let active = current == Some(link.section);
        let label_style = if active {
            palette
                .text()
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            palette.muted()
        };

        spans.push(Span::styled(number, palette.border()));
        if ctx.is_narrow() {
            if active {
                spans.push(Span::styled("•", label_style));
            }
        } else {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(link.label, label_style));
        }
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Right half: theme indicator and resume action.
pub fn actions_line(
    nav: &NavBar,
    palette: &Palette,
    ctx: &LayoutContext,
    resume_focused: bool,
) -> Line<'static> {
    let toggle = icons::glyph(nav.theme_toggle.indicator);
    let resume = if ctx.is_narrow() {
        icons::prefix(nav.resume.icon).trim_end().to_string()
    } else {
        format!("{}{}", icons::prefix(nav.resume.icon), nav.resume.label)
    };

    Line::from(vec![
        Span::styled(toggle, palette.heading()),
        Span::styled(" t", palette.border()),
        Span::raw("  "),
        Span::styled(resume, palette.link(resume_focused)),
        Span::styled(" r ", palette.border()),
    ])
}

pub fn render_nav_bar(
    frame: &mut Frame,
    area: Rect,
    nav: &NavBar,
    palette: &Palette,
    current: Option<SectionId>,
    resume_focused: bool,
) {
    let ctx = LayoutContext::new(area.width, area.height);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let actions = actions_line(nav, palette, &ctx, resume_focused);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(actions.width() as u16),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(links_line(nav, palette, &ctx, current)),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(actions), chunks[1]);
}
