//! Lays a [`Page`] out as scrollable terminal rows.
//!
//! The body of the page (hero, sections, footer) becomes one flat list of
//! pre-wrapped lines plus a [`DocumentGeometry`] recording where every
//! section and link landed. The nav bar is drawn separately and never
//! scrolls.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::icons;
use super::palette::Palette;
use super::wrap::{truncate, wrap};
use crate::content::Icon;
use crate::domain::DocumentGeometry;
use crate::page::{
    EducationCard, ExperienceCard, Hero, Link, Page, ProjectCard, Section, SectionBody, SkillCard,
};

/// Left bar drawn in front of every card row.
const CARD_BAR: &str = "┃ ";
const BULLET: &str = "• ";
const BULLET_HANG: &str = "  ";
const CHIP_GAP: &str = "  ";

pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub geometry: DocumentGeometry,
}

impl Document {
    /// Lay out `page` for a column `width` cells wide.
    ///
    /// `focused` indexes [`Page::links`]; that link is drawn highlighted.
    pub fn build(page: &Page, width: usize, palette: &Palette, focused: Option<usize>) -> Self {
        let mut builder = Builder {
            palette,
            width: width.max(1),
            focused,
            lines: Vec::new(),
            geometry: DocumentGeometry::default(),
        };

        // The resume action lives in the fixed nav bar, not in the body.
        builder.geometry.link_rows.push(None);

        builder.hero(&page.hero);
        for section in &page.sections {
            builder.section(section);
        }
        builder.footer(&page.footer.text());

        builder.geometry.total_rows = builder.lines.len();
        Document {
            lines: builder.lines,
            geometry: builder.geometry,
        }
    }
}

struct Builder<'a> {
    palette: &'a Palette,
    width: usize,
    focused: Option<usize>,
    lines: Vec<Line<'static>>,
    geometry: DocumentGeometry,
}

impl Builder<'_> {
    fn row(&self) -> usize {
        self.lines.len()
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        self.lines.push(Line::from(spans));
    }

    /// Wrapped paragraph with a fixed prefix on every row.
    fn paragraph(&mut self, prefix: &'static str, text: &str, style: ratatui::style::Style) {
        let prefix_style = self.palette.border();
        let available = self.width.saturating_sub(prefix.width());
        for row in wrap(text, available) {
            self.push(vec![
                Span::styled(prefix, prefix_style),
                Span::styled(row, style),
            ]);
        }
    }

    /// Bulleted paragraph with a hanging indent under the card bar.
    fn bullet(&mut self, text: &str) {
        let border = self.palette.border();
        let muted = self.palette.muted();
        let available = self
            .width
            .saturating_sub(CARD_BAR.width() + BULLET.width());
        for (i, row) in wrap(text, available).into_iter().enumerate() {
            let marker = if i == 0 { BULLET } else { BULLET_HANG };
            self.push(vec![
                Span::styled(CARD_BAR, border),
                Span::styled(marker, muted),
                Span::styled(row, muted),
            ]);
        }
    }

    /// Link chips flowed across rows. Records each link's row in page-link order.
    fn link_row(&mut self, prefix: &'static str, links: &[Link]) {
        let prefix_style = self.palette.border();
        let mut spans: Vec<Span<'static>> = vec![Span::styled(prefix, prefix_style)];
        let mut used = prefix.width();

        for link in links {
            let chip = truncate(
                &format!("[{}{}]", icons::prefix(link.icon), link.label),
                self.width.saturating_sub(prefix.width()),
            );
            let chip_width = chip.width();
            let gap = if spans.len() > 1 { CHIP_GAP.width() } else { 0 };

            if spans.len() > 1 && used + gap + chip_width > self.width {
                self.push(std::mem::take(&mut spans));
                spans.push(Span::styled(prefix, prefix_style));
                used = prefix.width();
            } else if gap > 0 {
                spans.push(Span::raw(CHIP_GAP));
                used += gap;
            }

            let index = self.geometry.link_rows.len();
            let focused = self.focused == Some(index);
            self.geometry.link_rows.push(Some(self.row()));
            spans.push(Span::styled(chip, self.palette.link(focused)));
            used += chip_width;
        }

        if spans.len() > 1 {
            self.push(spans);
        }
    }

    fn labelled(&mut self, icon: Icon, text: &str) {
        let muted = self.palette.muted();
        let prefix = icons::prefix(Some(icon));
        let available = self.width.saturating_sub(prefix.width());
        for (i, row) in wrap(text, available).into_iter().enumerate() {
            let lead = if i == 0 {
                prefix.clone()
            } else {
                " ".repeat(prefix.width())
            };
            self.push(vec![Span::styled(lead, muted), Span::styled(row, muted)]);
        }
    }

    fn hero(&mut self, hero: &Hero) {
        self.blank();
        let badge = format!("{}{}", icons::prefix(Some(Icon::Rocket)), hero.badge);
        self.paragraph("", &badge, self.palette.border());
        self.blank();

        // Name in bold, title in accent; wrap as one heading.
        let name_part = format!("Hi, I'm {} — ", hero.name);
        let heading = hero.heading();
        let strong = self.palette.strong();
        let accent = self.palette.heading();
        let mut consumed = 0;
        for row in wrap(&heading, self.width) {
            let row_len = row.len();
            // Split the row where the name part ends, if it ends inside this row.
            let name_end = name_part.trim_end().len().saturating_sub(consumed);
            if name_end >= row_len {
                self.push(vec![Span::styled(row, strong)]);
            } else if name_end == 0 || !row.is_char_boundary(name_end) {
                self.push(vec![Span::styled(row, accent)]);
            } else {
                let (head, tail) = row.split_at(name_end);
                self.push(vec![
                    Span::styled(head.to_string(), strong),
                    Span::styled(tail.to_string(), accent),
                ]);
            }
            consumed += row_len + 1;
        }
        self.blank();

        self.paragraph("", hero.tagline, self.palette.muted());
        self.blank();

        self.link_row("", &hero.calls_to_action);
        self.blank();

        self.labelled(Icon::MapPin, hero.location);
        self.labelled(Icon::Phone, hero.phone);
        self.link_row("", &hero.socials);
        self.labelled(Icon::User, &format!("Portrait: {}", hero.avatar_url));
        self.blank();
    }

    fn section(&mut self, section: &Section) {
        let start = self.row();

        let title = format!("{}{}", icons::prefix(section.icon), section.title);
        let rule_width = title.width().max(8).min(self.width);
        self.push(vec![Span::styled(title, self.palette.heading())]);
        self.push(vec![Span::styled("─".repeat(rule_width), self.palette.border())]);
        self.blank();

        match &section.body {
            SectionBody::Prose(text) => self.paragraph("", text, self.palette.text()),
            SectionBody::Skills(cards) => self.cards(cards, Self::skill_card),
            SectionBody::Projects(cards) => self.cards(cards, Self::project_card),
            SectionBody::Experience(cards) => self.cards(cards, Self::experience_card),
            SectionBody::Education(cards) => self.cards(cards, Self::education_card),
            SectionBody::Contact(links) => self.link_row("", links),
        }
        self.blank();
        self.blank();

        self.geometry.sections.push((section.id, start..self.row()));
    }

    fn cards<T>(&mut self, cards: &[T], draw: fn(&mut Self, &T)) {
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            draw(self, card);
        }
    }

    fn skill_card(&mut self, card: &SkillCard) {
        self.paragraph(CARD_BAR, card.title, self.palette.strong());
        self.paragraph(CARD_BAR, &card.items.join(" · "), self.palette.text());
    }

    fn project_card(&mut self, card: &ProjectCard) {
        self.paragraph(CARD_BAR, card.name, self.palette.strong());
        self.paragraph(CARD_BAR, card.description, self.palette.muted());
        if !card.tags.is_empty() {
            self.paragraph(CARD_BAR, &card.tags.join(" · "), self.palette.border());
        }
        self.link_row(CARD_BAR, &card.links);
    }

    fn experience_card(&mut self, card: &ExperienceCard) {
        self.paragraph(CARD_BAR, &card.heading(), self.palette.strong());
        self.paragraph(CARD_BAR, card.period, self.palette.muted());
        for point in card.points {
            self.bullet(point);
        }
    }

    fn education_card(&mut self, card: &EducationCard) {
        self.paragraph(CARD_BAR, card.degree, self.palette.strong());
        self.paragraph(CARD_BAR, card.period, self.palette.muted());
        self.paragraph(CARD_BAR, card.school, self.palette.muted());
    }

    fn footer(&mut self, text: &str) {
        self.push(vec![Span::styled("─".repeat(self.width), self.palette.border())]);
        self.paragraph("", text, self.palette.muted());
        self.blank();
    }
}
