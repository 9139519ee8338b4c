//! Terminal glyphs for icon slots.

use crate::content::Icon;

/// Single-cell glyph for an icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Github => "⌥",
        Icon::Linkedin => "◨",
        Icon::Mail => "✉",
        Icon::Phone => "☎",
        Icon::MapPin => "⌖",
        Icon::Sun => "☀",
        Icon::Moon => "☾",
        Icon::ExternalLink => "↗",
        Icon::Download => "⤓",
        Icon::Code => "❯",
        Icon::Briefcase => "▣",
        Icon::Rocket => "➶",
        Icon::Star => "★",
        Icon::User => "◉",
    }
}

/// Glyph followed by a space, or nothing for an empty slot.
pub fn prefix(icon: Option<Icon>) -> String {
    icon.map(|icon| format!("{} ", glyph(icon)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_icon_renders_nothing() {
        assert_eq!(prefix(None), "");
        assert_eq!(prefix(Some(Icon::Star)), "★ ");
    }
}
