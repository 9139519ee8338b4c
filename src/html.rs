//! Static HTML export.
//!
//! Renders a composed [`Page`] as a single self-contained document: markup,
//! one inline stylesheet and one inline script. The script does two things:
//! it flips the root `dark` class when the theme button is pressed, and it
//! reveals each `data-reveal` section once, the first time it scrolls into
//! view. Without script support (or without `IntersectionObserver`) every
//! section is shown immediately.

use crate::content::Icon;
use crate::page::{
    EducationCard, ExperienceCard, Hero, Link, LinkTarget, NavBar, Page, ProjectCard, Section,
    SectionBody, SkillCard,
};
use crate::ui::icons;

/// Element id of the theme scope root.
pub const ROOT_ID: &str = "root";

/// Render `page` to a complete HTML document.
pub fn render_html(page: &Page) -> String {
    let mut html = Html::default();
    html.raw("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.raw("<meta charset=\"utf-8\">\n");
    html.raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.element(
        "title",
        &[],
        &format!("{} | {}", page.hero.name, page.hero.title),
    );
    html.void(
        "meta",
        &[("name", "description"), ("content", page.hero.tagline)],
    );
    html.raw("\n<style>");
    html.raw(STYLE);
    html.raw("</style>\n</head>\n<body>\n");

    let mut root_attrs = vec![("id", ROOT_ID)];
    if let Some(class) = page.root_scope {
        root_attrs.push(("class", class));
    }
    html.open("div", &root_attrs);

    nav(&mut html, &page.nav);
    html.open("main", &[("class", "container")]);
    hero(&mut html, &page.hero);
    for section in &page.sections {
        section_html(&mut html, section);
    }
    html.close("main");

    html.open("footer", &[("class", "container")]);
    html.element("p", &[], &page.footer.text());
    html.close("footer");

    html.close("div");
    html.raw("<script>");
    html.raw(SCRIPT);
    html.raw("</script>\n</body>\n</html>\n");
    html.finish()
}

fn nav(html: &mut Html, nav: &NavBar) {
    html.open("header", &[("class", "nav")]);
    html.open("div", &[("class", "container nav-inner")]);
    html.element("a", &[("class", "brand"), ("href", "#")], nav.brand);

    html.open("nav", &[("aria-label", "Sections")]);
    for link in &nav.links {
        html.element("a", &[("href", link.href)], link.label);
    }
    html.close("nav");

    html.open(
        "button",
        &[
            ("type", "button"),
            ("id", "theme-toggle"),
            ("aria-label", nav.theme_toggle.label),
        ],
    );
    html.element(
        "span",
        &[("class", "icon-sun"), ("aria-hidden", "true")],
        icons::glyph(Icon::Sun),
    );
    html.element(
        "span",
        &[("class", "icon-moon"), ("aria-hidden", "true")],
        icons::glyph(Icon::Moon),
    );
    html.close("button");

    link(html, &nav.resume, "button");
    html.close("div");
    html.close("header");
}

fn hero(html: &mut Html, hero: &Hero) {
    html.open("section", &[("class", "hero")]);
    html.open("div", &[("class", "hero-text")]);
    html.element("span", &[("class", "badge")], hero.badge);

    html.open("h1", &[]);
    html.text("Hi, I'm ");
    html.element("span", &[("class", "name")], hero.name);
    html.text(" — ");
    html.element("span", &[("class", "accent")], hero.title);
    html.close("h1");

    html.element("p", &[("class", "tagline")], hero.tagline);
    links(html, &hero.calls_to_action, "cta");

    html.open("p", &[("class", "meta")]);
    icon_span(html, Icon::MapPin);
    html.text(hero.location);
    html.close("p");
    html.open("p", &[("class", "meta")]);
    icon_span(html, Icon::Phone);
    html.text(hero.phone);
    html.close("p");

    links(html, &hero.socials, "socials");
    html.close("div");

    html.void(
        "img",
        &[
            ("class", "avatar"),
            ("src", hero.avatar_url),
            ("alt", "Portrait"),
        ],
    );
    html.close("section");
}

fn section_html(html: &mut Html, section: &Section) {
    html.open(
        "section",
        &[
            ("id", section.anchor),
            ("class", "section"),
            ("data-reveal", ""),
        ],
    );
    html.open("h2", &[]);
    if let Some(icon) = section.icon {
        icon_span(html, icon);
    }
    html.text(section.title);
    html.close("h2");

    match &section.body {
        SectionBody::Prose(text) => html.element("p", &[("class", "prose")], text),
        SectionBody::Skills(cards) => grid(html, cards, skill_card),
        SectionBody::Projects(cards) => grid(html, cards, project_card),
        SectionBody::Experience(cards) => grid(html, cards, experience_card),
        SectionBody::Education(cards) => grid(html, cards, education_card),
        SectionBody::Contact(contact) => links(html, contact, "contact"),
    }
    html.close("section");
}

fn grid<T>(html: &mut Html, cards: &[T], card: fn(&mut Html, &T)) {
    html.open("div", &[("class", "grid")]);
    for item in cards {
        card(html, item);
    }
    html.close("div");
}

fn skill_card(html: &mut Html, card: &SkillCard) {
    html.open("article", &[("class", "card"), ("data-key", card.key.as_str())]);
    html.element("h3", &[], card.title);
    tags(html, card.items);
    html.close("article");
}

fn project_card(html: &mut Html, card: &ProjectCard) {
    html.open("article", &[("class", "card"), ("data-key", card.key.as_str())]);
    html.element("h3", &[], card.name);
    html.element("p", &[("class", "muted")], card.description);
    tags(html, card.tags);
    if !card.links.is_empty() {
        links(html, &card.links, "card-links");
    }
    html.close("article");
}

fn experience_card(html: &mut Html, card: &ExperienceCard) {
    html.open("article", &[("class", "card"), ("data-key", card.key.as_str())]);
    html.element("h3", &[], &card.heading());
    html.element("p", &[("class", "period")], card.period);
    html.open("ul", &[("class", "points")]);
    for point in card.points {
        html.element("li", &[], point);
    }
    html.close("ul");
    html.close("article");
}

fn education_card(html: &mut Html, card: &EducationCard) {
    html.open("article", &[("class", "card"), ("data-key", card.key.as_str())]);
    html.element("h3", &[], card.degree);
    html.element("p", &[("class", "period")], card.period);
    html.element("p", &[("class", "muted")], card.school);
    html.close("article");
}

fn tags(html: &mut Html, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    html.open("ul", &[("class", "tags")]);
    for item in items {
        html.element("li", &[], item);
    }
    html.close("ul");
}

fn links(html: &mut Html, items: &[Link], class: &str) {
    html.open("div", &[("class", class)]);
    for item in items {
        link(html, item, "link");
    }
    html.close("div");
}

fn link(html: &mut Html, link: &Link, class: &str) {
    let mut attrs = vec![("class", class), ("href", link.href.as_str())];
    if link.target == LinkTarget::NewContext {
        attrs.push(("target", "_blank"));
    }
    if let Some(rel) = link.rel() {
        attrs.push(("rel", rel));
    }
    html.open("a", &attrs);
    if let Some(icon) = link.icon {
        icon_span(html, icon);
    }
    html.text(link.label);
    html.close("a");
}

fn icon_span(html: &mut Html, icon: Icon) {
    html.element(
        "span",
        &[("class", "icon"), ("aria-hidden", "true")],
        icons::glyph(icon),
    );
}

/// Escape text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Append-only markup writer. Text and attribute values are always escaped.
#[derive(Default)]
struct Html {
    out: String,
}

impl Html {
    fn raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    fn text(&mut self, text: &str) {
        self.out.push_str(&escape(text));
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            if !value.is_empty() {
                self.out.push_str("=\"");
                self.out.push_str(&escape(value));
                self.out.push('"');
            }
        }
        self.out.push('>');
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs);
        self.out.push('\n');
    }

    /// Element with no closing tag.
    fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.open(tag, attrs);
    }

    fn close(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.start_tag(tag, attrs);
        self.text(text);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn finish(self) -> String {
        self.out
    }
}

const STYLE: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
#root { --bg: #fafafc; --fg: #181820; --muted: #646473; --accent: #4338ca; --border: #d4d4dc; --card: #ffffff;
        background: var(--bg); color: var(--fg); min-height: 100vh; transition: background .3s, color .3s; }
#root.dark { --bg: #0a0a12; --fg: #e6e6eb; --muted: #8c8c9b; --accent: #818cf8; --border: #2a2a38; --card: #12121e; }
#root:not(.dark) .icon-sun { display: none; }
#root.dark .icon-moon { display: none; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.nav { position: sticky; top: 0; z-index: 10; background: var(--bg); border-bottom: 1px solid var(--border); }
.nav-inner { display: flex; align-items: center; gap: 1.5rem; height: 4rem; }
.nav nav { display: flex; gap: 1rem; flex: 1; flex-wrap: wrap; }
.nav a, .link { color: inherit; text-decoration: none; }
.nav nav a { color: var(--muted); }
.nav nav a:hover, .link:hover { color: var(--accent); }
.brand { font-weight: 700; color: var(--accent); }
#theme-toggle { background: none; border: 1px solid var(--border); border-radius: .5rem; color: var(--fg);
                padding: .25rem .6rem; cursor: pointer; }
.button { border: 1px solid var(--accent); border-radius: .5rem; padding: .35rem .8rem; }
.hero { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 2rem; padding: 4rem 0; }
.hero-text { flex: 1 1 24rem; }
.badge { display: inline-block; border: 1px solid var(--border); border-radius: 999px; padding: .2rem .8rem;
         font-size: .85rem; color: var(--muted); margin-bottom: 1rem; }
h1 { font-size: 2.4rem; line-height: 1.2; margin-bottom: 1rem; }
.accent { color: var(--accent); }
.tagline, .muted, .period, .meta { color: var(--muted); }
.tagline { font-size: 1.1rem; margin-bottom: 1.5rem; }
.cta, .socials, .contact, .card-links { display: flex; flex-wrap: wrap; gap: .75rem; margin: 1rem 0; }
.cta .link { border: 1px solid var(--accent); border-radius: .5rem; padding: .5rem 1rem; }
.avatar { width: 14rem; height: 14rem; border-radius: 50%; object-fit: cover; border: 4px solid var(--border); }
.icon { margin-right: .4rem; }
.section { padding: 3rem 0; }
h2 { font-size: 1.6rem; margin-bottom: 1.5rem; }
.prose { max-width: 48rem; line-height: 1.7; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: .75rem; padding: 1.25rem; }
.card h3 { font-size: 1.05rem; margin-bottom: .5rem; }
.tags { list-style: none; display: flex; flex-wrap: wrap; gap: .4rem; margin-top: .75rem; }
.tags li { border: 1px solid var(--border); border-radius: 999px; padding: .1rem .6rem; font-size: .8rem; }
.points { margin: .5rem 0 0 1.2rem; color: var(--muted); line-height: 1.6; }
footer { border-top: 1px solid var(--border); padding: 2rem 1.5rem; color: var(--muted); text-align: center; }
.js [data-reveal] { opacity: 0; transform: translateY(20px); transition: opacity .5s ease-out, transform .5s ease-out; }
.js [data-reveal].revealed { opacity: 1; transform: none; }
@media (prefers-reduced-motion: reduce) {
  .js [data-reveal] { opacity: 1; transform: none; transition: none; }
}
"#;

const SCRIPT: &str = r#"
(function () {
  var root = document.getElementById('root');
  var toggle = document.getElementById('theme-toggle');
  if (root && toggle) {
    toggle.addEventListener('click', function () { root.classList.toggle('dark'); });
  }
  if (!('IntersectionObserver' in window)) { return; }
  document.documentElement.classList.add('js');
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add('revealed');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1 });
  document.querySelectorAll('[data-reveal]').forEach(function (el) { observer.observe(el); });
})();
"#;
