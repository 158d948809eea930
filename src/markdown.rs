//! Markdown rendering for article bodies.
//!
//! Headings get stable `id` attributes so the table of contents can link to
//! them. An explicit `{#id}` on the heading wins; otherwise the id is derived
//! from the heading text by [`slugify`].

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use std::collections::HashSet;

/// One table-of-contents entry, taken from a `##` heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
}

fn options() -> Options {
    Options::ENABLE_HEADING_ATTRIBUTES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Parse and give every heading with sluggable text an id.
///
/// Ids are unique within the document: a slug that is already taken (by an
/// explicit id or an earlier heading) gets a `-2`, `-3`, ... suffix. Headings
/// whose text slugs to nothing stay without an id.
fn parse_with_heading_ids(markdown: &str) -> Vec<Event<'_>> {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options()).collect();
    let mut taken: HashSet<String> = events
        .iter()
        .filter_map(|event| match event {
            Event::Start(Tag::Heading { id: Some(id), .. }) => Some(id.to_string()),
            _ => None,
        })
        .collect();

    for index in 0..events.len() {
        if !matches!(events[index], Event::Start(Tag::Heading { id: None, .. })) {
            continue;
        }
        let slug = slugify(&heading_text(&events[index + 1..]));
        if slug.is_empty() {
            continue;
        }
        let unique = unique_id(slug, &taken);
        taken.insert(unique.clone());
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[index] {
            *id = Some(CowStr::from(unique));
        }
    }
    events
}

fn unique_id(slug: String, taken: &HashSet<String>) -> String {
    if !taken.contains(&slug) {
        return slug;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{slug}-{n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Text of a heading, given the events that follow its start tag.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Render Markdown to HTML with heading ids.
pub fn render_markdown(markdown: &str) -> String {
    let mut body = String::new();
    html::push_html(&mut body, parse_with_heading_ids(markdown).into_iter());
    body
}

/// Second-level headings, in document order.
pub fn table_of_contents(markdown: &str) -> Vec<TocEntry> {
    let events = parse_with_heading_ids(markdown);
    events
        .iter()
        .enumerate()
        .filter_map(|(index, event)| match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                id: Some(id),
                ..
            }) => Some(TocEntry {
                id: id.to_string(),
                title: heading_text(&events[index + 1..]),
            }),
            _ => None,
        })
        .collect()
}

/// Derive an anchor id from heading text.
///
/// ASCII is lowercased, whitespace becomes `-`, ASCII punctuation is dropped.
/// Non-ASCII text (Thai included) is kept as-is.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !c.is_ascii() {
            slug.push(c);
        }
    }
    slug.trim_end_matches('-').to_string()
}
