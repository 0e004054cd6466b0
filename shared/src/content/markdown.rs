//! Markdown to HTML conversion for blog posts.
//!
//! Post bodies are authored by the site owner, so the generated HTML is
//! trusted and inserted into templates unescaped.

use handlebars::html_escape;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;

/// Renders `markdown` to HTML.
///
/// Headings without an explicit `{#id}` get an id derived from their text,
/// and absolute links open in a new tab.
#[must_use]
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options).collect();
    assign_heading_ids(&mut events);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, open_external_links_in_new_tab(events));
    out
}

fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        let Event::Start(Tag::Heading { id: None, .. }) = &events[i] else {
            continue;
        };

        let text: String = events[i + 1..]
            .iter()
            .take_while(|e| !matches!(e, Event::End(TagEnd::Heading(_))))
            .filter_map(|e| match e {
                Event::Text(t) | Event::Code(t) => Some(t.as_ref()),
                _ => None,
            })
            .collect();

        let base = slugify(&text);
        if base.is_empty() {
            continue;
        }
        let count = seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{base}-{count}")
        };
        *count += 1;

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
    }
}

fn open_external_links_in_new_tab<'a>(
    events: Vec<Event<'a>>,
) -> impl Iterator<Item = Event<'a>> {
    let mut external = Vec::new();

    events.into_iter().map(move |event| match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            if is_external(&dest_url) {
                external.push(true);
                Event::InlineHtml(CowStr::from(anchor_tag(&dest_url, &title)))
            } else {
                external.push(false);
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                })
            }
        }
        Event::End(TagEnd::Link) => {
            if external.pop() == Some(true) {
                Event::InlineHtml(CowStr::Borrowed("</a>"))
            } else {
                Event::End(TagEnd::Link)
            }
        }
        other => other,
    })
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn anchor_tag(href: &str, title: &str) -> String {
    let mut tag = format!(r#"<a href="{}""#, html_escape(href));
    if !title.is_empty() {
        tag.push_str(&format!(r#" title="{}""#, html_escape(title)));
    }
    tag.push_str(r#" target="_blank" rel="noopener">"#);
    tag
}

/// Lower-cases `text` and joins its alphanumeric runs with `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
