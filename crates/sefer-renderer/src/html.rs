//! HTML backend for recipe rendering.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::fragment::{Fragment, FragmentBody};
use crate::role::Role;

/// HTML render backend.
///
/// Produces:
/// - `<div class="recipe-{role}">` around each role region
/// - `<h1>`..`<h6>` for headings
/// - `<p>` for descriptions, `<ul>` for ingredients, `<ol>` for steps
///
/// Line breaks inside a description or step become `<br>`.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn container_start(role: Role, out: &mut String) {
        write!(out, r#"<div class="recipe-{}">"#, role.name()).unwrap();
    }

    fn container_end(_role: Role, out: &mut String) {
        out.push_str("</div>");
    }

    fn fragment(fragment: &Fragment, out: &mut String) {
        let level = fragment.heading.level.clamp(1, 6);
        write!(
            out,
            "<h{level}>{}</h{level}>",
            escape_html(&fragment.heading.text)
        )
        .unwrap();

        if fragment.body.is_empty() {
            return;
        }
        match &fragment.body {
            FragmentBody::Description(text) => {
                write!(out, r#"<p class="description">{}</p>"#, multiline(text)).unwrap();
            }
            FragmentBody::Ingredients(items) => list(out, "ul", "ingredients", items),
            FragmentBody::Steps(steps) => list(out, "ol", "steps", steps),
        }
    }
}

fn list(out: &mut String, tag: &str, class: &str, items: &[String]) {
    write!(out, r#"<{tag} class="{class}">"#).unwrap();
    for item in items {
        write!(out, "<li>{}</li>", multiline(item)).unwrap();
    }
    write!(out, "</{tag}>").unwrap();
}

/// Escape text and turn line breaks into `<br>`.
fn multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>\n")
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
