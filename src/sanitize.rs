use html_escape::encode_text;
use log::trace;
use scraper::{ElementRef, Html, Node};

/// Inline tags that survive sanitization, always without attributes
pub const ALLOWED_TAGS: [&str; 5] = ["b", "q", "i", "strong", "sup"];

/// Elements dropped together with everything inside them
const FORBIDDEN_CONTENT: [&str; 25] = [
    "annotation-xml",
    "audio",
    "colgroup",
    "desc",
    "foreignobject",
    "head",
    "iframe",
    "math",
    "mi",
    "mn",
    "mo",
    "ms",
    "mtext",
    "noembed",
    "noframes",
    "noscript",
    "plaintext",
    "script",
    "style",
    "svg",
    "template",
    "thead",
    "title",
    "video",
    "xmp",
];

/// Strip all markup except the allowed inline tags
///
/// Text content is kept and re-escaped, attributes and comments are dropped.
/// Sanitizing an already sanitized string returns it unchanged.
pub fn sanitize_fragment(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(raw);
    let mut out = String::with_capacity(raw.len());
    write_children(&fragment.root_element(), &mut out);

    if out != raw {
        trace!("Sanitized {:?} into {:?}", raw, out);
    }
    out
}

fn write_children(element: &ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&encode_text(&**text)),
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    write_element(&child_ref, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: &ElementRef, out: &mut String) {
    let tag_name = element.value().name().to_lowercase();

    if FORBIDDEN_CONTENT.contains(&tag_name.as_str()) {
        return;
    }

    if ALLOWED_TAGS.contains(&tag_name.as_str()) {
        out.push('<');
        out.push_str(&tag_name);
        out.push('>');
        write_children(element, out);
        out.push_str("</");
        out.push_str(&tag_name);
        out.push('>');
    } else {
        write_children(element, out);
    }
}
