//! SVG normalization: raw documents to canonical, colorable fragments.
//!
//! The normalizer strips editor cruft (prolog, comments, metadata,
//! namespaced elements, denylisted ids), removes presentation attributes so
//! color stays overridable, guarantees a `viewBox`, prunes empty containers,
//! and returns only the markup between the `<svg>` tags. The `<svg>` wrapper
//! is regenerated later with dynamic size and fill.
//!
//! Normalization is idempotent: re-normalizing [`NormalizedIcon::to_svg`]
//! yields an identical [`NormalizedIcon`].

use std::fmt::Write as _;

use quick_xml::escape::escape;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// `viewBox` applied when the source document does not carry one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Elements removed wholesale during normalization.
const DROPPED_ELEMENTS: &[&str] = &["metadata", "title", "desc", "style"];

/// Presentation attributes that would hard-code appearance.
const DENIED_ATTRIBUTES: &[&str] = &["style", "fill", "x", "y", "class", "enable-background", "xml:space"];

/// Editor-generated `id` values (Illustrator layer and guide names).
const EDITOR_IDS: &[&str] = &["Layer_1", "Camada_1", "Info", "Keyline", "Create-Here"];

/// Container elements pruned when they end up empty.
const CONTAINER_ELEMENTS: &[&str] = &["g", "defs"];

/// Failure to normalize one asset. Recorded and skipped by the batch.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The markup could not be parsed.
    #[error("malformed SVG markup: {0}")]
    Parse(#[from] quick_xml::Error),

    /// An attribute could not be parsed.
    #[error("malformed SVG attribute: {0}")]
    Attribute(#[from] AttrError),

    /// The document contains no `<svg>` root element.
    #[error("missing <svg> root element")]
    MissingRoot,

    /// A closing tag appeared without a matching opening tag.
    #[error("unexpected closing tag '</{0}>'")]
    UnexpectedClose(String),

    /// The asset file could not be read.
    #[error("unreadable asset: {0}")]
    Read(#[from] std::io::Error),
}

/// Canonical output of the normalizer for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedIcon {
    /// `viewBox` of the source root, or [`DEFAULT_VIEW_BOX`].
    pub view_box: String,
    /// Inner markup with the `<svg>` wrapper removed.
    pub fragment: String,
    /// Number of top-level elements in the fragment.
    pub top_level: usize,
}

impl NormalizedIcon {
    /// Regenerates a minimal standalone document around the fragment.
    #[must_use]
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">{}</svg>"#,
            self.view_box, self.fragment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Normalizes one raw SVG document.
pub fn normalize(svg: &str) -> Result<NormalizedIcon, NormalizeError> {
    let root = parse_root(svg)?;

    let view_box = root
        .attrs
        .iter()
        .find(|(key, _)| key == "viewBox")
        .map_or_else(|| DEFAULT_VIEW_BOX.to_owned(), |(_, value)| value.clone());

    let children: Vec<Node> = root.children.into_iter().filter_map(clean_node).collect();

    let mut fragment = String::new();
    for node in &children {
        write_node(&mut fragment, node);
    }
    let top_level = children
        .iter()
        .filter(|node| matches!(node, Node::Element(_)))
        .count();

    Ok(NormalizedIcon {
        view_box,
        fragment,
        top_level,
    })
}

fn parse_root(svg: &str) -> Result<Element, NormalizeError> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(empty) => {
                let element = element_from(&empty)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None if element.tag == "svg" => return Ok(element),
                    None => {}
                }
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                let Some(element) = stack.pop() else {
                    return Err(NormalizeError::UnexpectedClose(name));
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None if element.tag == "svg" => return Ok(element),
                    None => {}
                }
            }
            Event::Text(text) => {
                let content = text.unescape()?;
                let collapsed = collapse_whitespace(&content);
                if !collapsed.is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Node::Text(collapsed));
                    }
                }
            }
            Event::CData(cdata) => {
                let content = String::from_utf8_lossy(&cdata).into_owned();
                let collapsed = collapse_whitespace(&content);
                if !collapsed.is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Node::Text(collapsed));
                    }
                }
            }
            Event::Eof => break,
            // Prolog, comments, doctypes, and processing instructions are
            // stripped.
            _ => {}
        }
    }

    Err(NormalizeError::MissingRoot)
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, NormalizeError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        attrs.push((key, value));
    }
    Ok(Element {
        tag,
        attrs,
        children: Vec::new(),
    })
}

fn clean_node(node: Node) -> Option<Node> {
    match node {
        Node::Text(text) => Some(Node::Text(text)),
        Node::Element(element) => clean_element(element).map(Node::Element),
    }
}

fn clean_element(element: Element) -> Option<Element> {
    if DROPPED_ELEMENTS.contains(&element.tag.as_str()) || element.tag.contains(':') {
        return None;
    }

    let cleaned = Element {
        attrs: element.attrs.into_iter().filter_map(clean_attr).collect(),
        children: element.children.into_iter().filter_map(clean_node).collect(),
        tag: element.tag,
    };

    if CONTAINER_ELEMENTS.contains(&cleaned.tag.as_str()) && cleaned.children.is_empty() {
        return None;
    }
    Some(cleaned)
}

fn clean_attr((key, value): (String, String)) -> Option<(String, String)> {
    if DENIED_ATTRIBUTES.contains(&key.as_str()) || key.starts_with("xmlns") {
        return None;
    }
    if key == "id" {
        return if EDITOR_IDS.contains(&value.as_str()) {
            None
        } else {
            Some((key, value))
        };
    }
    if key == "xlink:href" {
        return Some(("href".to_owned(), value));
    }
    // Remaining prefixed attributes are editor namespace data.
    if key.contains(':') {
        return None;
    }
    Some((key, value))
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape(text.as_str())),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (key, value) in &element.attrs {
                let _ = write!(out, " {key}=\"{value}\"");
            }
            if element.children.is_empty() {
                out.push_str("/>");
            } else {
                out.push('>');
                for child in &element.children {
                    write_node(out, child);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: Adobe Illustrator 24.0.0 -->
<svg version="1.1" id="Layer_1" xmlns="http://www.w3.org/2000/svg"
     xmlns:xlink="http://www.w3.org/1999/xlink" x="0px" y="0px"
     fill="#000" xml:space="preserve" enable-background="new 0 0 24 24">
  <metadata>editor data</metadata>
  <path fill="#000" d="M19 11H13V5H11V11H5V13H11V19H13V13H19V11Z"/>
  <g id="Info"></g>
</svg>
"##;

    #[test]
    fn strips_fill_and_defaults_view_box() {
        let icon = normalize(RAW).expect("normalizes");
        assert_eq!(icon.view_box, DEFAULT_VIEW_BOX);
        assert!(!icon.fragment.contains("fill="));
        assert_eq!(
            icon.fragment,
            r#"<path d="M19 11H13V5H11V11H5V13H11V19H13V13H19V11Z"/>"#
        );
        assert_eq!(icon.top_level, 1);
    }

    #[test]
    fn keeps_existing_view_box() {
        let icon = normalize(r#"<svg viewBox="0 0 48 48"><path d="M0 0"/></svg>"#).unwrap();
        assert_eq!(icon.view_box, "0 0 48 48");
    }

    #[test]
    fn is_idempotent() {
        let first = normalize(RAW).expect("normalizes");
        let second = normalize(&first.to_svg()).expect("re-normalizes");
        assert_eq!(first, second);
    }

    #[test]
    fn removes_denylisted_ids_but_keeps_meaningful_ones() {
        let icon = normalize(
            r#"<svg viewBox="0 0 24 24"><path id="Keyline" d="M0 0"/><path id="badge" d="M1 1"/></svg>"#,
        )
        .unwrap();
        assert!(!icon.fragment.contains("Keyline"));
        assert!(icon.fragment.contains(r#"id="badge""#));
    }

    #[test]
    fn prunes_empty_containers_recursively() {
        let icon = normalize(
            r#"<svg viewBox="0 0 24 24"><g><g><defs></defs></g></g><path d="M0 0"/></svg>"#,
        )
        .unwrap();
        assert_eq!(icon.fragment, r#"<path d="M0 0"/>"#);
        assert_eq!(icon.top_level, 1);
    }

    #[test]
    fn drops_editor_namespace_elements_and_attributes() {
        let icon = normalize(
            r#"<svg viewBox="0 0 24 24" xmlns:sodipodi="http://x"><sodipodi:namedview/><path sodipodi:role="line" d="M0 0"/></svg>"#,
        )
        .unwrap();
        assert_eq!(icon.fragment, r#"<path d="M0 0"/>"#);
    }

    #[test]
    fn renames_xlink_href() {
        let icon = normalize(
            r##"<svg viewBox="0 0 24 24"><defs><path id="base" d="M0 0"/></defs><use xlink:href="#base"/></svg>"##,
        )
        .unwrap();
        assert!(icon.fragment.contains(r##"href="#base""##));
        assert!(!icon.fragment.contains("xlink"));
    }

    #[test]
    fn counts_top_level_siblings() {
        let icon = normalize(
            r#"<svg viewBox="0 0 24 24"><path d="M0 0"/><path d="M1 1"/></svg>"#,
        )
        .unwrap();
        assert_eq!(icon.top_level, 2);
    }

    #[test]
    fn collapses_text_whitespace() {
        let icon = normalize(
            "<svg viewBox=\"0 0 24 24\"><text>two \n   words</text></svg>",
        )
        .unwrap();
        assert_eq!(icon.fragment, "<text>two words</text>");
    }

    #[test]
    fn malformed_markup_fails_for_that_asset() {
        assert!(normalize("<svg><path></svg>").is_err());
        assert!(matches!(
            normalize("not an svg at all"),
            Err(NormalizeError::MissingRoot)
        ));
    }
}
