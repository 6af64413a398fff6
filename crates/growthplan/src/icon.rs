//! Icon definitions, the runtime registry, and markup rendering.
//!
//! Generated icon modules declare one [`IconDef`] each; the registry maps
//! kebab-case lookup keys to those definitions. [`render`] wraps a
//! definition's inner markup in a sized, colorable `<svg>` root, and
//! [`IconRegistry::resolve`] is the total lookup-and-render entry point:
//! a missing name logs a diagnostic and renders nothing instead of failing.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::theme::{ThemeGroup, ThemeScope};

/// Sentinel color meaning "inherit from the surrounding context".
pub const CURRENT_COLOR: &str = "currentColor";

/// Fixed table mapping SVG presentation attribute names to the camelCase
/// property names used in generated fragments.
///
/// The generator applies it left-to-right; the renderer applies the inverse
/// when serializing final markup, so the table is authoritative in both
/// directions.
pub const ATTRIBUTE_RENAMES: &[(&str, &str)] = &[
    ("class", "className"),
    ("stroke-width", "strokeWidth"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("fill-rule", "fillRule"),
    ("clip-rule", "clipRule"),
    ("clip-path", "clipPath"),
    ("fill-opacity", "fillOpacity"),
    ("stroke-opacity", "strokeOpacity"),
    ("stroke-miterlimit", "strokeMiterlimit"),
];

/// Translates an SVG attribute name to its property name.
#[must_use]
pub fn property_name(svg_name: &str) -> &str {
    ATTRIBUTE_RENAMES
        .iter()
        .find(|(svg, _)| *svg == svg_name)
        .map_or(svg_name, |(_, property)| property)
}

/// Translates a property name back to its SVG attribute name.
#[must_use]
pub fn svg_attribute_name(property: &str) -> &str {
    ATTRIBUTE_RENAMES
        .iter()
        .find(|(_, camel)| *camel == property)
        .map_or(property, |(svg, _)| svg)
}

/// One generated icon: identity plus its normalized inner markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDef {
    /// Kebab-case lookup key, e.g. `filled-action-add`.
    pub name: &'static str,
    /// UpperCamelCase identifier, e.g. `FilledActionAdd`.
    pub ident: &'static str,
    /// Category token derived from the key's second segment.
    pub category: &'static str,
    /// `viewBox` recorded during normalization.
    pub view_box: &'static str,
    /// Inner markup with camelCase property names, exactly one root node.
    pub fragment: &'static str,
}

/// Icon edge length, either plain pixels or a unit-carrying string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSize {
    /// Pixel size, rendered as a bare number.
    Px(u32),
    /// Free-form size such as `2em`.
    Custom(String),
}

impl Default for IconSize {
    fn default() -> Self {
        IconSize::Px(24)
    }
}

impl From<u32> for IconSize {
    fn from(px: u32) -> Self {
        IconSize::Px(px)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Px(px) => write!(f, "{px}"),
            IconSize::Custom(size) => f.write_str(size),
        }
    }
}

/// Render parameters accepted by every icon.
#[derive(Debug, Clone)]
pub struct IconProps {
    /// Edge length, default 24.
    pub size: IconSize,
    /// Fill color, default [`CURRENT_COLOR`]. Ignored by theme resolution
    /// only while it still holds the sentinel.
    pub color: String,
    /// Optional class attribute for the root element.
    pub class_name: String,
    /// Resolve the fill from the active theme scope instead of `color`.
    pub theme_color: bool,
    /// Explicit group for theme resolution; defaults to the scope's
    /// active group.
    pub theme: Option<ThemeGroup>,
    /// Shade variant for theme resolution.
    pub theme_variant: Option<String>,
    /// Pass-through attributes, keyed by camelCase property names.
    pub attrs: Vec<(String, String)>,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            size: IconSize::default(),
            color: CURRENT_COLOR.to_owned(),
            class_name: String::new(),
            theme_color: false,
            theme: None,
            theme_variant: None,
            attrs: Vec::new(),
        }
    }
}

/// Error value describing a failed registry lookup.
///
/// Recoverable per call: the resolver reports it and renders nothing.
#[derive(Debug, Error)]
#[error("icon '{requested}' is not registered (available: {})", .available.join(", "))]
pub struct IconNotFound {
    /// The name that was requested.
    pub requested: String,
    /// Every registered lookup key, in registry order.
    pub available: Vec<&'static str>,
}

/// Immutable lookup table from kebab-case keys to icon definitions.
///
/// Built once from generated definitions and shared by reference; never
/// mutated at runtime.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    by_name: HashMap<&'static str, &'static IconDef>,
    order: Vec<&'static str>,
}

impl IconRegistry {
    /// Builds a registry from generated definitions.
    ///
    /// Key uniqueness is enforced by the build pipeline before the
    /// definitions exist; a duplicate here keeps the first entry.
    #[must_use]
    pub fn from_defs(defs: &[&'static IconDef]) -> Self {
        let mut registry = Self {
            by_name: HashMap::with_capacity(defs.len()),
            order: Vec::with_capacity(defs.len()),
        };
        for def in defs {
            if registry.by_name.insert(def.name, def).is_none() {
                registry.order.push(def.name);
            }
        }
        registry
    }

    /// Returns the definition registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static IconDef> {
        self.by_name.get(name).copied()
    }

    /// Like [`get`](Self::get), but the miss carries the available names.
    pub fn lookup(&self, name: &str) -> Result<&'static IconDef, IconNotFound> {
        self.get(name).ok_or_else(|| IconNotFound {
            requested: name.to_owned(),
            available: self.order.clone(),
        })
    }

    /// Every registered lookup key, in registration order.
    #[must_use]
    pub fn names(&self) -> &[&'static str] {
        &self.order
    }

    /// Returns the category of a registered icon.
    #[must_use]
    pub fn category_of(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|def| def.category)
    }

    /// Unique categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories = Vec::new();
        for name in &self.order {
            if let Some(category) = self.category_of(name) {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        categories
    }

    /// Number of registered icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry holds no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up `name` and renders it; total over every input.
    ///
    /// A missing name logs the [`IconNotFound`] diagnostic at `warn` and
    /// yields `None`.
    #[must_use]
    pub fn resolve(
        &self,
        name: &str,
        props: &IconProps,
        scope: Option<&ThemeScope>,
    ) -> Option<String> {
        match self.lookup(name) {
            Ok(def) => Some(render(def, props, scope)),
            Err(err) => {
                warn!(%err, "icon lookup failed");
                None
            }
        }
    }
}

/// Renders one icon definition to standalone SVG markup.
#[must_use]
pub fn render(def: &IconDef, props: &IconProps, scope: Option<&ThemeScope>) -> String {
    let size = &props.size;
    let fill = resolved_fill(props, scope);

    let mut svg = format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" fill="{fill}" xmlns="http://www.w3.org/2000/svg""#,
    );
    if !props.class_name.is_empty() {
        svg.push_str(&format!(r#" class="{}""#, escape_attr(&props.class_name)));
    }
    for (property, value) in &props.attrs {
        svg.push_str(&format!(
            r#" {}="{}""#,
            svg_attribute_name(property),
            escape_attr(value)
        ));
    }
    svg.push('>');
    svg.push_str(&fragment_markup(def.fragment));
    svg.push_str("</svg>");
    svg
}

/// Converts a stored fragment back to plain SVG attribute names.
#[must_use]
pub fn fragment_markup(fragment: &str) -> String {
    let mut markup = fragment.to_owned();
    for (svg, property) in ATTRIBUTE_RENAMES {
        markup = markup.replace(&format!(" {property}=\""), &format!(" {svg}=\""));
    }
    markup
}

fn resolved_fill<'a>(props: &'a IconProps, scope: Option<&ThemeScope>) -> &'a str {
    if !props.theme_color || props.color != CURRENT_COLOR {
        return &props.color;
    }
    match scope {
        Some(scope) => {
            let group = props.theme.unwrap_or_else(|| scope.current());
            scope.get_color(group, props.theme_variant.as_deref())
        }
        None => CURRENT_COLOR,
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    const ADD: IconDef = IconDef {
        name: "filled-action-add",
        ident: "FilledActionAdd",
        category: "action",
        view_box: "0 0 24 24",
        fragment: r#"<path d="M19 11H13V5H11V11H5V13H11V19H13V13H19V11Z"/>"#,
    };

    const LOVE: IconDef = IconDef {
        name: "filled-action-love",
        ident: "FilledActionLove",
        category: "action",
        view_box: "0 0 24 24",
        fragment: r#"<path fillRule="evenodd" clipRule="evenodd" d="M12 21Z"/>"#,
    };

    fn registry() -> IconRegistry {
        IconRegistry::from_defs(&[&ADD, &LOVE])
    }

    #[test]
    fn renders_size_and_explicit_color() {
        let props = IconProps {
            size: IconSize::Px(32),
            color: "#007bff".to_owned(),
            ..IconProps::default()
        };
        let markup = registry()
            .resolve("filled-action-add", &props, None)
            .expect("icon registered");
        assert!(markup.starts_with(r#"<svg width="32" height="32" viewBox="0 0 32 32""#));
        assert!(markup.contains(r##"fill="#007bff""##));
        assert!(markup.contains(r#"<path d="M19 11H"#));
    }

    #[test]
    fn fragment_attributes_serialize_as_svg_names() {
        let markup = render(&LOVE, &IconProps::default(), None);
        assert!(markup.contains(r#"fill-rule="evenodd""#));
        assert!(markup.contains(r#"clip-rule="evenodd""#));
        assert!(!markup.contains("fillRule"));
    }

    #[test]
    fn missing_icon_resolves_to_nothing_with_diagnostic() {
        let registry = registry();
        assert!(registry.resolve("missing-icon", &IconProps::default(), None).is_none());

        let err = registry.lookup("missing-icon").unwrap_err();
        assert_eq!(err.requested, "missing-icon");
        assert_eq!(err.available, vec!["filled-action-add", "filled-action-love"]);
        let message = err.to_string();
        assert!(message.contains("filled-action-add"));
        assert!(message.contains("filled-action-love"));
    }

    #[test]
    fn theme_color_resolves_from_active_scope() {
        let scope = crate::theme::ThemeScope::new(ThemeGroup::Gold);
        let props = IconProps {
            size: IconSize::Px(32),
            theme_color: true,
            ..IconProps::default()
        };
        let markup = render(&ADD, &props, Some(&scope));
        let expected = tokens::get_color(ThemeGroup::Gold, None);
        assert!(markup.contains(&format!(r#"fill="{expected}""#)));
    }

    #[test]
    fn explicit_color_wins_over_theme_color() {
        let scope = crate::theme::ThemeScope::new(ThemeGroup::Gold);
        let props = IconProps {
            color: "#ff0000".to_owned(),
            theme_color: true,
            ..IconProps::default()
        };
        let markup = render(&ADD, &props, Some(&scope));
        assert!(markup.contains(r##"fill="#ff0000""##));
    }

    #[test]
    fn theme_color_without_scope_falls_back_to_sentinel() {
        let props = IconProps {
            theme_color: true,
            theme: Some(ThemeGroup::Diamond),
            ..IconProps::default()
        };
        let markup = render(&ADD, &props, None);
        assert!(markup.contains(r#"fill="currentColor""#));
    }

    #[test]
    fn pass_through_attributes_use_svg_names() {
        let props = IconProps {
            class_name: "toolbar-icon".to_owned(),
            attrs: vec![
                ("strokeWidth".to_owned(), "2".to_owned()),
                ("aria-hidden".to_owned(), "true".to_owned()),
            ],
            ..IconProps::default()
        };
        let markup = render(&ADD, &props, None);
        assert!(markup.contains(r#" class="toolbar-icon""#));
        assert!(markup.contains(r#" stroke-width="2""#));
        assert!(markup.contains(r#" aria-hidden="true""#));
    }

    #[test]
    fn custom_sizes_pass_through_verbatim() {
        let props = IconProps {
            size: IconSize::Custom("2em".to_owned()),
            ..IconProps::default()
        };
        let markup = render(&ADD, &props, None);
        assert!(markup.contains(r#"width="2em""#));
    }

    #[test]
    fn categories_preserve_first_seen_order() {
        let registry = registry();
        assert_eq!(registry.categories(), vec!["action"]);
        assert_eq!(registry.category_of("filled-action-add"), Some("action"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn rename_table_round_trips() {
        for (svg, property) in ATTRIBUTE_RENAMES {
            assert_eq!(property_name(svg), *property);
            assert_eq!(svg_attribute_name(property), *svg);
        }
        assert_eq!(property_name("d"), "d");
        assert_eq!(svg_attribute_name("d"), "d");
    }
}
