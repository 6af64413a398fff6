//! Component source generation for normalized icons.

use growthplan::icon::ATTRIBUTE_RENAMES;

use crate::identifier::IconIdentifier;
use crate::normalize::NormalizedIcon;

/// Header stamped on every generated artifact.
pub const GENERATED_HEADER: &str = "Auto-generated by the GrowthPlan icon pipeline";

/// Rewrites SVG presentation attribute names to their camelCase property
/// names using the fixed rename table.
#[must_use]
pub fn camelize_attributes(fragment: &str) -> String {
    let mut markup = fragment.to_owned();
    for (svg, property) in ATTRIBUTE_RENAMES {
        markup = markup.replace(&format!(" {svg}=\""), &format!(" {property}=\""));
    }
    markup
}

/// Emits the Rust module defining one icon component.
///
/// Fragments with more than one top-level element are wrapped in a single
/// `<g>` so the component has exactly one child root.
#[must_use]
pub fn component_source(icon: &NormalizedIcon, id: &IconIdentifier) -> String {
    let mut fragment = camelize_attributes(&icon.fragment);
    if icon.top_level > 1 {
        fragment = format!("<g>{fragment}</g>");
    }
    let guard = raw_string_guard(&fragment);

    format!(
        r###"//! {header} from `{key}.svg` - do not edit manually.

use crate::icon::IconDef;

/// `{ident}` icon.
pub const {const_name}: IconDef = IconDef {{
    name: "{key}",
    ident: "{ident}",
    category: "{category}",
    view_box: "{view_box}",
    fragment: r{guard}"{fragment}"{guard},
}};
"###,
        header = GENERATED_HEADER,
        key = id.key,
        ident = id.ident,
        const_name = id.const_name(),
        category = id.category,
        view_box = icon.view_box,
        fragment = fragment,
        guard = guard,
    )
}

/// Smallest `#` delimiter that keeps `content` inside a raw string literal.
///
/// Fragments with internal references carry `href="#base"`, which would
/// terminate an `r#"..."#` literal.
fn raw_string_guard(content: &str) -> String {
    let mut hashes = 1;
    while content.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    "#".repeat(hashes)
}
