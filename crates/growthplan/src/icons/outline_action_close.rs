//! Auto-generated by the GrowthPlan icon pipeline from `outline-action-close.svg` - do not edit manually.

use crate::icon::IconDef;

/// `OutlineActionClose` icon.
pub const OUTLINE_ACTION_CLOSE: IconDef = IconDef {
    name: "outline-action-close",
    ident: "OutlineActionClose",
    category: "action",
    view_box: "0 0 24 24",
    fragment: r#"<path d="M19 6.41L17.59 5L12 10.59L6.41 5L5 6.41L10.59 12L5 17.59L6.41 19L12 13.41L17.59 19L19 17.59L13.41 12L19 6.41Z"/>"#,
};
