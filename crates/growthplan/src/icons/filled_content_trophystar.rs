//! Auto-generated by the GrowthPlan icon pipeline from `filled-content-trophystar.svg` - do not edit manually.

use crate::icon::IconDef;

/// `FilledContentTrophystar` icon.
pub const FILLED_CONTENT_TROPHYSTAR: IconDef = IconDef {
    name: "filled-content-trophystar",
    ident: "FilledContentTrophystar",
    category: "content",
    view_box: "0 0 24 24",
    fragment: r#"<g><path d="M5 3H19V5H21V11H19V13H17V15H13V17H15V19H17V21H7V19H9V17H11V15H7V13H5V11H3V5H5V3Z"/><path d="M12 6L13.09 8.26L15.5 8.5L13.75 10.09L14.18 12.5L12 11.3L9.82 12.5L10.25 10.09L8.5 8.5L10.91 8.26L12 6Z"/></g>"#,
};
