//! Auto-generated by the GrowthPlan icon pipeline from `filled-action-add.svg` - do not edit manually.

use crate::icon::IconDef;

/// `FilledActionAdd` icon.
pub const FILLED_ACTION_ADD: IconDef = IconDef {
    name: "filled-action-add",
    ident: "FilledActionAdd",
    category: "action",
    view_box: "0 0 24 24",
    fragment: r#"<path d="M19 11H13V5H11V11H5V13H11V19H13V13H19V11Z"/>"#,
};
