//! Auto-generated by the GrowthPlan icon pipeline from `filled-nav-home.svg` - do not edit manually.

use crate::icon::IconDef;

/// `FilledNavHome` icon.
pub const FILLED_NAV_HOME: IconDef = IconDef {
    name: "filled-nav-home",
    ident: "FilledNavHome",
    category: "nav",
    view_box: "0 0 24 24",
    fragment: r#"<path d="M10 20V14H14V20H19V12H22L12 3L2 12H5V20H10Z"/>"#,
};
