//! Auto-generated by the GrowthPlan icon pipeline from `logo.svg` - do not edit manually.

use crate::icon::IconDef;

/// `Logo` icon.
pub const LOGO: IconDef = IconDef {
    name: "logo",
    ident: "Logo",
    category: "other",
    view_box: "0 0 24 24",
    fragment: r#"<circle cx="12" cy="12" r="10"/>"#,
};
