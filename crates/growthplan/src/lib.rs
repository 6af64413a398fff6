#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod icon;
pub mod icons;
pub mod theme;
pub mod tokens;

pub use icon::{render, IconDef, IconNotFound, IconProps, IconRegistry, IconSize, CURRENT_COLOR};
pub use theme::{ThemeGroup, ThemeScope};
