//! Tooltip widget and renderers for Retip.

pub mod css;
pub mod style;
pub mod tooltip;

pub use css::{render_css, CssBlocks, CssRenderer, StyleRenderer};
pub use style::{compute_style, ContainerDisplay, Layout, TooltipStyle};
pub use tooltip::{Tooltip, TooltipVisibilityChanged};
