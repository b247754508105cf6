//! CSS rendering of a [`TooltipStyle`].

use crate::style::TooltipStyle;
use retip_core::props::{CONTAINER_PADDING, TRANSITION};
use std::fmt::Write;

/// Consumer of computed tooltip styles.
pub trait StyleRenderer {
    /// Apply one frame of style.
    fn render(&mut self, style: &TooltipStyle);
}

/// Declaration blocks for each element of the tooltip markup.
///
/// Element structure: container > (anchor, panel > wrapper > body), with the
/// triangle drawn as the body's `::after` pseudo-element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssBlocks {
    /// Element wrapping the anchor
    pub container: String,
    /// Fixed-position panel
    pub panel: String,
    /// Shadowed wrapper inside the panel padding
    pub wrapper: String,
    /// Scrollable message body
    pub body: String,
    /// Pointer triangle (`::after` of the body)
    pub triangle: String,
}

/// Build the declaration blocks for `style`.
#[must_use]
pub fn render_css(style: &TooltipStyle) -> CssBlocks {
    CssBlocks {
        container: container_css(style),
        panel: panel_css(style),
        wrapper: wrapper_css(style),
        body: body_css(style),
        triangle: triangle_css(style),
    }
}

fn container_css(style: &TooltipStyle) -> String {
    format!("display: {}; position: relative;", style.display.as_css())
}

fn panel_css(style: &TooltipStyle) -> String {
    let ms = TRANSITION.as_millis();
    let mut css = format!(
        "box-sizing: border-box; min-width: 100px; padding: {CONTAINER_PADDING}px; \
         position: fixed; transition: opacity {ms}ms ease-in-out, visibility {ms}ms ease-in-out; \
         z-index: 1;"
    );
    // String as fmt::Write never fails
    let _ = write!(
        css,
        " left: {}px; top: {}px; transform: {};",
        style.panel.left, style.panel.top, style.panel.transform
    );
    let _ = write!(
        css,
        " max-height: {}; max-width: {};",
        style.max_height, style.max_width
    );
    css.push_str(if style.visible {
        " opacity: 1; visibility: visible;"
    } else {
        " opacity: 0; visibility: hidden;"
    });
    css
}

fn wrapper_css(style: &TooltipStyle) -> String {
    format!(
        "box-shadow: 0 0 4px {}; max-height: {}; max-width: {};",
        style.shadow_color, style.wrapper.max_height, style.wrapper.max_width
    )
}

fn body_css(style: &TooltipStyle) -> String {
    format!(
        "background-color: {}; border-radius: 5px; box-sizing: border-box; color: {}; \
         height: 100%; max-height: inherit; max-width: inherit; overflow: auto; \
         padding: 0.5em; width: 100%;",
        style.background_color, style.text_color
    )
}

fn triangle_css(style: &TooltipStyle) -> String {
    let bg = style.background_color;
    let mut css = format!(
        "border: 0.5em solid black; border-color: transparent transparent {bg} {bg}; \
         box-shadow: -1px 1px 1px 0 {}; box-sizing: border-box; content: ''; height: 0; \
         position: absolute; transform-origin: 0 0; width: 0;",
        style.triangle_shadow_color
    );
    for (edge, distance) in style.triangle.edges {
        let _ = write!(css, " {}: {distance}px;", edge.as_css());
    }
    let _ = write!(css, " transform: rotate({}deg);", style.triangle.rotation);
    css
}

/// Renderer that keeps the most recent CSS output.
#[derive(Debug, Default)]
pub struct CssRenderer {
    last: Option<CssBlocks>,
    frames: usize,
}

impl CssRenderer {
    /// Create an empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks from the last render, if any.
    #[must_use]
    pub const fn last(&self) -> Option<&CssBlocks> {
        self.last.as_ref()
    }

    /// Number of frames rendered.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }
}

impl StyleRenderer for CssRenderer {
    fn render(&mut self, style: &TooltipStyle) {
        self.last = Some(render_css(style));
        self.frames += 1;
    }
}
