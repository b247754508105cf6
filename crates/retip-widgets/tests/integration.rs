//! Integration tests for retip-widgets.
//!
//! Drive a tooltip through a host-style event loop: measurement, hover,
//! timers, resize and rendering.

use proptest::prelude::*;
use retip_core::{
    Alignment, AnchorRect, Event, ManualScheduler, Measure, PartialOffset, Rect, Size,
};
use retip_widgets::{CssRenderer, StyleRenderer, Tooltip, TooltipStyle, TooltipVisibilityChanged};
use retip_yaml::TooltipSet;
use std::time::Duration;

/// Host layout that moves the anchor when the window resizes.
struct FakeLayout {
    viewport: Size,
}

impl Measure for FakeLayout {
    fn anchor_rect(&self) -> AnchorRect {
        // anchor stays centered horizontally, 100px from the top
        let left = self.viewport.width / 2.0 - 50.0;
        AnchorRect::from(Rect::new(left, 100.0, 100.0, 20.0))
    }

    fn panel_size(&self) -> Size {
        Size::new(180.0, 48.0)
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<TooltipStyle>,
}

impl StyleRenderer for RecordingRenderer {
    fn render(&mut self, style: &TooltipStyle) {
        self.frames.push(style.clone());
    }
}

/// Advance the clock and deliver every due timer to the tooltip.
fn tick(
    tooltip: &mut Tooltip,
    layout: &FakeLayout,
    scheduler: &mut ManualScheduler,
    by: Duration,
) -> Vec<TooltipVisibilityChanged> {
    scheduler
        .advance(by)
        .into_iter()
        .filter_map(|handle| tooltip.event(&Event::Timer(handle), layout, scheduler))
        .collect()
}

#[test]
fn test_delayed_hide_cancelled_by_reenter() {
    let layout = FakeLayout {
        viewport: Size::new(1000.0, 800.0),
    };
    let mut scheduler = ManualScheduler::new();
    let mut tooltip = Tooltip::new("I am a basic tooltip").hide_delay(Duration::from_millis(1000));
    tooltip.mount(&layout);

    tooltip.event(&Event::MouseEnter, &layout, &mut scheduler);
    tooltip.event(&Event::MouseLeave, &layout, &mut scheduler);
    assert!(tick(&mut tooltip, &layout, &mut scheduler, Duration::from_millis(400)).is_empty());

    tooltip.event(&Event::MouseEnter, &layout, &mut scheduler);
    assert!(tick(&mut tooltip, &layout, &mut scheduler, Duration::from_secs(5)).is_empty());
    assert!(tooltip.is_visible());

    tooltip.event(&Event::MouseLeave, &layout, &mut scheduler);
    let changes = tick(&mut tooltip, &layout, &mut scheduler, Duration::from_millis(1000));
    assert_eq!(changes, vec![TooltipVisibilityChanged { visible: false }]);
}

#[test]
fn test_rapid_enter_leave_never_stacks_timers() {
    let layout = FakeLayout {
        viewport: Size::new(1000.0, 800.0),
    };
    let mut scheduler = ManualScheduler::new();
    let mut tooltip = Tooltip::new("m").hide_delay(Duration::from_millis(50));

    for _ in 0..10 {
        tooltip.event(&Event::MouseEnter, &layout, &mut scheduler);
        tooltip.event(&Event::MouseLeave, &layout, &mut scheduler);
        assert!(scheduler.pending() <= 1);
    }
    tooltip.teardown(&mut scheduler);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_resize_moves_panel() {
    let mut layout = FakeLayout {
        viewport: Size::new(1000.0, 800.0),
    };
    let mut scheduler = ManualScheduler::new();
    let mut tooltip = Tooltip::new("m")
        .alignment(Alignment::Right)
        .offset(PartialOffset::left(-15.0));
    tooltip.mount(&layout);

    let before = tooltip.style();
    assert_eq!(before.panel.left, 535.0);

    layout.viewport = Size::new(600.0, 800.0);
    tooltip.event(
        &Event::Resize {
            width: 600.0,
            height: 800.0,
        },
        &layout,
        &mut scheduler,
    );
    let after = tooltip.style();
    assert_eq!(after.panel.left, 335.0);
    assert_eq!(after.panel_bounds, Rect::new(335.0, 76.0, 180.0, 48.0));
}

#[test]
fn test_render_frames_follow_visibility() {
    let layout = FakeLayout {
        viewport: Size::new(1000.0, 800.0),
    };
    let mut scheduler = ManualScheduler::new();
    let mut renderer = RecordingRenderer::default();
    let mut tooltip = Tooltip::new("m");
    tooltip.mount(&layout);

    tooltip.render(&mut renderer);
    tooltip.event(&Event::MouseEnter, &layout, &mut scheduler);
    tooltip.render(&mut renderer);

    let visible: Vec<bool> = renderer.frames.iter().map(|f| f.visible).collect();
    assert_eq!(visible, vec![false, true]);
}

#[test]
fn test_css_renderer_from_config() {
    let yaml = "tooltips:\n  wide:\n    alignment: bottom\n    background_color: white\n    max_width: 300\n    message: hi\n";
    let set = TooltipSet::from_yaml(yaml).expect("valid yaml");
    let tooltip = {
        let mut t = Tooltip::from_config(set.get("wide").expect("entry")).expect("valid config");
        t.mount(&FakeLayout {
            viewport: Size::new(1000.0, 800.0),
        });
        t
    };

    let mut renderer = CssRenderer::new();
    tooltip.render(&mut renderer);
    let css = renderer.last().expect("rendered");

    assert!(css.panel.contains("left: 450px; top: 120px; transform: translateX(-25px);"));
    assert!(css.panel.contains("max-height: 680px; max-width: 300px;"));
    assert!(css.body.contains("color: rgb(29, 29, 29);"));
    assert!(css.triangle.contains("left: 43px; top: 16px; transform: rotate(135deg);"));
}

#[test]
fn test_light_named_background_gets_dark_text() {
    let yaml = "tooltips:\n  pale:\n    background_color: lightgray\n    message: hi\n  dark:\n    background_color: hsl(0, 0%, 10%)\n    message: hi\n";
    let set = TooltipSet::from_yaml(yaml).expect("valid yaml");
    let mut renderer = CssRenderer::new();

    let pale = Tooltip::from_config(set.get("pale").expect("entry")).expect("valid config");
    pale.render(&mut renderer);
    let css = renderer.last().expect("rendered");
    assert!(css.body.contains("background-color: rgb(211, 211, 211);"));
    assert!(css.body.contains("color: rgb(29, 29, 29);"));

    let dark = Tooltip::from_config(set.get("dark").expect("entry")).expect("valid config");
    dark.render(&mut renderer);
    let css = renderer.last().expect("rendered");
    assert!(css.body.contains("color: rgb(213, 213, 213);"));
}

#[test]
fn test_style_serializes() {
    let tooltip = Tooltip::new("m");
    let json = serde_json::to_value(tooltip.style()).expect("serializable");
    assert_eq!(json["visible"], serde_json::Value::Bool(false));
    assert!(json["panel"]["transform"].is_object());
}

proptest! {
    #[test]
    fn prop_style_is_idempotent(width in 200.0f32..4000.0, height in 200.0f32..4000.0) {
        let layout = FakeLayout { viewport: Size::new(width, height) };
        for alignment in Alignment::ALL {
            let mut tooltip = Tooltip::new("m").alignment(alignment);
            tooltip.mount(&layout);
            prop_assert_eq!(tooltip.style(), tooltip.style());
        }
    }
}
