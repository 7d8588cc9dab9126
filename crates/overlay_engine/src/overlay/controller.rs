//! Overlay controller
//!
//! Owns the cached layout and the two host subscriptions. List mutation →
//! change notification → layout recompute → wholesale cache replacement →
//! next frame callback replays the cached layout as draw commands.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::OverlayConfig;
use crate::events::{FrameEvents, ListEvents, SubscriptionId};
use crate::foundation::math::Vec2;
use crate::layout::{Layout, LayoutConstraints, LayoutEngine, ListItem};
use crate::overlay::draw::DrawSurface;
use crate::text::{TextMeasure, TextSize};

const MARGIN_TOP: f32 = 5.0;
const MARGIN_LEFT: f32 = 5.0;
const MARGIN_RIGHT: f32 = 5.0;
const MARGIN_BOTTOM: f32 = 5.0;
const LINE_SPACING: f32 = 5.0;

/// State shared between the list-change and frame handlers
struct OverlayState {
    config: OverlayConfig,
    measure: Rc<dyn TextMeasure>,
    header_size: TextSize,
    items: Vec<ListItem>,
    layout: Layout,
}

impl OverlayState {
    fn new(config: OverlayConfig, measure: Rc<dyn TextMeasure>) -> Self {
        let header_size = measure.measure(&config.header);
        Self {
            config,
            measure,
            header_size,
            items: Vec::new(),
            layout: Layout::empty(),
        }
    }

    /// Constraints under the current config, sampled fresh per recompute
    fn constraints(&self) -> LayoutConstraints {
        LayoutConstraints {
            max_width: self.config.max_width,
            max_items: self.config.max_items,
            margin_top: MARGIN_TOP,
            margin_left: MARGIN_LEFT,
            margin_right: MARGIN_RIGHT,
            margin_bottom: MARGIN_BOTTOM,
            line_spacing: LINE_SPACING,
            header: self.config.header.clone(),
        }
    }

    fn sync(&mut self, items: &[ListItem]) {
        self.items = items.to_vec();
        self.recompute();
    }

    fn reconfigure(&mut self, config: OverlayConfig) {
        self.header_size = self.measure.measure(&config.header);
        self.config = config;
        self.recompute();
    }

    fn recompute(&mut self) {
        let layout =
            LayoutEngine::compute(&self.items, &self.constraints(), self.measure.as_ref());
        log::debug!(
            "overlay layout: {} lines, {}x{} px",
            layout.lines.len(),
            layout.bounds.width,
            layout.bounds.height
        );
        // Single reference swap: a frame sees the old layout or this one,
        // never a mix.
        self.layout = layout;
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        if self.layout.is_empty() {
            return;
        }
        if !self.config.enabled {
            return;
        }

        surface.fill_rect(self.layout.bounds, self.config.background_color);
        surface.draw_bold_text(
            &self.config.header,
            Vec2::new(MARGIN_LEFT, MARGIN_TOP),
            self.config.text_color,
        );

        let mut top = MARGIN_TOP + self.header_size.height;
        surface.draw_line(
            Vec2::new(MARGIN_LEFT, top),
            Vec2::new(self.header_size.width - 3.0, 1.0),
            self.config.text_color,
        );

        for line in &self.layout.lines {
            top += LINE_SPACING;
            surface.draw_text(&line.text, Vec2::new(MARGIN_LEFT, top), self.config.text_color);
            top += line.height;
        }
    }
}

/// Event-driven overlay controller
///
/// Subscribes to list-change notifications and per-frame callbacks on
/// construction and performs one initial layout sync. [`dispose`] releases
/// both subscriptions exactly once; dropping the controller disposes it too.
///
/// [`dispose`]: OverlayController::dispose
pub struct OverlayController {
    state: Rc<RefCell<OverlayState>>,
    list_events: Rc<RefCell<ListEvents>>,
    frame_events: Rc<RefCell<FrameEvents>>,
    list_subscription: Option<SubscriptionId>,
    frame_subscription: Option<SubscriptionId>,
}

impl OverlayController {
    /// Create a controller wired to the host's event registries
    ///
    /// `initial_items` is the list's contents at construction time; the
    /// first layout is computed from it immediately.
    pub fn new(
        config: OverlayConfig,
        measure: Rc<dyn TextMeasure>,
        list_events: Rc<RefCell<ListEvents>>,
        frame_events: Rc<RefCell<FrameEvents>>,
        initial_items: &[ListItem],
    ) -> Self {
        let state = Rc::new(RefCell::new(OverlayState::new(config, measure)));

        let list_state = Rc::clone(&state);
        let list_subscription = list_events.borrow_mut().subscribe(Box::new(move |items| {
            list_state.borrow_mut().sync(items);
        }));

        let frame_state = Rc::clone(&state);
        let frame_subscription = frame_events
            .borrow_mut()
            .subscribe(Box::new(move |surface| {
                frame_state.borrow().draw(surface);
            }));

        state.borrow_mut().sync(initial_items);

        Self {
            state,
            list_events,
            frame_events,
            list_subscription: Some(list_subscription),
            frame_subscription: Some(frame_subscription),
        }
    }

    /// Recompute the layout from the list's current contents
    ///
    /// The registered list-change handler takes the same path; this entry
    /// point exists for hosts that call the controller directly.
    pub fn on_list_changed(&self, items: &[ListItem]) {
        self.state.borrow_mut().sync(items);
    }

    /// Replay the cached layout onto `surface`
    ///
    /// No commands are issued when the layout is empty or the overlay is
    /// disabled.
    pub fn on_frame(&self, surface: &mut dyn DrawSurface) {
        self.state.borrow().draw(surface);
    }

    /// Apply a new config, recomputing the layout the same way a list
    /// change would
    pub fn reconfigure(&self, config: OverlayConfig) {
        self.state.borrow_mut().reconfigure(config);
    }

    /// Snapshot of the cached layout
    pub fn layout(&self) -> Layout {
        self.state.borrow().layout.clone()
    }

    /// Release both event subscriptions
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn dispose(&mut self) {
        if let Some(id) = self.list_subscription.take() {
            self.list_events.borrow_mut().unsubscribe(id);
        }
        if let Some(id) = self.frame_subscription.take() {
            self.frame_events.borrow_mut().unsubscribe(id);
        }
    }
}

impl Drop for OverlayController {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::draw::{CommandRecorder, DrawCommand};
    use crate::text::MonospaceMeasure;

    fn registries() -> (Rc<RefCell<ListEvents>>, Rc<RefCell<FrameEvents>>) {
        (
            Rc::new(RefCell::new(ListEvents::new())),
            Rc::new(RefCell::new(FrameEvents::new())),
        )
    }

    fn controller(
        config: OverlayConfig,
        list_events: &Rc<RefCell<ListEvents>>,
        frame_events: &Rc<RefCell<FrameEvents>>,
    ) -> OverlayController {
        let measure = Rc::new(MonospaceMeasure::new(10.0, 24.0).unwrap());
        OverlayController::new(
            config,
            measure,
            Rc::clone(list_events),
            Rc::clone(frame_events),
            &[],
        )
    }

    #[test]
    fn test_frame_draws_background_header_rule_then_lines() {
        let (list_events, frame_events) = registries();
        let _controller = controller(OverlayConfig::default(), &list_events, &frame_events);

        list_events
            .borrow_mut()
            .notify(&[ListItem::new("chop wood"), ListItem::new("haul water")]);

        let mut recorder = CommandRecorder::new();
        frame_events.borrow_mut().dispatch(&mut recorder);

        let commands = recorder.commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        match &commands[1] {
            DrawCommand::BoldText { text, position, .. } => {
                assert_eq!(text, "To-Do List");
                assert_eq!((position.x, position.y), (5.0, 5.0));
            }
            other => panic!("expected header, got {other:?}"),
        }
        match &commands[2] {
            DrawCommand::Line { start, extent, .. } => {
                // Rule sits at the header's baseline, slightly shorter than
                // the header itself.
                assert_eq!((start.x, start.y), (5.0, 29.0));
                assert_eq!((extent.x, extent.y), (97.0, 1.0));
            }
            other => panic!("expected rule, got {other:?}"),
        }
        match &commands[3] {
            DrawCommand::Text { text, position, .. } => {
                assert_eq!(text, "chop wood");
                assert_eq!((position.x, position.y), (5.0, 34.0));
            }
            other => panic!("expected first line, got {other:?}"),
        }
        match &commands[4] {
            DrawCommand::Text { text, position, .. } => {
                assert_eq!(text, "haul water");
                assert_eq!((position.x, position.y), (5.0, 63.0));
            }
            other => panic!("expected second line, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_list_draws_nothing() {
        let (list_events, frame_events) = registries();
        let _controller = controller(OverlayConfig::default(), &list_events, &frame_events);

        let mut recorder = CommandRecorder::new();
        frame_events.borrow_mut().dispatch(&mut recorder);
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_disabled_overlay_draws_nothing_but_keeps_layout() {
        let (list_events, frame_events) = registries();
        let config = OverlayConfig {
            enabled: false,
            ..Default::default()
        };
        let controller = controller(config, &list_events, &frame_events);

        list_events.borrow_mut().notify(&[ListItem::new("task")]);

        let mut recorder = CommandRecorder::new();
        frame_events.borrow_mut().dispatch(&mut recorder);
        assert!(recorder.commands().is_empty());
        assert!(!controller.layout().is_empty());
    }

    #[test]
    fn test_initial_items_are_laid_out_at_construction() {
        let (list_events, frame_events) = registries();
        let measure = Rc::new(MonospaceMeasure::new(10.0, 24.0).unwrap());
        let controller = OverlayController::new(
            OverlayConfig::default(),
            measure,
            Rc::clone(&list_events),
            Rc::clone(&frame_events),
            &[ListItem::new("already there")],
        );
        assert_eq!(controller.layout().lines.len(), 1);
    }

    #[test]
    fn test_reconfigure_recomputes_like_a_list_change() {
        let (list_events, frame_events) = registries();
        let controller = controller(OverlayConfig::default(), &list_events, &frame_events);

        let items: Vec<ListItem> = (0..4).map(|i| ListItem::new(format!("task {i}"))).collect();
        list_events.borrow_mut().notify(&items);
        assert_eq!(controller.layout().lines.len(), 4);

        controller.reconfigure(OverlayConfig {
            max_items: 2,
            ..Default::default()
        });
        let layout = controller.layout();
        assert_eq!(layout.lines.len(), 3);
        assert_eq!(layout.lines[2].text, crate::layout::ELLIPSIS);
    }

    #[test]
    fn test_dispose_releases_both_subscriptions_once() {
        let (list_events, frame_events) = registries();
        let mut controller = controller(OverlayConfig::default(), &list_events, &frame_events);

        assert_eq!(list_events.borrow().handler_count(), 1);
        assert_eq!(frame_events.borrow().handler_count(), 1);

        controller.dispose();
        controller.dispose();

        assert_eq!(list_events.borrow().handler_count(), 0);
        assert_eq!(frame_events.borrow().handler_count(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (list_events, frame_events) = registries();
        {
            let _controller = controller(OverlayConfig::default(), &list_events, &frame_events);
            assert_eq!(list_events.borrow().handler_count(), 1);
        }
        assert_eq!(list_events.borrow().handler_count(), 0);
        assert_eq!(frame_events.borrow().handler_count(), 0);
    }

    #[test]
    fn test_notifications_after_dispose_are_ignored() {
        let (list_events, frame_events) = registries();
        let mut controller = controller(OverlayConfig::default(), &list_events, &frame_events);
        controller.dispose();

        list_events.borrow_mut().notify(&[ListItem::new("late")]);
        assert!(controller.layout().is_empty());

        let mut recorder = CommandRecorder::new();
        frame_events.borrow_mut().dispatch(&mut recorder);
        assert!(recorder.commands().is_empty());
    }
}
