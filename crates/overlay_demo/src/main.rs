//! Overlay demo host
//!
//! Plays both external collaborators at once: the mutable list (firing
//! change notifications) and the render loop (dispatching frame callbacks).
//! Draw commands land on a console surface that prints each primitive.

use std::cell::RefCell;
use std::rc::Rc;

use overlay_engine::prelude::*;

const CONFIG_PATH: &str = "overlay.toml";

/// Drawing surface that prints every primitive it receives
struct ConsoleSurface;

impl DrawSurface for ConsoleSurface {
    fn fill_rect(&mut self, rect: Rect, color: Vec4) {
        println!(
            "  rect   {:>4.0}x{:<4.0} at ({:.0}, {:.0}) alpha {:.2}",
            rect.width, rect.height, rect.x, rect.y, color.w
        );
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _color: Vec4) {
        println!("  text   ({:>3.0}, {:>3.0}) {text}", position.x, position.y);
    }

    fn draw_bold_text(&mut self, text: &str, position: Vec2, _color: Vec4) {
        println!("  bold   ({:>3.0}, {:>3.0}) {text}", position.x, position.y);
    }

    fn draw_line(&mut self, start: Vec2, extent: Vec2, _color: Vec4) {
        println!(
            "  line   ({:>3.0}, {:>3.0}) span ({:.0}, {:.0})",
            start.x, start.y, extent.x, extent.y
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    overlay_engine::foundation::logging::init();

    let config = match OverlayConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            log::info!("no usable {CONFIG_PATH} ({err}), using defaults");
            OverlayConfig::default()
        }
    };

    let list_events = Rc::new(RefCell::new(ListEvents::new()));
    let frame_events = Rc::new(RefCell::new(FrameEvents::new()));
    let measure = Rc::new(MonospaceMeasure::new(12.0, 28.0)?);

    let mut controller = OverlayController::new(
        config,
        measure,
        Rc::clone(&list_events),
        Rc::clone(&frame_events),
        &[],
    );

    // The list grows one chore at a time; a frame renders after each change.
    let mut items = Vec::new();
    for text in [
        "Feed the chickens",
        "Water the crops",
        "Sell the eggs",
        "Repair the fence by the southern field before the cows wander off again",
    ] {
        items.push(ListItem::new(text));
        list_events.borrow_mut().notify(&items);

        println!("-- frame ({} items) --", items.len());
        frame_events.borrow_mut().dispatch(&mut ConsoleSurface);
    }

    // Tighten the item cap at runtime; same recompute path as a list change.
    controller.reconfigure(OverlayConfig {
        max_items: 2,
        ..OverlayConfig::default()
    });
    println!("-- frame (capped at 2 items) --");
    frame_events.borrow_mut().dispatch(&mut ConsoleSurface);

    controller.dispose();
    Ok(())
}
