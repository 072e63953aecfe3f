//! Walks the fallback surface through a banner entrance, a card slide-in, and
//! a simulated drag, then prints the resulting inline styles.

use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use log::info;

use stopgap_animation::Vars;
use stopgap_drag::DragOptions;
use stopgap_geometry::Point;
use stopgap_page::{DefaultAction, Document, PointerEvent};
use stopgap_shim::{MotionPathPlugin, Shim};

fn main() -> Result<()> {
    env_logger::init();

    let document = Document::new();
    let banner = document.create_element("div").with_id("banner");
    let card = document
        .create_element("div")
        .with_class("card")
        .with_class("draggable");
    document.create_element("div").with_class("card");

    let shim = Shim::install(document.clone());
    shim.register_plugin(&MotionPathPlugin);

    // Entrance: start transparent and shifted up, then fade and slide in.
    shim.set(&banner, Vars::new().opacity(0.0).y(-40.0));
    shim.to(
        &banner,
        Vars::new()
            .opacity(1.0)
            .y(0.0)
            .duration(0.5)
            .on_complete(|| info!("banner entrance done")),
    );

    // The cards follow, slightly delayed.
    shim.to(
        ".card",
        Vars::new()
            .x(120.0)
            .scale(1.1)
            .background_color("#ff8000")
            .duration(0.3)
            .delay(0.2),
    );

    drive(&shim);

    // Grab the first card and pull it 80 to the right, 30 down.
    let draggable = shim.draggable();
    draggable.create(".draggable", DragOptions::default());

    let _ = draggable.dispatch(&PointerEvent::Down {
        target: card.id(),
        position: Point::new(20.0, 20.0),
    });
    let action = draggable.dispatch(&PointerEvent::Move {
        position: Point::new(100.0, 50.0),
    });
    assert_eq!(action, DefaultAction::Suppress);
    let _ = draggable.dispatch(&PointerEvent::Up {
        position: Point::new(100.0, 50.0),
    });

    for element in document.elements() {
        println!("{element} {{ {} }}", element.style());
    }

    Ok(())
}

/// Ticks the shim at frame pace until no animation step is pending.
fn drive(shim: &Shim) {
    while shim.has_pending_work() {
        thread::sleep(Duration::from_millis(16));
        shim.tick(Instant::now());
    }
}
