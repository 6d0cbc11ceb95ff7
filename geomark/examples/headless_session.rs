//! This example replays a short drawing session against an in-memory map engine and prints what the user would see
//! after every step.
//!
//! Run with `RUST_LOG=debug` to see how the events are handled.

use anyhow::Result;
use geomark::control::InteractionController;
use geomark::mode::ModeCommand;
use geomark::tests::RecordingEngine;
use geomark::ControllerConfiguration;
use geomark_types::geo::GeoPoint;
use geomark_types::{lonlat, ClosedContour, Contour, Geom, Polygon};

fn main() -> Result<()> {
    env_logger::init();

    let mut controller =
        InteractionController::mount(RecordingEngine::new(), ControllerConfiguration::default())?;
    controller.set_messenger(Some(|display: &geomark::display::DisplayState| {
        println!("[{}] {}", display.mode_label, display.measurement_text());
    }));

    controller.engine_mut().click(lonlat!(-100.0, 40.0));
    controller.process_events()?;

    controller.apply_command("LineString".parse::<ModeCommand>()?)?;
    controller.engine_mut().draw(Geom::Contour(Contour::open(vec![
        lonlat!(-100.0, 40.0),
        lonlat!(-99.5, 40.2),
        lonlat!(-99.0, 40.0),
    ])));
    controller.process_events()?;

    controller.apply_command(ModeCommand::Polygon)?;
    controller
        .engine_mut()
        .draw(Geom::Polygon(Polygon::new(ClosedContour::new(vec![
            lonlat!(-100.0, 40.0),
            lonlat!(-99.9, 40.0),
            lonlat!(-99.9, 40.1),
            lonlat!(-100.0, 40.1),
        ]))));
    controller.process_events()?;

    controller.apply_command(ModeCommand::Stop)?;
    controller.engine_mut().click(lonlat!(-98.0, 39.0));
    controller.process_events()?;

    let pinpoint = controller.pinpoint();
    println!(
        "pinpoint at ({:.4}, {:.4}), {} features",
        pinpoint.lon(),
        pinpoint.lat(),
        controller.store().len()
    );
    for feature in controller.store().iter() {
        println!("  {} {}", feature.id(), feature.name());
    }

    controller.unmount();
    Ok(())
}
