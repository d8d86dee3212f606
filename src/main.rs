use std::path::PathBuf;

use anyhow::Context;
use draftkit::{
    init_logging_with, Canvas, Config, Modifiers, PathFigure, Point2, PointerEvent, PointerKind,
    BUILD_DATE, VERSION,
};

fn main() -> anyhow::Result<()> {
    // Optional config path as the first argument
    let config_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    init_logging_with(&config.logging)?;
    tracing::info!("draftkit {} (built {})", VERSION, BUILD_DATE);

    let mut canvas = Canvas::with_config(&config);
    build_demo_scene(&mut canvas)?;

    let clicks = [
        (Point2::new(40.0, 40.0), Modifiers::NONE),
        (Point2::new(160.0, 45.0), Modifiers::shift()),
        (Point2::new(500.0, 500.0), Modifiers::NONE),
    ];
    for (position, modifiers) in clicks {
        let event = PointerEvent::new(PointerKind::LeftDown, position, modifiers);
        let outcome = canvas.handle_pointer(&event)?;
        tracing::info!(
            "Click at ({}, {}): changed={} selection={:?}",
            position.x,
            position.y,
            outcome.selection_changed,
            canvas.selected_ids()
        );
    }

    let group = canvas.group_selected()?;
    tracing::info!("Grouped selection as {}", group);

    let marquee = PointerEvent::new(
        PointerKind::RectDragEnd {
            origin: Point2::new(-10.0, -10.0),
        },
        Point2::new(300.0, 120.0),
        Modifiers::NONE,
    );
    canvas.handle_pointer(&marquee)?;
    tracing::info!("Marquee selected {} shape(s)", canvas.selected_ids().len());

    if let Some(bounds) = canvas.selection_bounds()? {
        tracing::info!(
            "Selection bounds: {}x{} at ({}, {})",
            bounds.width,
            bounds.height,
            bounds.x,
            bounds.y
        );
    }

    canvas.copy();
    let pasted = canvas.paste();
    let report = canvas.delete_selected();
    tracing::info!(
        "Pasted {} shape(s), then deleted {} node(s)",
        pasted.len(),
        report.removed.len()
    );

    Ok(())
}

fn build_demo_scene(canvas: &mut Canvas) -> anyhow::Result<()> {
    let store = &mut canvas.shape_store;
    store.add_rectangle(0.0, 0.0, 80.0, 80.0);
    store.add_ellipse(120.0, 10.0, 80.0, 60.0);
    store.add_line(Point2::new(0.0, 100.0), Point2::new(200.0, 100.0));

    let a = store.create_point(Point2::new(220.0, 0.0));
    let b = store.create_point(Point2::new(280.0, 0.0));
    let c = store.create_point(Point2::new(280.0, 60.0));
    let ab = store.create_line(a, b)?;
    let bc = store.create_line(b, c)?;
    let ca = store.create_line(c, a)?;
    store.add_path(vec![PathFigure::new(vec![ab, bc, ca], true)])?;

    store.add_guide_line(Point2::new(-1000.0, 40.0), Point2::new(1000.0, 40.0));
    tracing::debug!("Demo scene has {} top-level shape(s)", store.shapes().len());
    Ok(())
}
