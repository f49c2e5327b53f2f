use egui::{Pos2, pos2};
use image::Rgba;
use pixel_paint::raster::{Pen, Shape, stroke_shape};
use pixel_paint::{InputEvent, PaintEngine, Surface, Tool};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn create_engine() -> PaintEngine {
    PaintEngine::new(200, 150).unwrap()
}

fn drag(engine: &mut PaintEngine, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    engine.pointer_down(*first);
    for point in rest {
        engine.pointer_move(*point);
    }
    engine.pointer_up(*points.last().unwrap());
}

fn painted(surface: &Surface) -> usize {
    surface.image().pixels().filter(|p| **p != TRANSPARENT).count()
}

#[test]
fn test_pencil_stroke_is_continuous() {
    let mut engine = create_engine();
    engine.set_color(RED);
    engine.set_width(1).unwrap();
    drag(&mut engine, &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]);

    for x in 10..=20 {
        assert_eq!(engine.surface().pixel(x, 10), Some(RED), "pixel {x},10");
    }
    for y in 10..=20 {
        assert_eq!(engine.surface().pixel(20, y), Some(RED), "pixel 20,{y}");
    }
    assert_eq!(painted(engine.surface()), 21);
    assert!(!engine.is_drawing());
}

#[test]
fn test_pencil_and_brush_are_identical() {
    let path = [pos2(5.0, 5.0), pos2(40.0, 30.0), pos2(80.0, 12.0)];

    let mut pencil = create_engine();
    pencil.select_tool(Tool::Pencil);
    pencil.set_width(4).unwrap();
    drag(&mut pencil, &path);

    let mut brush = create_engine();
    brush.select_tool(Tool::Brush);
    brush.set_width(4).unwrap();
    drag(&mut brush, &path);

    assert!(painted(pencil.surface()) > 0);
    assert_eq!(pencil.surface().snapshot(), brush.surface().snapshot());
}

#[test]
fn test_click_without_move_draws_nothing() {
    let mut engine = create_engine();
    engine.pointer_down(pos2(10.0, 10.0));
    engine.pointer_up(pos2(10.0, 10.0));
    assert_eq!(painted(engine.surface()), 0);
}

#[test]
fn test_click_with_rectangle_or_circle_draws_nothing() {
    for tool in [Tool::Rectangle, Tool::Circle] {
        let mut engine = create_engine();
        engine.select_tool(tool);
        engine.set_width(6).unwrap();
        engine.pointer_down(pos2(40.0, 40.0));
        engine.pointer_up(pos2(40.0, 40.0));
        assert_eq!(painted(engine.surface()), 0, "{} click", tool.name());

        // dragging back to the start removes the preview
        drag(&mut engine, &[pos2(40.0, 40.0), pos2(70.0, 60.0), pos2(40.0, 40.0)]);
        assert_eq!(painted(engine.surface()), 0, "{} drag back", tool.name());
    }
}

#[test]
fn test_eraser_leaves_transparent_pixels() {
    let mut engine = create_engine();
    engine.select_tool(Tool::Fill);
    engine.set_color(RED);
    engine.pointer_down(pos2(50.0, 50.0));

    engine.select_tool(Tool::Eraser);
    engine.set_width(4).unwrap();
    drag(&mut engine, &[pos2(20.0, 40.0), pos2(120.0, 40.0)]);

    for x in 20..=120 {
        for y in 38..=42 {
            assert_eq!(engine.surface().pixel(x, y), Some(TRANSPARENT), "pixel {x},{y}");
        }
    }
    // painting resumes normally afterwards
    assert_eq!(engine.surface().pixel(20, 60), Some(RED));
    engine.select_tool(Tool::Pencil);
    drag(&mut engine, &[pos2(30.0, 40.0), pos2(40.0, 40.0)]);
    assert_eq!(engine.surface().pixel(35, 40), Some(Rgba([0, 0, 0, 255])));
}

#[test]
fn test_shape_commit_leaves_no_preview_residue() {
    for tool in [Tool::Line, Tool::Rectangle, Tool::Circle] {
        let mut engine = create_engine();
        engine.set_color(BLUE);
        engine.set_width(3).unwrap();
        engine.select_tool(tool);

        let start = pos2(60.0, 70.0);
        let end = pos2(100.0, 40.0);
        drag(
            &mut engine,
            &[start, pos2(190.0, 140.0), pos2(10.0, 5.0), pos2(61.0, 71.0), pos2(120.0, 90.0), end],
        );

        let mut expected = Surface::new(200, 150).unwrap();
        let shape = pixel_paint::engine::shape_for(tool, start, end).unwrap();
        stroke_shape(&mut expected, &shape, &Pen::new(BLUE, 3));

        assert_eq!(
            engine.surface().snapshot(),
            expected.snapshot(),
            "{} left preview residue",
            tool.name()
        );
    }
}

#[test]
fn test_shape_preview_is_not_committed_mid_session() {
    let mut engine = create_engine();
    engine.select_tool(Tool::Rectangle);
    engine.pointer_down(pos2(10.0, 10.0));
    engine.pointer_move(pos2(50.0, 50.0));

    // preview is visible on the surface but the snapshot is still blank
    assert!(painted(engine.surface()) > 0);
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.pixel(10, 10), Some(TRANSPARENT));
    assert!(engine.is_drawing());
}

#[test]
fn test_shape_commits_at_release_point() {
    let mut engine = create_engine();
    engine.select_tool(Tool::Line);
    engine.set_width(1).unwrap();
    engine.pointer_down(pos2(10.0, 10.0));
    engine.pointer_move(pos2(100.0, 100.0));
    engine.pointer_up(pos2(50.0, 10.0));

    assert_eq!(engine.surface().pixel(30, 10), Some(Rgba([0, 0, 0, 255])));
    assert_eq!(engine.surface().pixel(80, 80), Some(TRANSPARENT));
    assert_eq!(painted(engine.surface()), 41);
}

#[test]
fn test_rectangle_direction_invariance() {
    let mut forward = create_engine();
    forward.select_tool(Tool::Rectangle);
    drag(&mut forward, &[pos2(5.0, 5.0), pos2(10.0, 10.0)]);

    let mut backward = create_engine();
    backward.select_tool(Tool::Rectangle);
    drag(&mut backward, &[pos2(10.0, 10.0), pos2(5.0, 5.0)]);

    let mut anti = create_engine();
    anti.select_tool(Tool::Rectangle);
    drag(&mut anti, &[pos2(10.0, 5.0), pos2(5.0, 10.0)]);

    assert!(painted(forward.surface()) > 0);
    assert_eq!(forward.surface().snapshot(), backward.surface().snapshot());
    assert_eq!(forward.surface().snapshot(), anti.surface().snapshot());
}

#[test]
fn test_circle_radius_is_distance_from_start() {
    for edge in [pos2(150.0, 100.0), pos2(100.0, 150.0)] {
        assert_eq!(
            pixel_paint::engine::shape_for(Tool::Circle, pos2(100.0, 100.0), edge),
            Some(Shape::Circle { center: pos2(100.0, 100.0), radius: 50.0 })
        );

        let mut engine = PaintEngine::new(300, 300).unwrap();
        engine.select_tool(Tool::Circle);
        engine.set_width(1).unwrap();
        drag(&mut engine, &[pos2(100.0, 100.0), edge]);

        let black = Some(Rgba([0, 0, 0, 255]));
        for (x, y) in [(150, 100), (50, 100), (100, 150), (100, 50)] {
            assert_eq!(engine.surface().pixel(x, y), black, "pixel {x},{y}");
        }
        // centred circle, not a bounding-box ellipse
        assert_eq!(engine.surface().pixel(100, 100), Some(TRANSPARENT));
        assert_eq!(engine.surface().pixel(125, 125), Some(TRANSPARENT));
    }
}

#[test]
fn test_tool_switch_mid_shape_aborts_session() {
    let mut engine = create_engine();
    engine.select_tool(Tool::Circle);
    engine.pointer_down(pos2(50.0, 50.0));
    engine.pointer_move(pos2(80.0, 50.0));
    assert!(painted(engine.surface()) > 0);

    engine.select_tool(Tool::Pencil);
    assert!(!engine.is_drawing());
    assert_eq!(painted(engine.surface()), 0);

    // the old session's up is ignored
    engine.pointer_up(pos2(90.0, 50.0));
    assert_eq!(painted(engine.surface()), 0);
}

#[test]
fn test_tool_switch_mid_freehand_keeps_drawn_segments() {
    let mut engine = create_engine();
    engine.pointer_down(pos2(10.0, 10.0));
    engine.pointer_move(pos2(30.0, 10.0));
    let drawn = painted(engine.surface());

    engine.select_tool(Tool::Line);
    assert!(!engine.is_drawing());
    engine.pointer_move(pos2(60.0, 60.0));
    assert_eq!(painted(engine.surface()), drawn);
}

#[test]
fn test_pointer_leave_commits_like_pointer_up() {
    let mut left = create_engine();
    left.select_tool(Tool::Rectangle);
    left.handle_input(&InputEvent::PointerDown { position: pos2(20.0, 20.0) });
    left.handle_input(&InputEvent::PointerMove { position: pos2(60.0, 40.0) });
    left.handle_input(&InputEvent::PointerLeave { last_known_position: pos2(60.0, 40.0) });

    let mut released = create_engine();
    released.select_tool(Tool::Rectangle);
    drag(&mut released, &[pos2(20.0, 20.0), pos2(60.0, 40.0)]);

    assert!(!left.is_drawing());
    assert_eq!(left.surface().snapshot(), released.surface().snapshot());
    assert_eq!(left.status().pointer, None);
}

#[test]
fn test_move_after_up_is_ignored() {
    let mut engine = create_engine();
    drag(&mut engine, &[pos2(10.0, 10.0), pos2(20.0, 10.0)]);
    let before = engine.surface().snapshot();

    engine.pointer_move(pos2(90.0, 90.0));
    assert_eq!(engine.surface().snapshot(), before);
    assert_eq!(engine.status().coords_text(), "90, 90");
}

#[test]
fn test_snapshot_refreshed_after_each_session() {
    let mut engine = create_engine();
    engine.select_tool(Tool::Line);
    drag(&mut engine, &[pos2(10.0, 10.0), pos2(50.0, 10.0)]);
    assert_eq!(engine.snapshot(), Some(&engine.surface().snapshot()));

    // the second shape previews over the first without erasing it
    engine.pointer_down(pos2(10.0, 40.0));
    engine.pointer_move(pos2(50.0, 40.0));
    assert_eq!(engine.surface().pixel(30, 10), Some(Rgba([0, 0, 0, 255])));
    engine.pointer_up(pos2(50.0, 40.0));
    assert_eq!(engine.surface().pixel(30, 10), Some(Rgba([0, 0, 0, 255])));
    assert_eq!(engine.surface().pixel(30, 40), Some(Rgba([0, 0, 0, 255])));
}
