use boxflow_box::Rect;
use boxflow_grid::{GridDirection, GridOverflow, GridSpec, layout_grid};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
/// # Panics
/// Panics if cells do not evenly divide the content rectangle.
fn two_by_two_cells() {
    init_logger();
    let content = Rect::new(10.0, 20.0, 200.0, 100.0);
    let placed = layout_grid(content, &GridSpec::new(2, 2), 4);
    assert_eq!(
        placed,
        Ok(vec![
            Rect::new(10.0, 20.0, 100.0, 50.0),
            Rect::new(110.0, 20.0, 100.0, 50.0),
            Rect::new(10.0, 70.0, 100.0, 50.0),
            Rect::new(110.0, 70.0, 100.0, 50.0),
        ])
    );
}

#[test]
/// # Panics
/// Panics if a partially filled grid does not leave trailing cells empty.
fn partial_fill() {
    init_logger();
    let placed = layout_grid(Rect::new(0.0, 0.0, 300.0, 100.0), &GridSpec::new(3, 1), 2);
    assert_eq!(
        placed,
        Ok(vec![
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(100.0, 0.0, 100.0, 100.0),
        ])
    );
}

#[test]
/// # Panics
/// Panics if a reversed row direction does not fill right-to-left.
fn reversed_row_fills_right_to_left() {
    init_logger();
    let spec = GridSpec::new(2, 1).with_directions(GridDirection::Reversed, GridDirection::Forward);
    let placed = layout_grid(Rect::new(0.0, 0.0, 100.0, 40.0), &spec, 2);
    assert_eq!(
        placed,
        Ok(vec![
            Rect::new(50.0, 0.0, 50.0, 40.0),
            Rect::new(0.0, 0.0, 50.0, 40.0),
        ])
    );
}

#[test]
/// # Panics
/// Panics if a reversed column direction does not fill bottom-to-top.
fn reversed_column_fills_bottom_to_top() {
    init_logger();
    let spec = GridSpec::new(1, 2).with_directions(GridDirection::Forward, GridDirection::Reversed);
    let placed = layout_grid(Rect::new(0.0, 0.0, 40.0, 100.0), &spec, 2);
    assert_eq!(
        placed,
        Ok(vec![
            Rect::new(0.0, 50.0, 40.0, 50.0),
            Rect::new(0.0, 0.0, 40.0, 50.0),
        ])
    );
}

#[test]
/// # Panics
/// Panics if more children than cells is not reported as an overflow.
fn overflow_is_an_error() {
    init_logger();
    let placed = layout_grid(Rect::new(0.0, 0.0, 100.0, 100.0), &GridSpec::new(2, 2), 5);
    assert_eq!(
        placed,
        Err(GridOverflow {
            children: 5,
            cells: 4
        })
    );
}
