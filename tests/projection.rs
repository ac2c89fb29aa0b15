// tests/projection.rs
//
// Projection scenarios: the equirectangular fit must center (0°, 0°) and
// keep percentage positions stable across proportional resizes.

use situation_map::geo::{Coordinate, Projection, Viewport};

#[test]
fn origin_in_800_by_550_lands_at_400_275() {
    let projection = Projection::fit(Viewport::new(800.0, 550.0));
    let px = projection.project(Coordinate::new(0.0, 0.0));
    assert!((px.x - 400.0).abs() < 1e-9);
    assert!((px.y - 275.0).abs() < 1e-9);
}

#[test]
fn known_city_positions_are_ordered() {
    let projection = Projection::fit(Viewport::new(800.0, 550.0));
    let dc = projection.project(Coordinate::new(38.9, -77.0));
    let london = projection.project(Coordinate::new(51.5, -0.12));
    let beijing = projection.project(Coordinate::new(39.9, 116.4));
    // west → east ordering
    assert!(dc.x < london.x && london.x < beijing.x);
    // London is further north, so it sits higher on screen
    assert!(london.y < dc.y);
}

#[test]
fn antimeridian_spans_full_width_when_width_limited() {
    let projection = Projection::fit(Viewport::new(800.0, 550.0));
    let west = projection.project(Coordinate::new(0.0, -180.0));
    let east = projection.project(Coordinate::new(0.0, 180.0));
    assert!(west.x.abs() < 1e-9);
    assert!((east.x - 800.0).abs() < 1e-9);
}

#[test]
fn percent_positions_survive_proportional_resize() {
    let small = Projection::fit(Viewport::new(800.0, 550.0));
    let large = Projection::fit(Viewport::new(1600.0, 1100.0));
    for coord in [
        Coordinate::new(0.0, 0.0),
        Coordinate::new(55.75, 37.6),
        Coordinate::new(-33.0, 151.2),
    ] {
        let a = small.to_percent(coord);
        let b = large.to_percent(coord);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }
}
