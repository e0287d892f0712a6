use super::*;

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rows_follow_ceiling_formula() {
    let c = canvas(1179, 2556);
    assert_eq!(GridSpec::compute(c, 365).rows, 25);
    // Leap years do not get an extra row at 15 columns.
    assert_eq!(GridSpec::compute(c, 366).rows, 25);
    assert_eq!(GridSpec::compute(c, 15).rows, 1);
    assert_eq!(GridSpec::compute(c, 16).rows, 2);
    assert_eq!(GridSpec::compute(c, 375).rows, 25);
    assert_eq!(GridSpec::compute(c, 376).rows, 26);
    assert_eq!(GridSpec::compute(c, 365).cols, 15);
}

#[test]
fn width_bound_uses_the_two_axis_formula_exactly() {
    let c = canvas(1179, 3000);
    let g = GridSpec::compute(c, 365);
    let expected = f64::min(0.65 * 1179.0 / 45.0, 0.55 * 3000.0 / 75.0);
    assert_eq!(g.bound, RadiusBound::Width);
    assert!(approx(g.dot_radius, expected));
    assert!(approx(g.gap, expected * 3.4));
    assert!(approx(g.grid_width, 14.0 * g.gap));
    assert!(approx(g.grid_height, 24.0 * g.gap));
    assert!(approx(g.svg_width, g.grid_width + 2.0 * g.dot_radius));
    assert!(approx(g.svg_height, g.grid_height + 2.0 * g.dot_radius));
}

#[test]
fn default_canvas_is_capped_by_the_safe_band() {
    let c = canvas(1179, 2556);
    let g = GridSpec::compute(c, 365);
    assert_eq!(g.bound, RadiusBound::SafeBand);
    let band = SafeBand::for_canvas(c);
    assert!(approx(g.svg_height, band.height()));
    assert!(g.dot_radius < 0.65 * 1179.0 / 45.0);
    // 1278 / (24 * 3.4 + 2) against the uncapped 766.35 / 45.
    assert!((g.dot_radius - 15.287).abs() < 1e-3, "{}", g.dot_radius);
    assert!((0.65 * 1179.0 / 45.0 - 17.03_f64).abs() < 1e-3);
}

#[test]
fn height_term_binds_for_a_single_short_row() {
    // One row: the band allows 0.25h while the height term allows 0.55h / 3.
    let g = GridSpec::compute(canvas(4000, 300), 10);
    assert_eq!(g.rows, 1);
    assert_eq!(g.bound, RadiusBound::Height);
    assert!(approx(g.dot_radius, 0.55 * 300.0 / 3.0));
}

#[test]
fn swapping_aspect_rederives_the_binding_constraint() {
    let portrait = GridSpec::compute(canvas(1179, 3000), 365);
    let landscape = GridSpec::compute(canvas(3000, 1179), 365);
    assert_eq!(portrait.bound, RadiusBound::Width);
    assert_ne!(landscape.bound, RadiusBound::Width);
    assert!(approx(portrait.dot_radius, 0.65 * 1179.0 / 45.0));
    assert!(landscape.dot_radius <= 0.55 * 1179.0 / 75.0);
    assert!(landscape.dot_radius < portrait.dot_radius);
}

#[test]
fn grid_never_overflows_canvas_or_band() {
    for w in (200..=4000).step_by(190) {
        for h in (200..=4000).step_by(170) {
            let c = canvas(w, h);
            for total in [365, 366] {
                let g = GridSpec::compute(c, total);
                assert!(g.dot_radius > 0.0 && g.dot_radius.is_finite());
                assert!(g.svg_width <= f64::from(w), "{w}x{h}");
                assert!(
                    g.svg_height <= SafeBand::for_canvas(c).height() + 1e-9,
                    "{w}x{h}"
                );
            }
        }
    }
}

#[test]
fn degenerate_canvas_still_produces_finite_geometry() {
    let g = GridSpec::compute(canvas(1, 1), 365);
    assert!(g.dot_radius.is_finite() && g.dot_radius > 0.0);
    assert!(g.svg_width.is_finite() && g.svg_height.is_finite());
}

#[test]
fn centers_fill_row_major() {
    let g = GridSpec::compute(canvas(1179, 2556), 365);
    let r = g.dot_radius;
    assert_eq!(g.center(0), Point::new(r, r));
    assert_eq!(g.center(1), Point::new(r + g.gap, r));
    assert_eq!(g.center(15), Point::new(r, r + g.gap));
    assert_eq!(g.cell(364), (24, 4));
}

#[test]
fn safe_band_centers_content() {
    let band = SafeBand::for_canvas(canvas(100, 1000));
    assert!(approx(band.top, 320.0));
    assert!(approx(band.bottom, 820.0));
    assert!(approx(band.centered_top(100.0), 520.0));
}
