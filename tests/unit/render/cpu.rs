use super::*;
use crate::{
    date::resolver::ResolvedDate,
    foundation::core::Canvas,
    layout::{palette::DotState, plan::layout},
    render::backend::{BackendKind, create_backend},
    request::Theme,
};
use chrono::NaiveDate;
use chrono_tz::Tz;

fn no_fonts() -> RenderSettings {
    RenderSettings {
        fonts: Some(Arc::new(usvg::fontdb::Database::new())),
    }
}

fn plan(theme: Theme) -> DrawPlan {
    let date = ResolvedDate::from_local_date(NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(), Tz::UTC);
    layout(
        Canvas {
            width: 300,
            height: 600,
        },
        theme,
        &date,
    )
}

fn pixel_at_dot(frame: &FrameRGBA, plan: &DrawPlan, state: DotState) -> [u8; 4] {
    let dot = plan.dots.iter().find(|d| d.state == state).unwrap();
    let p = dot.center + plan.origin.to_vec2();
    frame.pixel(p.x.floor() as u32, p.y.floor() as u32).unwrap()
}

#[test]
fn cpu_renders_background_and_dot_colors() {
    let plan = plan(Theme::Dark);
    let mut backend = CpuBackend::new(no_fonts());
    let frame = backend.render_plan(&plan).unwrap();

    assert_eq!((frame.width, frame.height), (300, 600));
    assert_eq!(frame.data.len(), 300 * 600 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(299, 599), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(300, 0), None);

    assert_eq!(pixel_at_dot(&frame, &plan, DotState::Active), [0xEF, 0x44, 0x44, 255]);
    assert_eq!(pixel_at_dot(&frame, &plan, DotState::Passed), [0xFF, 0xFF, 0xFF, 255]);
    assert_eq!(pixel_at_dot(&frame, &plan, DotState::Pending), [0x22, 0x22, 0x22, 255]);
}

#[test]
fn cpu_light_theme_background_is_white() {
    let plan = plan(Theme::Light);
    let mut backend = create_backend(BackendKind::Cpu, &no_fonts()).unwrap();
    let frame = backend.render_plan(&plan).unwrap();
    assert_eq!(frame.pixel(5, 5), Some([255, 255, 255, 255]));
    assert_eq!(pixel_at_dot(&frame, &plan, DotState::Pending), [0xDD, 0xDD, 0xDD, 255]);
}

#[test]
fn demultiply_restores_straight_alpha() {
    use crate::render::backend::demultiply;
    assert_eq!(demultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(demultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(demultiply([64, 0, 128, 128]), [128, 0, 255, 128]);
}
