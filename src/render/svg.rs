use std::fmt::Write as _;

use crate::layout::plan::{DrawPlan, Primitive, TextBlock};

/// Font stack for the summary lines; `usvg` falls back through it to any sans-serif face.
pub const FONT_FAMILY: &str = "system-ui, -apple-system, sans-serif";

/// Serialize a plan to a standalone SVG document of the canvas size.
pub fn to_svg(plan: &DrawPlan) -> String {
    let w = plan.canvas.width;
    let h = plan.canvas.height;
    let mut out = String::with_capacity(64 * (plan.dots.len() + 8));

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        plan.background
    );
    for prim in plan.primitives() {
        match prim {
            Primitive::Circle {
                center,
                radius,
                fill,
                ..
            } => {
                let _ = writeln!(
                    out,
                    r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{fill}"/>"#,
                    center.x, center.y, radius
                );
            }
            Primitive::Text(t) => write_text(&mut out, t),
        }
    }
    out.push_str("</svg>\n");
    out
}

fn write_text(out: &mut String, t: &TextBlock) {
    let _ = writeln!(
        out,
        r#"<text x="{:.3}" y="{:.3}" font-family="{FONT_FAMILY}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
        t.center_x,
        t.top,
        t.font_size,
        t.color,
        escape_xml(&t.content)
    );
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
