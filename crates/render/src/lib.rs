//! SVG rendering of planar shape outlines.

use geocalc_kernel::Outline;
use tracing::debug;

const PADDING: f64 = 40.0;
/// Vertical space reserved for the title line.
const TITLE_BAND: f64 = 25.0;

/// Smallest viewport that leaves room for a drawing inside the padding.
pub const MIN_WIDTH: f64 = 2.0 * PADDING + 1.0;
pub const MIN_HEIGHT: f64 = 2.0 * PADDING + TITLE_BAND + 1.0;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// Render an outline into a standalone SVG document.
///
/// The outline is scaled uniformly to fit the viewport below the title and
/// centered; the model's y axis points up, so it is flipped for SVG.
///
/// Degenerate polygons and viewports smaller than [`MIN_WIDTH`] x
/// [`MIN_HEIGHT`] produce a document holding only the title.
pub fn outline_to_svg(outline: &Outline, width: f64, height: f64, title: &str) -> String {
    let title = escape(title);

    let degenerate = matches!(outline, Outline::Polygon(points) if points.len() < 3);
    if degenerate || !(width >= MIN_WIDTH && height >= MIN_HEIGHT) {
        debug!(width, height, "nothing to draw, title only");
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
             <text x=\"10\" y=\"20\" font-family=\"monospace\" font-size=\"14\" fill=\"#ccc\">{title}</text>\
             </svg>"
        );
    }

    let (min, max) = outline.bounds();
    let avail_w = width - 2.0 * PADDING;
    let avail_h = height - 2.0 * PADDING - TITLE_BAND;
    let data_w = (max.x - min.x).max(0.001);
    let data_h = (max.y - min.y).max(0.001);
    let scale = (avail_w / data_w).min(avail_h / data_h);
    let offset_x = PADDING + (avail_w - data_w * scale) / 2.0;
    let offset_y = PADDING + TITLE_BAND + (avail_h - data_h * scale) / 2.0;

    let tx = |x: f64| -> f64 { (x - min.x) * scale + offset_x };
    let ty = |y: f64| -> f64 { (max.y - y) * scale + offset_y };

    debug!(scale, vertices = outline.vertex_count(), "rendering outline");

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:#1a1a2e\">\n\
         <text x=\"{}\" y=\"20\" font-family=\"monospace\" font-size=\"13\" fill=\"#8892b0\" text-anchor=\"middle\">{title}</text>\n",
        width / 2.0
    );

    let footer = match outline {
        Outline::Polygon(points) => {
            let coords: Vec<String> = points
                .iter()
                .map(|p| format!("{:.1},{:.1}", tx(p.x), ty(p.y)))
                .collect();
            svg.push_str(&format!(
                "  <polygon points=\"{}\" fill=\"rgb(100,160,220)\" fill-opacity=\"0.35\" \
                 stroke=\"#64a0dc\" stroke-width=\"1.5\"/>\n",
                coords.join(" ")
            ));
            format!("{} vertices", points.len())
        }
        Outline::Circle { center, radius } => {
            svg.push_str(&format!(
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"rgb(100,160,220)\" fill-opacity=\"0.35\" \
                 stroke=\"#64a0dc\" stroke-width=\"1.5\"/>\n",
                tx(center.x),
                ty(center.y),
                radius * scale
            ));
            format!("r = {radius:.2}")
        }
    };

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"10\" fill=\"#5a6080\" \
         text-anchor=\"middle\">{footer}</text>\n",
        width / 2.0,
        height - 8.0,
    ));

    svg.push_str("</svg>\n");
    svg
}
