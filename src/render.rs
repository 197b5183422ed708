use crate::config::RenderConfig;
use crate::labels::PixelPoint;
use crate::scene::MapScene;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

pub fn render_svg(scene: &MapScene, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = scene.viewport.width.max(1.0);
    let height = scene.viewport.height.max(1.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" data-year=\"{}\">",
        scene.year
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&theme.background)
    ));

    svg.push_str("<g class=\"borders\">");
    for border in &scene.borders {
        svg.push_str(&format!(
            "<path class=\"country-polygon\" d=\"{}\" fill=\"{color}\" fill-opacity=\"{}\" stroke=\"{color}\" stroke-width=\"{}\" stroke-linejoin=\"round\">",
            points_to_path(&border.points),
            theme.border_fill_opacity,
            theme.border_stroke_width,
            color = escape_xml(&border.color),
        ));
        let details = if border.details.trim().is_empty() {
            "No additional information"
        } else {
            border.details.as_str()
        };
        svg.push_str(&format!(
            "<title>{}\n{}\nYear: {}</title></path>",
            escape_xml(&border.name),
            escape_xml(details),
            border.year
        ));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"country-labels\">");
    for label in &scene.labels {
        svg.push_str(&format!(
            "<text class=\"country-name\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" font-weight=\"600\" fill=\"{}\" stroke=\"{}\" stroke-width=\"3\" paint-order=\"stroke\">{}</text>",
            label.position.x,
            label.position.y,
            escape_xml(&theme.font_family),
            theme.font_size,
            escape_xml(&theme.label_color),
            escape_xml(&theme.label_halo_color),
            escape_xml(&label.text)
        ));
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

fn points_to_path(points: &[PixelPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", points[0].x, points[0].y));
    for point in points.iter().skip(1) {
        d.push_str(&format!(" L {:.2} {:.2}", point.x, point.y));
    }
    d.push_str(" Z");
    d
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Inter".to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width as f32, render_cfg.height as f32)
        .unwrap_or(usvg::Size::from_wh(800.0, 600.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset::{Border, BorderDataset};
    use crate::projection::Viewport;
    use crate::scene::compute_scene;

    #[test]
    fn render_svg_basic() {
        let dataset = BorderDataset::from_borders(vec![Border::new(
            "Kingdom <of> Tests",
            vec![[52.0, 12.0], [56.0, 12.0], [56.0, 20.0], [52.0, 20.0]],
            1945,
            "Line one",
            "#aa3300",
        )]);
        let config = Config::default();
        let viewport = Viewport::from_map_config(&config.map, 1200.0, 800.0);
        let scene = compute_scene(&dataset, 1945, &viewport, &config);
        let svg = render_svg(&scene, &config.theme);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Kingdom &lt;of&gt; Tests"));
        assert!(svg.contains("fill=\"#aa3300\""));
        assert!(svg.contains("Year: 1945"));
        assert_eq!(svg.matches("<text").count(), 1);
    }

    #[test]
    fn path_is_closed() {
        let d = points_to_path(&[
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(10.0, 0.0),
            PixelPoint::new(10.0, 5.0),
        ]);
        assert_eq!(d, "M 0.00 0.00 L 10.00 0.00 L 10.00 5.00 Z");
        assert!(points_to_path(&[]).is_empty());
    }
}
