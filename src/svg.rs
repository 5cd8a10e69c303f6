//! SVG output: a [`Painter`] that writes the scene as vector markup.
//!
//! The painter receives world coordinates and applies the camera itself, so
//! the file shows exactly what a host window would.

use std::path::Path;

use canvas::camera::{Camera, Point, Rect};
use canvas::consts::SELECTION_OUTLINE_PX;
use canvas::object::{Color, Stroke};
use canvas::render::{self, Painter};
use canvas::scene::Scene;
use image::DynamicImage;

use crate::error::AppError;

const BACKGROUND: &str = "#181818";
const OUTLINE_COLOR: &str = "#4A90D9";
const PICTURE_FILL: &str = "#808080";

pub struct SvgPainter {
    camera: Camera,
    body: String,
}

impl SvgPainter {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self { camera, body: String::new() }
    }

    /// Wrap the drawn elements in a document of the given pixel size.
    #[must_use]
    pub fn finish(self, width: f64, height: f64) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{BACKGROUND}\"/>\n{}</svg>\n",
            self.body
        )
    }

    fn screen(&self, p: Point) -> Point {
        self.camera.world_to_screen(p)
    }

    fn stroke_attrs(&self, stroke: Stroke) -> String {
        format!(
            "stroke=\"{}\"{} stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"",
            stroke.color.to_hex(),
            opacity("stroke-opacity", stroke.color),
            stroke.thickness * self.camera.zoom
        )
    }
}

fn opacity(attr: &str, color: Color) -> String {
    if color.a == u8::MAX {
        String::new()
    } else {
        format!(" {attr}=\"{:.3}\"", f64::from(color.a) / 255.0)
    }
}

impl Painter for SvgPainter {
    fn draw_polyline(&mut self, points: &[Point], stroke: Stroke) {
        if let [only] = points {
            let c = self.screen(*only);
            let r = stroke.thickness * self.camera.zoom / 2.0;
            self.body.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{r}\" fill=\"{}\"{}/>\n",
                c.x,
                c.y,
                stroke.color.to_hex(),
                opacity("fill-opacity", stroke.color)
            ));
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|p| {
                let s = self.screen(*p);
                format!("{},{}", s.x, s.y)
            })
            .collect();
        let attrs = self.stroke_attrs(stroke);
        self.body.push_str(&format!("<polyline points=\"{}\" fill=\"none\" {attrs}/>\n", coords.join(" ")));
    }

    fn draw_line(&mut self, start: Point, end: Point, stroke: Stroke) {
        let (a, b) = (self.screen(start), self.screen(end));
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>\n",
            a.x,
            a.y,
            b.x,
            b.y,
            self.stroke_attrs(stroke)
        ));
    }

    fn draw_image(&mut self, top_left: Point, image: &DynamicImage) {
        let r = self.camera.rect_to_screen(Rect::new(
            top_left.x,
            top_left.y,
            f64::from(image.width()),
            f64::from(image.height()),
        ));
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{PICTURE_FILL}\" fill-opacity=\"0.5\"/>\n",
            r.x, r.y, r.width, r.height
        ));
    }

    fn draw_outline(&mut self, rect: Rect) {
        let r = self.camera.rect_to_screen(rect);
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{OUTLINE_COLOR}\" \
             stroke-width=\"{SELECTION_OUTLINE_PX}\" stroke-dasharray=\"4 2\"/>\n",
            r.x, r.y, r.width, r.height
        ));
    }

    fn draw_handle(&mut self, center: Point, radius: f64) {
        let c = self.screen(center);
        self.body.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{OUTLINE_COLOR}\" \
             stroke-width=\"{SELECTION_OUTLINE_PX}\"/>\n",
            c.x,
            c.y,
            radius * self.camera.zoom
        ));
    }
}

/// Render `scene` through `camera` into an SVG document.
#[must_use]
pub fn render_scene(scene: &Scene, camera: Camera, handle_radius: f64, width: f64, height: f64) -> String {
    let mut painter = SvgPainter::new(camera);
    render::draw_scene(&mut painter, scene, handle_radius);
    painter.finish(width, height)
}

pub fn write(path: &Path, document: &str) -> Result<(), AppError> {
    std::fs::write(path, document).map_err(|source| AppError::SvgWrite { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), bytes = document.len(), "svg written");
    Ok(())
}

#[cfg(test)]
#[path = "svg_test.rs"]
mod tests;
