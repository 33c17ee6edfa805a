//! Headless rendering of the classification diagram to an RGBA raster.
//!
//! Draws the plotting-area outline (diamond or kite depending on the
//! convention), the 22 radial sector boundaries, the sector numbers, and
//! the classified point. Rendering itself cannot fail; only the PNG write
//! can.

use std::f64::consts::TAU;
use std::path::Path;

use glam::DVec2;
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::glyphs::{glyph_pixel, GLYPH_GAP, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::projection::{boundary_radius, Convention};
use crate::sector::{Classification, SECTOR_COUNT};

/// Axis half-extent relative to the plotting area, leaving a margin so the
/// outline does not touch the raster edge.
const MARGIN: f64 = 1.15;

/// Sector numbers sit at this fraction of the boundary radius, a bit
/// inside the outline.
const NUMBER_RADIUS: f64 = 0.9;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("failed to write diagram image: {0}")]
    Image(#[from] image::ImageError),
}

/// Rendering options for the classification diagram.
#[derive(Clone, Debug)]
pub struct DiagramOptions {
    pub width: u32,
    pub height: u32,
    pub show_numbers: bool,
    pub show_sector_lines: bool,
    pub background: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub sector_line: Rgba<u8>,
    pub number_color: Rgba<u8>,
    pub point_color: Rgba<u8>,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            show_numbers: true,
            show_sector_lines: true,
            background: Rgba([255, 255, 255, 255]),
            outline: Rgba([0, 0, 0, 255]),
            sector_line: Rgba([160, 160, 160, 255]),
            number_color: Rgba([60, 60, 60, 255]),
            point_color: Rgba([220, 30, 30, 255]),
        }
    }
}

/// Maps plane coordinates (y up) to pixel coordinates (y down), centered,
/// uniform scale, fitting the full plotting area plus margin.
struct Mapper {
    center: DVec2,
    scale: f64,
}

impl Mapper {
    fn new(width: u32, height: u32, apex_height: f64) -> Self {
        let extent_x = MARGIN;
        let extent_y = MARGIN * apex_height;
        let scale =
            (width as f64 / (2.0 * extent_x)).min(height as f64 / (2.0 * extent_y));
        Self {
            center: DVec2::new(width as f64 / 2.0, height as f64 / 2.0),
            scale,
        }
    }

    fn to_pixel(&self, p: DVec2) -> DVec2 {
        self.center + DVec2::new(p.x * self.scale, -p.y * self.scale)
    }
}

fn put_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Stamp a thickness×thickness block with its top-left at (x, y).
fn put_block(img: &mut RgbaImage, x: i64, y: i64, thickness: u32, color: Rgba<u8>) {
    for dy in 0..thickness as i64 {
        for dx in 0..thickness as i64 {
            put_pixel(img, x + dx, y + dy, color);
        }
    }
}

fn draw_line(img: &mut RgbaImage, a: DVec2, b: DVec2, thickness: u32, color: Rgba<u8>) {
    let steps = a.distance(b).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let p = a.lerp(b, i as f64 / steps as f64);
        put_block(
            img,
            p.x.round() as i64,
            p.y.round() as i64,
            thickness,
            color,
        );
    }
}

fn fill_disc(img: &mut RgbaImage, center: DVec2, radius: f64, color: Rgba<u8>) {
    let r2 = radius * radius;
    let x0 = (center.x - radius).floor() as i64;
    let x1 = (center.x + radius).ceil() as i64;
    let y0 = (center.y - radius).floor() as i64;
    let y1 = (center.y + radius).ceil() as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = DVec2::new(x as f64, y as f64) - center;
            if d.length_squared() <= r2 {
                put_pixel(img, x, y, color);
            }
        }
    }
}

/// Draw a decimal number centered at the given pixel position, with a
/// background pad behind it so sector lines don't run through the digits.
fn draw_number(
    img: &mut RgbaImage,
    center: DVec2,
    value: u32,
    pixel_size: u32,
    color: Rgba<u8>,
    pad_color: Rgba<u8>,
) {
    let digits: Vec<u8> = value
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();
    let n = digits.len() as u32;
    let total_w = (n * GLYPH_WIDTH + (n - 1) * GLYPH_GAP) * pixel_size;
    let total_h = GLYPH_HEIGHT * pixel_size;
    let left = (center.x - total_w as f64 / 2.0).round() as i64;
    let top = (center.y - total_h as f64 / 2.0).round() as i64;

    let pad = pixel_size as i64;
    for y in (top - pad)..(top + total_h as i64 + pad) {
        for x in (left - pad)..(left + total_w as i64 + pad) {
            put_pixel(img, x, y, pad_color);
        }
    }

    for (i, &digit) in digits.iter().enumerate() {
        let digit_left = left + (i as u32 * (GLYPH_WIDTH + GLYPH_GAP) * pixel_size) as i64;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if glyph_pixel(digit, col, row) {
                    put_block(
                        img,
                        digit_left + (col * pixel_size) as i64,
                        top + (row * pixel_size) as i64,
                        pixel_size,
                        color,
                    );
                }
            }
        }
    }
}

/// Point on the plotting-area outline in the direction θ.
fn boundary_point(convention: Convention, theta: f64) -> DVec2 {
    let r = boundary_radius(convention, theta);
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Render the classification diagram for one result.
pub fn render_diagram(classification: &Classification, options: &DiagramOptions) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(options.width, options.height, options.background);
    let convention = classification.convention;
    let apex = convention.apex_height();
    let mapper = Mapper::new(options.width, options.height, apex);

    let origin_px = mapper.to_pixel(DVec2::ZERO);

    if options.show_sector_lines {
        for i in 0..SECTOR_COUNT {
            let theta = i as f64 / SECTOR_COUNT as f64 * TAU;
            let edge = boundary_point(convention, theta);
            draw_line(&mut img, origin_px, mapper.to_pixel(edge), 1, options.sector_line);
        }
    }

    // Plotting-area outline over the sector lines.
    let apexes = [
        DVec2::new(0.0, apex),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, -apex),
        DVec2::new(-1.0, 0.0),
        DVec2::new(0.0, apex),
    ];
    for pair in apexes.windows(2) {
        draw_line(
            &mut img,
            mapper.to_pixel(pair[0]),
            mapper.to_pixel(pair[1]),
            2,
            options.outline,
        );
    }

    if options.show_numbers {
        let pixel_size = (options.width.min(options.height) / 200).max(1);
        for i in 0..SECTOR_COUNT {
            let theta = i as f64 / SECTOR_COUNT as f64 * TAU;
            let pos = boundary_point(convention, theta) * NUMBER_RADIUS;
            draw_number(
                &mut img,
                mapper.to_pixel(pos),
                i + 1,
                pixel_size,
                options.number_color,
                options.background,
            );
        }
    }

    let point_px = mapper.to_pixel(DVec2::new(classification.point.x, classification.point.y));
    let point_radius = (options.width.min(options.height) as f64 * 0.012).max(3.0);
    fill_disc(&mut img, point_px, point_radius, options.point_color);

    img
}

/// Render the diagram and write it as a PNG (format chosen by extension).
pub fn save_diagram_png(
    classification: &Classification,
    options: &DiagramOptions,
    path: &Path,
) -> Result<(), DiagramError> {
    let img = render_diagram(classification, options);
    img.save(path)?;
    Ok(())
}
