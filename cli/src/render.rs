//! PNG rendering of instances and solutions

use image::{ImageBuffer, Rgb, RgbImage};
use zoneplan::{Point, Solution};

const CANVAS: u32 = 800;
const MARGIN: u32 = 20;
const BACKGROUND: Rgb<u8> = Rgb([250, 250, 248]);
const OUTLINE: Rgb<u8> = Rgb([30, 30, 30]);
const GAIN_COLOR: Rgb<u8> = Rgb([40, 140, 60]); // negative weight
const LOSS_COLOR: Rgb<u8> = Rgb([200, 60, 40]); // positive weight
const NEUTRAL_COLOR: Rgb<u8> = Rgb([120, 120, 120]);

pub fn render_solution(points: &[Point], solution: &Solution) -> RgbImage {
    let mut max = 1.0_f64;
    for p in points {
        max = max.max(p.x).max(p.y);
    }
    for e in &solution.edges {
        max = max.max(e.x1).max(e.y1).max(e.x2).max(e.y2);
    }
    let scale = f64::from(CANVAS - 2 * MARGIN) / max;

    let mut img = ImageBuffer::from_pixel(CANVAS, CANVAS, BACKGROUND);
    for e in &solution.edges {
        draw_segment(
            &mut img,
            to_px(e.x1, scale),
            to_py(e.y1, scale),
            to_px(e.x2, scale),
            to_py(e.y2, scale),
        );
    }
    for p in points {
        let color = if p.w < 0.0 {
            GAIN_COLOR
        } else if p.w > 0.0 {
            LOSS_COLOR
        } else {
            NEUTRAL_COLOR
        };
        draw_dot(&mut img, to_px(p.x, scale), to_py(p.y, scale), color);
    }
    img
}

fn to_px(x: f64, scale: f64) -> i64 {
    i64::from(MARGIN) + (x * scale).round() as i64
}

// World y points up, canvas y points down.
fn to_py(y: f64, scale: f64) -> i64 {
    i64::from(CANVAS - MARGIN) - (y * scale).round() as i64
}

fn draw_segment(img: &mut RgbImage, x1: i64, y1: i64, x2: i64, y2: i64) {
    let steps = (x2 - x1).abs().max((y2 - y1).abs());
    for t in 0..=steps {
        let x = x1 + (x2 - x1) * t / steps.max(1);
        let y = y1 + (y2 - y1) * t / steps.max(1);
        put(img, x, y, OUTLINE);
    }
}

fn draw_dot(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    for dy in -2_i64..=2 {
        for dx in -2_i64..=2 {
            if dx * dx + dy * dy <= 4 {
                put(img, x + dx, y + dy, color);
            }
        }
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

pub fn save_png(img: &RgbImage, path: &str) -> Result<(), image::ImageError> {
    img.save(path)
}
