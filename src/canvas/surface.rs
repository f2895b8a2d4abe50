use std::io::Cursor;

use image::{ImageOutputFormat, Rgba, RgbaImage};

use crate::error::SurfaceError;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A position in surface-local pixel space. Pixel `(x, y)` covers
/// `[x, x+1) × [y, y+1)`, so its centre is at `(x + 0.5, y + 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// Square, always-opaque RGBA raster the user draws on.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Creates an opaque white surface. A zero side is raised to 1.
    pub fn new(side: u32) -> RasterSurface {
        let side = side.max(1);
        RasterSurface { image: RgbaImage::from_pixel(side, side, WHITE) }
    }

    pub fn side(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn fill(&mut self, color: Rgba<u8>) {
        for p in self.image.pixels_mut() {
            *p = color;
        }
    }

    /// Resets every pixel to opaque white.
    pub fn clear(&mut self) {
        self.fill(WHITE);
    }

    /// True when no pixel differs from the white background.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| *p == WHITE)
    }

    /// Paints a round-capped segment of diameter `width` from `from` to `to`.
    ///
    /// A pixel is painted when its centre lies within `width / 2` of the
    /// segment. Segments sharing an endpoint therefore meet in a round join.
    /// Off-surface parts are clipped.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f32, color: Rgba<u8>) {
        let finite = [from.x, from.y, to.x, to.y, width].iter().all(|v| v.is_finite());
        if !finite || width <= 0.0 {
            return;
        }
        let radius = width / 2.0;
        let limit = (self.side() - 1) as f32;

        let x0 = (from.x.min(to.x) - radius).floor().max(0.0);
        let y0 = (from.y.min(to.y) - radius).floor().max(0.0);
        let x1 = (from.x.max(to.x) + radius).ceil().min(limit);
        let y1 = (from.y.max(to.y) + radius).ceil().min(limit);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let r_sq = radius * radius;
        for y in y0 as u32..=y1 as u32 {
            for x in x0 as u32..=x1 as u32 {
                let centre = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_sq_to_segment(centre, from, to) <= r_sq {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// PNG bytes of the current contents.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut bytes = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
        Ok(bytes)
    }
}

fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx - p.x, a.y + t * dy - p.y);
    cx * cx + cy * cy
}
