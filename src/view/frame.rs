//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use partition::model::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Pixel span `[start, end)` covered by `start..start+len`, clipped to `0..limit`
#[inline]
fn span(start: f32, len: f32, limit: usize) -> (usize, usize) {
    let lo = start.round().max(0.0) as usize;
    let hi = (start + len).round().max(0.0) as usize;
    let lo = lo.min(limit);
    (lo, hi.clamp(lo, limit))
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, x1) = span(rect.x, rect.width, self.width);
        let (y0, y1) = span(rect.y, rect.height, self.height);

        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let (x0, x1) = span(rect.x, rect.width, self.width);
        let (y0, y1) = span(rect.y, rect.height, self.height);

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Draw a `thickness`-wide outline just inside `rect`
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: u32) {
        let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0);
        if t <= 0.0 {
            return;
        }
        // Top
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), color);
        // Bottom
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.width, t), color);
        // Left
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height), color);
        // Right
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.height), color);
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    #[allow(dead_code)]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_half() {
        let blended = blend_colors(0xFF000000, 0xFFFFFFFF, 0.5);
        assert_eq!(blended & 0xFF, 127);
        assert_eq!(blended >> 24, 0xFF);
    }

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.fill_rect(Rect::new(-5.0, 8.0, 100.0, 100.0), 0xFFFF0000);

        assert_eq!(frame.get_pixel(0, 8), 0xFFFF0000);
        assert_eq!(frame.get_pixel(9, 9), 0xFFFF0000);
        assert_eq!(frame.get_pixel(0, 7), 0);
    }

    #[test]
    fn test_fill_rect_blended_transparent_is_noop() {
        let mut buffer = vec![0xFF123456u32; 4];
        let mut frame = Frame::new(&mut buffer, 2, 2);
        frame.fill_rect_blended(Rect::new(0.0, 0.0, 2.0, 2.0), 0x00FFFFFF);
        assert_eq!(frame.get_pixel(1, 1), 0xFF123456);
    }

    #[test]
    fn test_stroke_leaves_interior() {
        let mut buffer = vec![0u32; 8 * 8];
        let mut frame = Frame::new(&mut buffer, 8, 8);
        frame.stroke_rect(Rect::new(0.0, 0.0, 8.0, 8.0), 1.0, 0xFFFFFFFF);

        assert_eq!(frame.get_pixel(0, 0), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(7, 3), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(3, 3), 0);
    }

    #[test]
    fn test_short_buffer_shrinks_height() {
        let mut buffer = vec![0u32; 10 * 5];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 1);
        assert_eq!(frame.get_pixel(9, 4), 1);
    }
}
