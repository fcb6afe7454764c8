use rayon::prelude::*;

use crate::types::*;

/// One radiance sample per pixel, stored bottom row first.
pub struct FrameBuf {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Vector3f>,
}

impl FrameBuf {
    pub fn new(width: u32, height: u32) -> FrameBuf {
        FrameBuf { width, height, pixels: vec![Vector3f::zero(); (width * height) as usize] }
    }

    /// Evaluate `f` for every pixel in parallel; `y` counts up from the
    /// bottom row. Components are clamped to [0, 1] before storage.
    pub fn fill<F>(&mut self, f: F)
    where
        F: Fn(u32, u32) -> Vector3f + Sync,
    {
        let width = self.width;
        self.pixels.par_iter_mut().enumerate().for_each(|(i, px)| {
            let x = i as u32 % width;
            let y = i as u32 / width;
            *px = f(x, y).map(|v| max!(v, 0.0).min(1.0));
        });
    }

    pub fn get(&self, x: u32, y: u32) -> Vector3f {
        self.pixels[(x + y * self.width) as usize]
    }

    pub fn mk_image(&self) -> image::RgbImage {
        let mut buf = image::RgbImage::new(self.width, self.height);
        buf.enumerate_pixels_mut().for_each(|(x, y, p)| {
            let v = self.get(x, self.height - 1 - y);
            *p = image::Rgb([
                (v.x * 255.99) as u8,
                (v.y * 255.99) as u8,
                (v.z * 255.99) as u8,
            ]);
        });
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_clamps_components() {
        let mut frame = FrameBuf::new(2, 1);
        frame.fill(|x, _| iff!(x == 0, Vector3f::new(2.0, -1.0, 0.5), Vector3f::zero()));
        let px = frame.get(0, 0);
        assert!((px.x - 1.0).abs() < 1e-12);
        assert!(px.y.abs() < 1e-12);
        assert!((px.z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mk_image_flips_rows() {
        let mut frame = FrameBuf::new(1, 2);
        // Bottom row red, top row black.
        frame.fill(|_, y| iff!(y == 0, Vector3f::new(1.0, 0.0, 0.0), Vector3f::zero()));
        let img = frame.mk_image();
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
