use crate::error::VisionError;
use crate::vision::landmarks::LandmarkSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Bgr,
    Rgb,
}

/// One captured camera image, 3 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
    /// Capture sequence number assigned by the camera.
    seq: u64,
}

const OVERLAY_COLOR_RGB: [u8; 3] = [0, 255, 0];
const OVERLAY_RADIUS: i64 = 2;

impl Frame {
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>, seq: u64) -> Result<Self, VisionError> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(VisionError::FrameSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
            seq,
        })
    }

    pub fn blank(width: u32, height: u32, seq: u64) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Bgr,
            pixels: vec![0; width as usize * height as usize * 3],
            seq,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Copy of this frame with the landmarks drawn as small squares.
    /// The original is left untouched so it can still be fed to the detector.
    pub fn with_landmarks(&self, landmarks: &LandmarkSet) -> Frame {
        let mut out = self.clone();
        let color = match self.format {
            PixelFormat::Rgb => OVERLAY_COLOR_RGB,
            PixelFormat::Bgr => [OVERLAY_COLOR_RGB[2], OVERLAY_COLOR_RGB[1], OVERLAY_COLOR_RGB[0]],
        };
        for point in landmarks.points() {
            let cx = (point.x * self.width as f32).round() as i64;
            let cy = (point.y * self.height as f32).round() as i64;
            for dy in -OVERLAY_RADIUS..=OVERLAY_RADIUS {
                for dx in -OVERLAY_RADIUS..=OVERLAY_RADIUS {
                    out.put(cx + dx, cy + dy, color);
                }
            }
        }
        out
    }

    fn put(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&color);
    }
}
