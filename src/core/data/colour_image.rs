use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;

/// Height×width×3 image with float channels in [0, 1]. Derived from a
/// scalar field by colour mapping; not mutated after that.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourImage {
    resolution: Resolution,
    channels: Vec<f32>,
}

impl ColourImage {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            channels: vec![0.0; resolution.pixel_count() * 3],
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn channels(&self) -> &[f32] {
        &self.channels
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        let index = (y as usize * self.resolution.width() as usize + x as usize) * 3;
        let colour = colour.clamped();

        self.channels[index] = colour.r;
        self.channels[index + 1] = colour.g;
        self.channels[index + 2] = colour.b;
    }

    #[must_use]
    pub fn pixel_at(&self, x: u32, y: u32) -> Colour {
        let index = (y as usize * self.resolution.width() as usize + x as usize) * 3;

        Colour {
            r: self.channels[index],
            g: self.channels[index + 1],
            b: self.channels[index + 2],
        }
    }

    /// Packs the image into 8-bit RGB bytes for export.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.channels
            .iter()
            .map(|&c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}
