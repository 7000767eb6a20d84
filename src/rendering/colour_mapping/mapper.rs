use crate::core::data::colour::Colour;
use crate::core::data::colour_image::ColourImage;
use crate::core::data::scalar_field::ScalarField;
use crate::rendering::colour_mapping::palette_kinds::PaletteKinds;
use crate::rendering::colour_mapping::palettes::palette_colour;

/// Maps scalar fields to colour images through a named palette with an
/// optional inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourMapper {
    palette: PaletteKinds,
    invert: bool,
}

impl ColourMapper {
    #[must_use]
    pub fn new(palette: PaletteKinds, invert: bool) -> Self {
        Self { palette, invert }
    }

    #[must_use]
    pub fn palette(&self) -> PaletteKinds {
        self.palette
    }

    pub fn set_palette(&mut self, palette: PaletteKinds) {
        self.palette = palette;
    }

    /// Unknown names fall back to the default palette instead of failing.
    pub fn set_palette_by_name(&mut self, name: &str) {
        self.palette = PaletteKinds::from_name(name).unwrap_or_default();
    }

    #[must_use]
    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }

    /// Advances to the neighbouring palette in the fixed enumeration,
    /// wrapping at both ends.
    pub fn cycle_palette(&mut self, forward: bool) {
        self.palette = if forward {
            self.palette.next()
        } else {
            self.palette.previous()
        };
    }

    #[must_use]
    pub fn colour_for(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let t = if self.invert { 1.0 - t } else { t };

        palette_colour(self.palette, t)
    }

    /// Converts a scalar field to a colour image, optionally re-normalising
    /// the field to [0, 1] through its own min/max first.
    #[must_use]
    pub fn map_field(&self, field: &ScalarField, normalise: bool) -> ColourImage {
        let (min, max) = field.min_max();
        let range = max - min;
        let rescale = normalise && range > 0.0;

        let resolution = field.resolution();
        let mut image = ColourImage::new(resolution);

        for y in 0..resolution.height() {
            for x in 0..resolution.width() {
                let value = field.value_at(x, y);
                let t = if rescale {
                    f64::from((value - min) / range)
                } else {
                    f64::from(value)
                };

                image.set_pixel(x, y, self.colour_for(t));
            }
        }

        image
    }
}
