use crate::core::data::colour_image::ColourImage;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(image: &ColourImage, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = image.resolution().width();
    let height = image.resolution().height();

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(&image.to_rgb8())?;

    Ok(())
}
