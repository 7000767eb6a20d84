use std::path::Path;
use std::time::Instant;

use crate::core::data::parameters::Params;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::family_kinds::FamilyKinds;
use crate::rendering::renderer::Renderer;
use crate::storage::write_ppm::write_ppm;

/// One family per kernel variety, rendered at its default view.
const SHOWCASE_KINDS: &[FamilyKinds] = &[
    FamilyKinds::Mandelbrot,
    FamilyKinds::Julia,
    FamilyKinds::BurningShip,
    FamilyKinds::BarnsleyFern,
    FamilyKinds::SierpinskiChaos,
    FamilyKinds::SierpinskiGasket,
];

pub fn showcase_controller(
    output_dir: impl AsRef<Path>,
    resolution: Resolution,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    println!(
        "Rendering showcase at {}x{}",
        resolution.width(),
        resolution.height()
    );

    for &kind in SHOWCASE_KINDS {
        let mut renderer = Renderer::new(kind, resolution);

        let start = Instant::now();
        let image = renderer.render(None, false, &Params::new())?;
        let duration = start.elapsed();

        let filepath = output_dir.join(format!("{}.ppm", kind.id()));
        write_ppm(&image, &filepath)?;

        println!("{}: {:?}", kind.display_name(), duration);
        println!("Saved to {}", filepath.display());
    }

    Ok(())
}
