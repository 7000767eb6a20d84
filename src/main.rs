use fractal_forge::Resolution;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let resolution = Resolution::new(800, 600)?;

    fractal_forge::showcase_controller("output", resolution)
}
