use criterion::{Criterion, criterion_group, criterion_main};
use fractal_forge::{FamilyKinds, ParamValue, Params, Renderer, Resolution};

fn bench_mandelbrot_direct(c: &mut Criterion) {
    let resolution = Resolution::new(320, 240).unwrap();

    c.bench_function("mandelbrot_320x240_direct", |b| {
        b.iter(|| {
            let mut renderer = Renderer::new(FamilyKinds::Mandelbrot, resolution);
            renderer.render(None, false, &Params::new()).unwrap()
        });
    });
}

fn bench_mandelbrot_progressive(c: &mut Criterion) {
    let resolution = Resolution::new(320, 240).unwrap();

    c.bench_function("mandelbrot_320x240_progressive", |b| {
        b.iter(|| {
            let mut renderer = Renderer::new(FamilyKinds::Mandelbrot, resolution);
            renderer.render(None, true, &Params::new()).unwrap()
        });
    });
}

fn bench_fern_chaos_game(c: &mut Criterion) {
    let resolution = Resolution::new(320, 240).unwrap();
    let params = Params::new().with("iterations", ParamValue::Int(200_000));

    c.bench_function("barnsley_fern_200k_samples", |b| {
        b.iter(|| {
            let mut renderer = Renderer::new(FamilyKinds::BarnsleyFern, resolution);
            renderer.render(None, false, &params).unwrap()
        });
    });
}

fn bench_palette_remap_from_cache(c: &mut Criterion) {
    let resolution = Resolution::new(320, 240).unwrap();
    let mut renderer = Renderer::new(FamilyKinds::Mandelbrot, resolution);
    renderer.render(None, false, &Params::new()).unwrap();

    c.bench_function("palette_remap_cached_field", |b| {
        b.iter(|| {
            renderer.colour_mapper_mut().cycle_palette(true);
            renderer.render(None, false, &Params::new()).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_mandelbrot_direct,
    bench_mandelbrot_progressive,
    bench_fern_chaos_game,
    bench_palette_remap_from_cache
);
criterion_main!(benches);
