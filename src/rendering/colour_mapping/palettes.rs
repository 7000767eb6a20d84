use crate::core::data::colour::Colour;
use crate::rendering::colour_mapping::palette_kinds::PaletteKinds;
use std::f64::consts::PI;

// blue → neutral grey → red
const COOL_WARM_STOPS: &[(f32, f32, f32)] = &[
    (0.230, 0.299, 0.754),
    (0.865, 0.865, 0.865),
    (0.706, 0.016, 0.150),
];

// black → deep red → orange → yellow → white
const EMBER_STOPS: &[(f32, f32, f32)] = &[
    (0.0, 0.0, 0.0),
    (0.35, 0.0, 0.0),
    (0.90, 0.35, 0.0),
    (1.0, 0.80, 0.10),
    (1.0, 1.0, 1.0),
];

/// Standard 6-sector HSV to RGB conversion, all components in [0, 1].
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h * 6.0;
    let sector = (h.floor() as i64).rem_euclid(6);
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn from_triple((r, g, b): (f64, f64, f64)) -> Colour {
    Colour {
        r: r as f32,
        g: g as f32,
        b: b as f32,
    }
    .clamped()
}

fn interpolate_stops(stops: &[(f32, f32, f32)], t: f64) -> Colour {
    let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(stops.len() - 1);
    let fraction = (scaled - lower as f64) as f32;

    let (r0, g0, b0) = stops[lower];
    let (r1, g1, b1) = stops[upper];

    Colour {
        r: r0 + (r1 - r0) * fraction,
        g: g0 + (g1 - g0) * fraction,
        b: b0 + (b1 - b0) * fraction,
    }
}

/// Colour of a normalised scalar t in [0, 1] under the named palette.
#[must_use]
pub fn palette_colour(kind: PaletteKinds, t: f64) -> Colour {
    let t = t.clamp(0.0, 1.0);

    match kind {
        PaletteKinds::Classic => from_triple((
            (t * PI).sin().powi(2),
            (t * PI * 2.0).sin().powi(2),
            (t * PI / 2.0).cos().powi(2),
        )),
        PaletteKinds::Fire => from_triple((
            (t * 3.0).clamp(0.0, 1.0),
            (t * 3.0 - 1.0).clamp(0.0, 1.0),
            (t * 3.0 - 2.0).clamp(0.0, 1.0),
        )),
        PaletteKinds::Ocean => from_triple((t.powi(2), t.powf(1.5), t.sqrt())),
        PaletteKinds::Twilight => from_triple((
            0.5 + 0.5 * (2.0 * PI * t).sin(),
            0.5 + 0.5 * (2.0 * PI * t - PI / 2.0).sin(),
            0.5 + 0.5 * (2.0 * PI * t + PI / 2.0).sin(),
        )),
        PaletteKinds::Rainbow => from_triple(hsv_to_rgb(t, 1.0, 1.0)),
        PaletteKinds::Monochrome => from_triple((t, t, t)),
        PaletteKinds::CoolWarm => interpolate_stops(COOL_WARM_STOPS, t),
        PaletteKinds::Ember => interpolate_stops(EMBER_STOPS, t),
    }
}
