use noisegen::image::ImageF32;

/// Deterministic pseudo-random field in `[0, 1)` (xorshift32).
pub fn xorshift_field(width: usize, height: usize, seed: u32) -> ImageF32 {
    assert!(seed != 0, "xorshift seed must be non-zero");
    let mut state = seed;
    let data = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 8) as f32 / (1u32 << 24) as f32
        })
        .collect();
    ImageF32::from_vec(width, height, data)
}

/// Smooth periodic signal in `[-1, 1]` that tiles across the field edges.
pub fn periodic_wave(x: usize, y: usize, width: usize, height: usize) -> f32 {
    let tau = std::f32::consts::TAU;
    let u = x as f32 / width as f32;
    let v = y as f32 / height as f32;
    0.5 * (tau * u).sin() + 0.5 * (2.0 * tau * v).cos()
}
