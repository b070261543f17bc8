// Evenly spaced samples and array replication helpers

/// Evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// Samples are computed in double precision and narrowed to `f32`, so the
/// last element is exactly `stop` regardless of accumulated error.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f32> {
    match num {
        0 => Vec::new(),
        1 => vec![start as f32],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut samples: Vec<f32> = (0..num)
                .map(|i| (start + i as f64 * step) as f32)
                .collect();
            samples[num - 1] = stop as f32;
            samples
        }
    }
}

/// `divisions + 1` marks from `start` to `start + span` at fixed spacing.
pub fn marks(start: f64, span: f64, divisions: usize) -> Vec<f32> {
    let spacing = span / divisions as f64;
    (0..=divisions)
        .map(|i| (start + i as f64 * spacing) as f32)
        .collect()
}

/// Concatenate `slice` with itself `count` times.
pub fn tile(slice: &[f32], count: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(slice.len() * count);
    for _ in 0..count {
        out.extend_from_slice(slice);
    }
    out
}

/// Emit every element of `slice` `count` times in a row.
pub fn repeat(slice: &[f32], count: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(slice.len() * count);
    for &v in slice {
        out.extend(std::iter::repeat(v).take(count));
    }
    out
}
