use crate::SemanticError;

/// Cosine similarity clamped into `[0, 1]`.
///
/// Accumulates in `f64` so long vectors do not drift. A zero-norm side or a
/// non-finite result yields `0.0`; slightly negative values from
/// near-orthogonal vectors are clamped to `0.0` rather than reported.
///
/// # Errors
///
/// [`SemanticError::DimensionMismatch`] when the slices differ in length.
/// `a` is treated as the reference dimension.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SemanticError> {
    if a.len() != b.len() {
        return Err(SemanticError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let sim = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !sim.is_finite() {
        return Ok(0.0);
    }
    Ok(sim.clamp(0.0, 1.0))
}
