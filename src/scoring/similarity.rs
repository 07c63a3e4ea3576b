//! Cosine similarity shared by the semantic and compatibility scorers.

/// Cosine similarity of two equal-length vectors, accumulated in `f64`.
///
/// Returns `None` when the lengths differ, either vector is empty or has zero norm, or the
/// result is not finite. Callers decide whether that is an error or a neutral value.
pub fn cosine_similarity<T>(a: &[T], b: &[T]) -> Option<f64>
where
    T: Copy + Into<f64>,
{
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av: f64 = av.into();
                let bv: f64 = bv.into();
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    let similarity = dot / (norm_a * norm_b);
    similarity
        .is_finite()
        .then(|| similarity.clamp(-1.0, 1.0))
}
