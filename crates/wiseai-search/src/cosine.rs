//! Vector similarity.

/// Cosine similarity of a query and a quote vector, clamped into [0, 1] for
/// use as a score term. Mismatched lengths, empty input and zero vectors
/// score 0.0.
pub fn similarity_score(query: &[f32], quote: &[f32]) -> f32 {
    if query.len() != quote.len() || query.is_empty() {
        return 0.0;
    }

    let (dot, query_sq, quote_sq) = query
        .iter()
        .zip(quote)
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, qs, vs), (q, v)| {
            (dot + q * v, qs + q * q, vs + v * v)
        });
    let denominator = (query_sq * quote_sq).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (dot / denominator).clamp(0.0, 1.0)
}
