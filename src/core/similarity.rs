use std::collections::HashMap;

/// Split free text into lowercase tokens on whitespace and punctuation
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Build a term-frequency vector over all tokens in a bag of phrases
fn term_frequencies(bag: &[String]) -> HashMap<String, f64> {
    let mut freqs = HashMap::new();
    for phrase in bag {
        for token in tokenize(phrase) {
            *freqs.entry(token).or_insert(0.0) += 1.0;
        }
    }
    freqs
}

/// Cosine similarity (0-1) between two bags of skill/sector phrases
///
/// Both bags are tokenized into a shared vocabulary and represented as
/// term-frequency vectors. Empty bags, an empty vocabulary, or a
/// zero-magnitude vector all yield 0.0 rather than an error.
pub fn similarity(bag_a: &[String], bag_b: &[String]) -> f64 {
    let freqs_a = term_frequencies(bag_a);
    let freqs_b = term_frequencies(bag_b);

    if freqs_a.is_empty() || freqs_b.is_empty() {
        return 0.0;
    }

    // Iterating one map is enough for the dot product: terms absent from
    // either side contribute zero.
    let dot: f64 = freqs_a
        .iter()
        .filter_map(|(term, tf_a)| freqs_b.get(term).map(|tf_b| tf_a * tf_b))
        .sum();

    let mag_a: f64 = freqs_a.values().map(|tf| tf * tf).sum::<f64>().sqrt();
    let mag_b: f64 = freqs_b.values().map(|tf| tf * tf).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    (dot / (mag_a * mag_b)).clamp(0.0, 1.0)
}
