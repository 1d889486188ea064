use std::collections::HashSet;

/// Jaccard similarity (0-1) of the case-folded character sets of two names
///
/// Two empty names have no overlap and score 0.
pub fn name_similarity(name1: &str, name2: &str) -> f64 {
    let set1: HashSet<char> = name1.to_lowercase().chars().collect();
    let set2: HashSet<char> = name2.to_lowercase().chars().collect();

    let intersection = set1.intersection(&set2).count();
    let union = set1.len() + set2.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Case-fold and drop blank tokens
pub fn normalize_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Overlap ratio (0-1) of two normalized hobby lists
///
/// A hobby from `hobbies1` counts as common when any hobby of `hobbies2`
/// contains it, or it contains one of them. The count is divided by the
/// number of distinct hobbies across both lists, so duplicated entries can
/// push the ratio above 1.
pub fn hobby_overlap(hobbies1: &[String], hobbies2: &[String]) -> f64 {
    let common = hobbies1
        .iter()
        .filter(|hobby| {
            hobbies2
                .iter()
                .any(|other| other.contains(hobby.as_str()) || hobby.contains(other.as_str()))
        })
        .count();

    let union: HashSet<&str> = hobbies1
        .iter()
        .chain(hobbies2.iter())
        .map(String::as_str)
        .collect();

    if union.is_empty() {
        return 0.0;
    }

    common as f64 / union.len() as f64
}

/// Circular distance between two positions on a cycle of length `period`
#[inline]
pub fn circular_distance(a: u32, b: u32, period: u32) -> u32 {
    let diff = a.abs_diff(b);
    diff.min(period.saturating_sub(diff))
}
