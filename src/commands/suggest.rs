//! "Did you mean" suggestions for unknown triggers.

/// Proposes the known trigger most similar to `unknown`.
///
/// Known triggers that extend `unknown` are preferred; known triggers that
/// `unknown` extends are the fallback. Among several candidates the shortest
/// wins, ties broken alphabetically.
pub fn suggest<'a, I>(unknown: &str, known: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let known: Vec<&str> = known.into_iter().collect();

    let extending: Vec<&str> = known
        .iter()
        .copied()
        .filter(|trigger| trigger.starts_with(unknown))
        .collect();

    let mut candidates = if extending.is_empty() {
        known
            .iter()
            .copied()
            .filter(|trigger| unknown.starts_with(*trigger))
            .collect()
    } else {
        extending
    };

    candidates.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.first().map(|s| s.to_string())
}
