/// Row limit for list-style output: the `--limit` flag, else the configured
/// default. Zero means no limit.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> Option<usize> {
    let limit = global.unwrap_or(fallback);
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Keep at most `limit` items.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}
