use std::num::NonZeroUsize;

#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// `0` means "one worker per available core".
#[must_use]
pub fn resolve_workers(requested: usize) -> NonZeroUsize {
    NonZeroUsize::new(requested).unwrap_or_else(available_workers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_count_is_kept() {
        assert_eq!(resolve_workers(3).get(), 3);
    }

    #[test]
    fn test_zero_resolves_to_available_parallelism() {
        assert_eq!(resolve_workers(0), available_workers());
    }
}
