//! Import specifier normalization.

/// Get the root package name from an import specifier.
///
/// Sub-paths are stripped (`pkg/sub/path` → `pkg`), while scoped packages
/// keep their scope prefix (`@scope/pkg/sub` → `@scope/pkg`). Relative
/// specifiers collapse to `.`/`..`, which never collide with a real package
/// name, so they need no special handling.
///
/// Total and idempotent: every string input maps to a prefix of itself, and
/// re-applying the function is a no-op.
pub fn root_package(specifier: &str) -> &str {
    let mut separators = specifier
        .char_indices()
        .filter(|(_, c)| *c == '/')
        .map(|(i, _)| i);

    let cut = if specifier.starts_with('@') {
        // Scoped package: keep the first two segments.
        separators.nth(1)
    } else {
        separators.next()
    };

    match cut {
        Some(index) => &specifier[..index],
        None => specifier,
    }
}

/// Strip range operators from a semver requirement, leaving the version
/// number itself. Used for display only; depscan never interprets ranges.
pub fn actual_version(semver: &str) -> &str {
    semver.trim_start_matches(['^', '~', '<', '>', '='])
}
