/// Flatten a generic parameter list into a canonical identifier suffix.
///
/// `"T, K"` becomes `"TK"`: whitespace and comma separators are removed and
/// the remaining characters concatenated. The canonical type name appends
/// this suffix to the base name, so `Repo<T, K>` compares as `RepoTK`.
#[must_use]
pub fn generic_suffix(params: &str) -> String {
    params
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect()
}

#[cfg(test)]
#[path = "generics_tests.rs"]
mod tests;
