//! Site URL normalization

/// Normalize user-supplied site input into a fetchable base URL
///
/// Trims surrounding whitespace, prepends `https://` when no `http(s)://`
/// prefix is present (case-insensitive check, original casing preserved), and
/// strips exactly one trailing slash. Host syntax is not validated here;
/// malformed input fails at the fetch boundary instead.
pub fn normalize_site_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    match with_scheme.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => with_scheme,
    }
}

/// Whether the input already points at a GitHub repository
///
/// Used to skip the landing-page fetch when the operator passes a repository
/// URL directly.
pub fn looks_like_repo_url(input: &str) -> bool {
    let rest = match input
        .strip_prefix("https://github.com/")
        .or_else(|| input.strip_prefix("http://github.com/"))
    {
        Some(rest) => rest,
        None => return false,
    };

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    segments.next().is_some() && segments.next().is_some()
}
