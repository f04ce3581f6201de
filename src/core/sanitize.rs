// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;` already decoded to U+00A0) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lowercased, whitespace-collapsed form used for candidate matching.
pub fn fold(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

/// Drop the extension from the last path segment: `/a/b-1.html` → `/a/b-1`.
/// Dots in earlier segments are left alone.
pub fn strip_extension(path: &str) -> &str {
    let seg_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[seg_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..seg_start + dot],
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Kent \n\t State\u{a0} "), "Kent State");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold("Julian   EDELMAN"), "julian edelman");
    }

    #[test]
    fn strip_extension_only_touches_last_segment() {
        assert_eq!(strip_extension("/cfb/players/julian-edelman-1.html"), "/cfb/players/julian-edelman-1");
        assert_eq!(strip_extension("/cfb/players/no-ext"), "/cfb/players/no-ext");
        assert_eq!(strip_extension("/v1.2/players/x"), "/v1.2/players/x");
        assert_eq!(strip_extension("/cfb/.hidden"), "/cfb/.hidden");
    }
}
