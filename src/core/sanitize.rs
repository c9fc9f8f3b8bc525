// src/core/sanitize.rs

/// Make a user-supplied piece safe inside a file name.
/// Keeps ASCII alphanumerics, `-`, `_` and `.`; whitespace runs become one `_`.
/// Falls back to `fallback` when nothing survives.
pub fn sanitize_filename_part(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.' {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us {
                out.push('_');
                last_us = true;
            }
        }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::sanitize_filename_part;

    #[test]
    fn keeps_profile_style_names() {
        assert_eq!(sanitize_filename_part("alice.smith", "x"), "alice.smith");
        assert_eq!(sanitize_filename_part("john-doe_99", "x"), "john-doe_99");
    }

    #[test]
    fn strips_path_and_shell_noise() {
        assert_eq!(sanitize_filename_part("../../etc", "x"), "etc");
        assert_eq!(sanitize_filename_part("a b\tc", "x"), "a_b_c");
        assert_eq!(sanitize_filename_part("who?*:", "x"), "who");
    }

    #[test]
    fn empty_uses_fallback() {
        assert_eq!(sanitize_filename_part("", "1000023"), "1000023");
        assert_eq!(sanitize_filename_part("///", "1000023"), "1000023");
    }
}
