// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&mdash;", "\u{2014}")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_minimal_set() {
        assert_eq!(normalize_entities("a&nbsp;&amp;&nbsp;b"), "a & b");
        assert_eq!(normalize_entities("Class 08 &mdash; Connection"), "Class 08 \u{2014} Connection");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \t b\n\nc  "), "a b c");
    }
}
