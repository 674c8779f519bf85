use regex::Regex;

/// Pattern-based extraction of class tokens and include directives from
/// raw document text. No HTML parsing happens here: both extractors are
/// plain regex scans, so malformed markup simply yields fewer matches.
pub struct Extractor {
    class_re: Regex,
    include_re: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        // class="a b" or class='a b', attribute name case-insensitive,
        // whitespace allowed around '='.
        let class_re =
            Regex::new(r#"(?i)class\s*=\s*["']([^"']*)["']"#).expect("class attribute pattern");
        // @@include("path") or @@include('path'), keyword case-insensitive,
        // whitespace allowed around the parentheses and the argument.
        let include_re = Regex::new(r#"(?i)@@include\s*\(\s*["']([^"']+)["']\s*\)"#)
            .expect("include directive pattern");
        Self {
            class_re,
            include_re,
        }
    }

    /// Extract every class token from `text`: quoted attribute values are
    /// split on whitespace, empty tokens dropped, duplicates collapsed.
    /// The result is lexicographically sorted.
    pub fn extract_classes(&self, text: &str) -> Vec<String> {
        let mut classes: Vec<String> = Vec::new();
        for caps in self.class_re.captures_iter(text) {
            for token in caps[1].split_whitespace() {
                if !token.is_empty() && !classes.iter().any(|c| c == token) {
                    classes.push(token.to_string());
                }
            }
        }
        classes.sort();
        classes
    }

    /// Extract include targets in first-seen order, duplicates dropped.
    pub fn extract_includes(&self, text: &str) -> Vec<String> {
        let mut includes: Vec<String> = Vec::new();
        for caps in self.include_re.captures_iter(text) {
            let target = caps[1].trim();
            if !target.is_empty() && !includes.iter().any(|i| i == target) {
                includes.push(target.to_string());
            }
        }
        includes
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
