use regex::Regex;

use super::generics::generic_suffix;
use super::strip::CommentStripper;
use super::types::{Declaration, TypeKeyword};

/// Extracts type and method declarations from raw source text.
///
/// Not a parser: anchored regular expressions find declaration lines on
/// comment-stripped text, and a per-line brace counter delimits each type
/// body. The heuristic is wrong in contrived cases (a brace inside a
/// single-line lambda, nested local types) but cheap and adequate for the
/// convention checks it feeds. Keep it behind this interface so it can be
/// swapped for a real parser without touching validator logic.
pub struct DeclarationScanner {
    type_pattern: Regex,
    delegate_pattern: Regex,
    method_pattern: Regex,
    exception_base_pattern: Regex,
}

const QUALIFIERS: &str = r"^\s*(?:(?:public|internal|protected|private|static|abstract|sealed|partial)\s+)*";

impl DeclarationScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            type_pattern: Regex::new(&format!(
                r"{QUALIFIERS}(class|struct|interface|enum)\s+([A-Za-z_]\w*)\s*(?:<([^>]+)>)?"
            ))
            .expect("Invalid regex"),
            // Delegates carry a return type between the keyword and the name.
            delegate_pattern: Regex::new(&format!(
                r"{QUALIFIERS}delegate\s+[\w<>\[\],\.]+\s+([A-Za-z_]\w*)\s*(?:<([^>]+)>)?"
            ))
            .expect("Invalid regex"),
            method_pattern: Regex::new(r"\b(?:public|protected)\s+(?:async\s+)?(?:\w+\s+)+(\w+)\s*\(")
                .expect("Invalid regex"),
            exception_base_pattern: Regex::new(r":[^{]*\b\w*Exception\b").expect("Invalid regex"),
        }
    }

    /// Scan source text and return every discovered declaration: each type
    /// followed by the methods declared in its body, in line order.
    ///
    /// Types whose base-type clause names an exception base are skipped
    /// entirely; they are not logic types subject to coverage checks.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<Declaration> {
        let stripped = CommentStripper::strip(source);
        let lines: Vec<&str> = stripped.lines().collect();
        let mut declarations = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some((keyword, name, suffix, match_end)) = self.match_type_line(line) else {
                continue;
            };

            if self.exception_base_pattern.is_match(&line[match_end..]) {
                continue;
            }

            let (methods, end_line) = if keyword.has_method_body() {
                self.scan_type_body(&lines, i, &name)
            } else if keyword == TypeKeyword::Delegate {
                (Vec::new(), i + 1)
            } else {
                (Vec::new(), find_body_end(&lines, i))
            };

            declarations.push(Declaration::new_type(keyword, name, suffix, i + 1, end_line));
            declarations.extend(methods);
        }

        declarations
    }

    fn match_type_line(&self, line: &str) -> Option<(TypeKeyword, String, String, usize)> {
        if let Some(caps) = self.delegate_pattern.captures(line) {
            let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
            let suffix = caps.get(2).map_or_else(String::new, |m| generic_suffix(m.as_str()));
            let end = caps.get(0).map_or(0, |m| m.end());
            return Some((TypeKeyword::Delegate, name, suffix, end));
        }

        let caps = self.type_pattern.captures(line)?;
        let keyword = TypeKeyword::parse(caps.get(1)?.as_str())?;
        let name = caps.get(2).map_or("", |m| m.as_str()).to_string();
        let suffix = caps.get(3).map_or_else(String::new, |m| generic_suffix(m.as_str()));
        let end = caps.get(0).map_or(0, |m| m.end());
        Some((keyword, name, suffix, end))
    }

    /// Walk the type body with a brace counter, collecting every method
    /// declaration while the counter is above zero. Returns the methods and
    /// the 1-indexed line where the counter comes back to zero.
    fn scan_type_body(
        &self,
        lines: &[&str],
        type_idx: usize,
        type_name: &str,
    ) -> (Vec<Declaration>, usize) {
        let mut methods = Vec::new();
        let mut depth: usize = 0;
        let mut entered = false;

        for (i, line) in lines.iter().enumerate().skip(type_idx) {
            if entered
                && depth > 0
                && let Some(caps) = self.method_pattern.captures(line)
            {
                let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
                methods.push(Declaration::new_method(name, type_name.to_string(), i + 1));
            }

            for ch in line.chars() {
                match ch {
                    '{' => {
                        depth += 1;
                        entered = true;
                    }
                    '}' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }

            if entered && depth == 0 {
                return (methods, i + 1);
            }
        }

        // Unclosed body: degrade to the last line instead of failing the scan.
        (methods, lines.len().max(type_idx + 1))
    }
}

impl Default for DeclarationScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Brace range of a body that is never scanned for methods (enums).
fn find_body_end(lines: &[&str], start: usize) -> usize {
    let mut depth: usize = 0;
    let mut entered = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    entered = true;
                }
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        if entered && depth == 0 {
            return i + 1;
        }
    }

    lines.len().max(start + 1)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
