/// Removes comment content from source text while preserving line count, so
/// downstream line numbers keep pointing at the original file.
///
/// Recognizes line comments (`//`), documentation comments (`///`), and block
/// comments (`/* ... */`, possibly spanning lines). Known limitation, carried
/// deliberately: there is no string or character literal awareness, so a
/// marker embedded in a literal still starts a comment.
pub struct CommentStripper {
    in_block: bool,
}

impl CommentStripper {
    #[must_use]
    pub const fn new() -> Self {
        Self { in_block: false }
    }

    /// Strip comments from `source`. The output has the same number of lines
    /// as the input.
    #[must_use]
    pub fn strip(source: &str) -> String {
        let mut stripper = Self::new();
        let stripped: Vec<String> = source
            .lines()
            .map(|line| stripper.strip_line(line))
            .collect();
        stripped.join("\n")
    }

    fn strip_line(&mut self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut rest = line;

        loop {
            if self.in_block {
                match rest.find("*/") {
                    Some(end) => {
                        self.in_block = false;
                        rest = &rest[end + 2..];
                    }
                    None => return out,
                }
                continue;
            }

            match (rest.find("//"), rest.find("/*")) {
                // Line comment first: the rest of the line is comment.
                (Some(l), Some(b)) if l < b => {
                    out.push_str(&rest[..l]);
                    return out;
                }
                (Some(l), None) => {
                    out.push_str(&rest[..l]);
                    return out;
                }
                (_, Some(b)) => {
                    out.push_str(&rest[..b]);
                    self.in_block = true;
                    rest = &rest[b + 2..];
                }
                (None, None) => {
                    out.push_str(rest);
                    return out;
                }
            }
        }
    }
}

impl Default for CommentStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// The distinguished `///` line-comment variant that satisfies documentation
/// coverage when it immediately precedes a public member.
#[must_use]
pub fn is_doc_comment_line(line: &str) -> bool {
    line.trim_start().starts_with("///")
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;
