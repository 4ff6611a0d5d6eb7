/// How strictly a bare `$` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syntax {
    /// Only `$(` starts a token. `$$` and any other `$` are copied through
    /// untouched so the pass that owns them still sees them.
    #[default]
    Passthrough,
    /// Byte compatible with the build host's own expander: `$$` collapses to
    /// `$` and any other `$` not followed by `(` is an error.
    Host,
}

/// One piece of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, emitted as is.
    Text(&'a str),
    /// The identifier of a `$(identifier)` token, surrounding whitespace trimmed.
    Placeholder(&'a str),
}

/// Single pass scanner over `$(identifier)` tokens.
///
/// Yields `Err` with a parse failure description at most once, after which it
/// is exhausted.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    syntax: Syntax,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, syntax: Syntax) -> Self {
        Self {
            input,
            pos: 0,
            syntax,
            failed: false,
        }
    }

    fn fail(&mut self, reason: String) -> Result<Segment<'a>, String> {
        self.failed = true;
        Err(reason)
    }

    // `rest` starts with '$'. All delimiters are ASCII so byte offsets are
    // always char boundaries.
    fn scan_dollar(&mut self, rest: &'a str) -> Result<Segment<'a>, String> {
        let after = &rest[1..];
        match (after.as_bytes().first().copied(), self.syntax) {
            (Some(b'('), _) => match after.find(')') {
                Some(close) => {
                    self.pos += close + 2;
                    Ok(Segment::Placeholder(after[1..close].trim()))
                }
                None => self.fail("missing )".to_string()),
            },
            (Some(b'$'), Syntax::Host) => {
                self.pos += 2;
                Ok(Segment::Text(&rest[..1]))
            }
            (Some(b'$'), Syntax::Passthrough) => {
                self.pos += 2;
                Ok(Segment::Text(&rest[..2]))
            }
            (_, Syntax::Passthrough) => {
                self.pos += 1;
                Ok(Segment::Text(&rest[..1]))
            }
            (None, Syntax::Host) => self.fail("expected character after '$'".to_string()),
            (Some(_), Syntax::Host) => match after.find(char::is_whitespace) {
                Some(0) => {
                    let chr = after.chars().next().unwrap_or(' ');
                    self.fail(format!("unexpected character '{}' after '$'", chr))
                }
                end => {
                    let word = &after[..end.unwrap_or(after.len())];
                    self.fail(format!("expected '(' after '$', did you mean $({})?", word))
                }
            },
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Segment<'a>, String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        if rest.starts_with('$') {
            return Some(self.scan_dollar(rest));
        }

        let end = rest.find('$').unwrap_or(rest.len());
        self.pos += end;
        Some(Ok(Segment::Text(&rest[..end])))
    }
}
