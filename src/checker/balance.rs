use super::CheckOutcome;

/// Lexical state carried across line boundaries within a single file.
///
/// `balance` counts currently open scopes; it is never allowed to go below
/// zero (the scan halts instead). Block-comment state must survive line
/// breaks so that a comment opened on one line suppresses brace counting
/// on every following line until it is closed.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    balance: usize,
    in_block_comment: bool,
}

/// Character-level scanner that tracks `{`/`}` balance outside comments.
///
/// Comment handling is deliberately naive: `//` comments out the rest of the
/// line, `/* ... */` suppresses everything in between (across lines), and
/// string literals get no special treatment at all. A brace or comment marker
/// inside a quoted string affects the scan exactly as it would outside one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceScanner;

impl BraceScanner {
    /// Scan a full source text and report its brace balance.
    ///
    /// Lines are numbered from 1. The scan halts at the first `}` that has
    /// no matching open scope.
    #[must_use]
    pub fn scan(&self, source: &str) -> CheckOutcome {
        let mut state = ScanState::default();

        for (index, line) in source.lines().enumerate() {
            if let Some(outcome) = Self::scan_line(line, index + 1, &mut state) {
                return outcome;
            }
        }

        if state.balance > 0 {
            CheckOutcome::UnclosedOpen {
                missing: state.balance,
            }
        } else {
            CheckOutcome::Balanced
        }
    }

    /// Process one line. Returns `Some` only when the scan must halt.
    fn scan_line(line: &str, line_number: usize, state: &mut ScanState) -> Option<CheckOutcome> {
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            if state.in_block_comment {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    state.in_block_comment = false;
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            if chars[i] == '/' {
                match chars.get(i + 1).copied() {
                    Some('*') => {
                        state.in_block_comment = true;
                        i += 2;
                        continue;
                    }
                    // Line comment: the rest of this line has no effect.
                    Some('/') => return None,
                    _ => {}
                }
            }

            match chars[i] {
                '{' => state.balance += 1,
                '}' => {
                    if state.balance == 0 {
                        return Some(CheckOutcome::ExtraneousClose { line: line_number });
                    }
                    state.balance -= 1;
                }
                _ => {}
            }

            i += 1;
        }

        None
    }
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod tests;
