use super::*;

fn scan(source: &str) -> CheckOutcome {
    BraceScanner.scan(source)
}

#[test]
fn empty_source_is_balanced() {
    assert_eq!(scan(""), CheckOutcome::Balanced);
}

#[test]
fn nested_scopes_balance() {
    assert_eq!(scan("void f() { if (x) { } }"), CheckOutcome::Balanced);
}

#[test]
fn deep_nesting_balances() {
    assert_eq!(scan("{{{{}}}}"), CheckOutcome::Balanced);
}

#[test]
fn extraneous_close_on_first_line() {
    assert_eq!(
        scan("void f() { } }"),
        CheckOutcome::ExtraneousClose { line: 1 }
    );
}

#[test]
fn extraneous_close_reports_one_based_line() {
    assert_eq!(scan("\n\n}\n"), CheckOutcome::ExtraneousClose { line: 3 });
}

#[test]
fn extraneous_close_after_balanced_lines() {
    assert_eq!(
        scan("void f() {\n}\n}\n"),
        CheckOutcome::ExtraneousClose { line: 3 }
    );
}

#[test]
fn scan_halts_at_first_extraneous_close() {
    // Two offending lines; only the first is ever reported.
    assert_eq!(scan("}\n}\n"), CheckOutcome::ExtraneousClose { line: 1 });
}

#[test]
fn unclosed_scope_counted_at_eof() {
    assert_eq!(
        scan("void f() {\n  int x;\n"),
        CheckOutcome::UnclosedOpen { missing: 1 }
    );
}

#[test]
fn unclosed_count_reflects_every_open_scope() {
    assert_eq!(
        scan("a {\nb {\nc {\n}\n"),
        CheckOutcome::UnclosedOpen { missing: 2 }
    );
}

#[test]
fn line_comment_braces_ignored() {
    assert_eq!(scan("// { not real\nvoid f() {}"), CheckOutcome::Balanced);
}

#[test]
fn line_comment_suppresses_rest_of_line_only() {
    assert_eq!(scan("{ // }\n}"), CheckOutcome::Balanced);
}

#[test]
fn block_comment_braces_ignored() {
    assert_eq!(scan("/* { { { */\nfn x() {}"), CheckOutcome::Balanced);
}

#[test]
fn block_comment_spans_lines() {
    let source = "{\n/* comment {\nstill comment }\n*/\n}";
    assert_eq!(scan(source), CheckOutcome::Balanced);
}

#[test]
fn brace_counts_again_after_comment_close() {
    assert_eq!(scan("/* x */ }"), CheckOutcome::ExtraneousClose { line: 1 });
}

#[test]
fn consecutive_block_comments_on_one_line() {
    assert_eq!(scan("/* a */ { /* b */ }"), CheckOutcome::Balanced);
}

#[test]
fn block_comment_open_inside_line_comment_has_no_effect() {
    assert_eq!(scan("// /*\n{}"), CheckOutcome::Balanced);
}

#[test]
fn unterminated_block_comment_suppresses_to_eof() {
    // The `}` on line 2 is inside the still-open comment.
    assert_eq!(scan("{ /* \n } \n"), CheckOutcome::UnclosedOpen { missing: 1 });
}

#[test]
fn close_marker_outside_comment_is_plain_text() {
    assert_eq!(scan("*/ {}"), CheckOutcome::Balanced);
}

#[test]
fn lone_slash_is_not_a_comment() {
    assert_eq!(scan("a / b { }"), CheckOutcome::Balanced);
}

#[test]
fn trailing_slash_at_end_of_line() {
    assert_eq!(scan("{ /"), CheckOutcome::UnclosedOpen { missing: 1 });
}

#[test]
fn crlf_line_endings_handled() {
    assert_eq!(scan("{\r\n}\r\n"), CheckOutcome::Balanced);
}

// String literals are deliberately NOT understood by the scanner. These
// tests pin the naive behavior down so nobody "fixes" it by accident.

#[test]
fn close_brace_inside_string_still_counts() {
    assert_eq!(
        scan("let s = \"}\";"),
        CheckOutcome::ExtraneousClose { line: 1 }
    );
}

#[test]
fn open_brace_inside_string_still_counts() {
    assert_eq!(
        scan("let s = \"{\";"),
        CheckOutcome::UnclosedOpen { missing: 1 }
    );
}

#[test]
fn comment_marker_inside_string_still_opens_comment() {
    // The /* inside the string swallows the closing brace after it.
    assert_eq!(scan("let s = \"/*\"; }"), CheckOutcome::Balanced);
}
