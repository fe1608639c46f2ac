use super::*;

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, Span::new(0, 4))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 0..4: expected an expression");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, Span::new(2, 3))
        .message("expected `;`")
        .emit();
    diagnostics
        .report(DiagnosticKind::InvalidNumber, Span::new(5, 16))
        .message("99999999999")
        .emit();

    insta::assert_snapshot!(diagnostics.to_string(), @r"
    error at 2..3: unexpected token; expected `;`
    error at 5..16: `99999999999` does not fit in 32 bits
    ");
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, Span::new(0, 5))
        .message("primary")
        .related_to("related info", Span::new(6, 10))
        .emit();

    insta::assert_snapshot!(diagnostics.to_string(), @"error at 0..5: missing closing `)`; primary (related: related info at 6..10)");

    let result = diagnostics.printer("hello world!").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; primary
      |
    1 | hello world!
      | ^^^^^ ---- related info
    ");
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedName, Span::new(0, 5))
        .emit();

    let result = diagnostics.printer("hello world").path("main.pat").render();
    insta::assert_snapshot!(result, @r"
    error: expected a name
     --> main.pat:1:1
      |
    1 | hello world
      | ^^^^^
    ");
}

#[test]
fn printer_zero_width_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, Span::empty(0))
        .message("zero width error")
        .emit();

    let result = diagnostics.render("hello");
    insta::assert_snapshot!(result, @r"
    error: expected an expression; zero width error
      |
    1 | hello
      | ^
    ");
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, Span::new(0, 5))
        .message("test")
        .emit();

    let result = diagnostics.render_colored("hello", true);
    assert!(result.contains("test"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();

    assert!(diagnostics.render("source").is_empty());
}

#[test]
fn extend_keeps_order() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::ExpectedName, Span::new(0, 1)).emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::ExpectedNumber, Span::new(3, 4)).emit();

    a.extend(b);

    assert_eq!(a.error_count(), 2);
    let kinds: Vec<_> = a.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::ExpectedName, DiagnosticKind::ExpectedNumber]
    );
}

#[test]
fn span_cover() {
    let span = Span::new(4, 6).cover(Span::new(1, 2));

    assert_eq!(span, Span::new(1, 6));
    assert_eq!(span.range(), 1..6);
    assert!(Span::empty(3).is_empty());
}
