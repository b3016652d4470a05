use indoc::indoc;

use crate::parser::ast::{Expr, Name, Rule};
use crate::parser::parse;

fn single_rule(source: &str) -> Rule {
    let grammar = parse(source).expect("test grammar parses");
    assert_eq!(grammar.rules.len(), 1, "expected exactly one rule");
    grammar.rules.into_iter().next().unwrap()
}

#[test]
fn empty_source_is_an_empty_grammar() {
    assert!(parse("").unwrap().rules.is_empty());
    assert!(parse("  \n\t ").unwrap().rules.is_empty());
}

#[test]
fn terminal_rule() {
    let rule = single_rule(r#"A = "xyz";"#);
    assert_eq!(rule.name, Name::new("A"));
    assert_eq!(rule.body, Expr::Terminal("xyz".into()));
}

#[test]
fn single_quoted_terminal() {
    let rule = single_rule("A = 'q';");
    assert_eq!(rule.body, Expr::Terminal("q".into()));
}

#[test]
fn terminal_keeps_escapes_undecoded() {
    let rule = single_rule(r#"A = "\n\"";"#);
    assert_eq!(rule.body, Expr::Terminal(r#"\n\""#.into()));
}

#[test]
fn identifier_rule() {
    let rule = single_rule("A = B;");
    assert_eq!(rule.body, Expr::Identifier(Name::new("B")));
}

#[test]
fn alternation_collects_operands_in_order() {
    let rule = single_rule(r#"T = "A" | "B" | "C";"#);
    let Expr::Alternative(operands) = rule.body else {
        panic!("expected Alternative, got {:?}", rule.body);
    };
    assert_eq!(
        operands,
        [
            Expr::Terminal("A".into()),
            Expr::Terminal("B".into()),
            Expr::Terminal("C".into()),
        ]
    );
}

#[test]
fn single_operand_is_not_wrapped() {
    // No one-armed Alternative nodes; the operand stands alone.
    let rule = single_rule(r#"A = "x";"#);
    assert!(matches!(rule.body, Expr::Terminal(_)));
}

#[test]
fn exception_splits_minuend_and_subtrahend() {
    let rule = single_rule("X = LETTER - VOWEL;");
    let Expr::Exception(minuend, subtrahend) = rule.body else {
        panic!("expected Exception, got {:?}", rule.body);
    };
    assert_eq!(*minuend, Expr::Identifier(Name::new("LETTER")));
    assert_eq!(*subtrahend, Expr::Identifier(Name::new("VOWEL")));
}

#[test]
fn range_binds_tighter_than_exception() {
    let rule = single_rule(r#"X = "a".."z" - "m";"#);
    let Expr::Exception(minuend, subtrahend) = rule.body else {
        panic!("expected Exception, got {:?}", rule.body);
    };
    assert!(matches!(*minuend, Expr::Range(_, _)));
    assert_eq!(*subtrahend, Expr::Terminal("m".into()));
}

#[test]
fn concatenation_binds_tighter_than_alternation() {
    let rule = single_rule(r#"X = "a" | "b", "c";"#);
    let Expr::Alternative(operands) = rule.body else {
        panic!("expected Alternative, got {:?}", rule.body);
    };
    assert_eq!(operands.len(), 2);
    assert!(matches!(&operands[1], Expr::Concatenation(items) if items.len() == 2));
}

#[test]
fn grouping_is_transparent() {
    let rule = single_rule(r#"A = ( "x" );"#);
    assert_eq!(rule.body, Expr::Terminal("x".into()));
}

#[test]
fn optional_and_repeated_shapes() {
    let rule = single_rule(r#"A = [ "x" ];"#);
    assert!(matches!(rule.body, Expr::Optional(_)));
    let rule = single_rule(r#"A = { "x" };"#);
    assert!(matches!(rule.body, Expr::Repeated(_)));
}

#[test]
fn multiple_rules_keep_declaration_order() {
    let grammar = parse(indoc! {r#"
        B = "b";
        A = "a";
    "#})
    .unwrap();
    let names: Vec<&str> = grammar.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);
}

#[test]
fn comments_are_skipped() {
    let grammar = parse(indoc! {r#"
        (* leading comment *)
        A = "a"; (* inline, with * stars ** inside *)
        B = "b";
    "#})
    .unwrap();
    assert_eq!(grammar.rules.len(), 2);
}

#[test]
fn display_reconstructs_textual_forms() {
    let cases = [
        (r#"T = "A" | "B" | "C";"#, r#""A" | "B" | "C""#),
        (r#"D = "0".."9";"#, r#""0".."9""#),
        ("X = LETTER - VOWEL;", "LETTER - VOWEL"),
        (r#"X = "A", "B";"#, r#""A" , "B""#),
        (r#"X = [ "A" ];"#, r#"[ "A" ]"#),
        (r#"X = { "A" };"#, r#"{ "A" }"#),
    ];
    for (source, expected) in cases {
        assert_eq!(single_rule(source).body.to_string(), expected, "{source}");
    }
}

#[test]
fn missing_semicolon_is_an_error() {
    let source = r#"A = "x""#;
    let err = parse(source).unwrap_err();
    assert!(err.message().contains("expected `;`"), "{}", err.message());
    let rendered = err.render(source);
    assert!(rendered.contains("expected `;`"));
    assert!(rendered.contains(r#"A = "x""#));
}

#[test]
fn missing_body_is_an_error() {
    let err = parse("A = ;").unwrap_err();
    assert!(err.message().contains("expected a terminal"));
}

#[test]
fn unexpected_end_of_grammar() {
    let err = parse("A =").unwrap_err();
    assert!(err.message().contains("end of grammar"), "{}", err.message());
    assert_eq!(err.span(), 3..3);
}

#[test]
fn garbage_is_reported_with_its_text() {
    let err = parse("A = @@;").unwrap_err();
    assert!(err.message().contains("`@@`"), "{}", err.message());
}

#[test]
fn unterminated_group_is_an_error() {
    let err = parse(r#"A = ( "x" ;"#).unwrap_err();
    assert!(err.message().contains("expected `)`"), "{}", err.message());
}

#[test]
fn rule_must_start_with_an_identifier() {
    let err = parse(r#""A" = "x";"#).unwrap_err();
    assert!(err.message().contains("expected a rule name"));
}
