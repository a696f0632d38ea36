use super::super::{ast::*, compile, ErrorCode, Function, Ident, Kind};

fn parse_str(s: &str) -> Vec<Statement> {
    match compile(s) {
        Ok(v) => v,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

fn listing(s: &str) -> Vec<String> {
    parse_str(s).iter().map(|s| s.to_string()).collect()
}

fn int(n: i32) -> Box<Expression> {
    Box::new(Expression::Integer(n))
}

#[test]
fn test_precedence() {
    let answer = Statement::Let(
        1,
        Ident::from("x"),
        Expression::Add(int(3), Box::new(Expression::Multiply(int(2), int(5)))),
    );
    assert_eq!(parse_str("x = 3+2*5"), [answer]);
}

#[test]
fn test_left_associative_and_paren() {
    let answer = Statement::Let(
        1,
        Ident::from("x"),
        Expression::Subtract(Box::new(Expression::Subtract(int(8), int(2))), int(1)),
    );
    assert_eq!(parse_str("x = 8 - 2 - 1"), [answer]);
    let answer = Statement::Let(
        1,
        Ident::from("x"),
        Expression::Multiply(Box::new(Expression::Add(int(3), int(2))), int(5)),
    );
    assert_eq!(parse_str("x = (3 + 2) * 5"), [answer]);
}

#[test]
fn test_numbers() {
    assert_eq!(
        parse_str("z% = 2.34"),
        [Statement::Let(1, Ident::from("z%"), Expression::Float(2.34))]
    );
    // the second half of 1.3.3 is left over
    assert_eq!(
        parse_str("x% = 1.3.3"),
        [Statement::Let(1, Ident::from("x%"), Expression::Float(1.3))]
    );
}

#[test]
fn test_statements_and_separators() {
    assert_eq!(
        listing("x=3/7\ny=x\nz=2.34\n\n\n\n\n\nPRINT x,y\nPRINT z"),
        ["x = (3 / 7)", "y = x", "z = 2.34", "PRINT x, y", "PRINT z"]
    );
}

#[test]
fn test_data_and_read() {
    assert_eq!(
        parse_str("DATA \"banana fish\", 17, 23.0091"),
        [Statement::Data(
            1,
            vec![
                Expression::String("banana fish".into()),
                Expression::Integer(17),
                Expression::Float(23.0091),
            ]
        )]
    );
    assert_eq!(
        parse_str("READ string$, int, num%"),
        [Statement::Read(
            1,
            vec![
                Ident::from("string$"),
                Ident::from("int"),
                Ident::from("num%")
            ]
        )]
    );
}

#[test]
fn test_input_prompt_only_first() {
    let v = listing("INPUT \"Please Input\", y, z\nINPUT x, \"y\", z");
    assert_eq!(v, ["INPUT \"Please Input\", y, z"]);
}

#[test]
fn test_labels_gosub_return() {
    let v = listing("test: y = x + 3\nRETURN\nGOSUB test\nRETURN 7");
    assert_eq!(v, ["test: y = (x + 3)", "RETURN", "GOSUB test"]);
}

#[test]
fn test_for_next_end() {
    let v = parse_str("FOR i = 0 TO 100 STEP 10\nNEXT\nFOR j = 0 TO 100\nNEXT j\nEND");
    assert_eq!(v.len(), 5);
    assert_eq!(v[0].to_string(), "FOR i = 0 TO 100 STEP 10");
    assert_eq!(v[1], Statement::Next(2, None));
    assert_eq!(v[2].to_string(), "FOR j = 0 TO 100 STEP 1");
    assert_eq!(v[3], Statement::Next(4, Some(Ident::from("j"))));
    assert_eq!(v[4], Statement::End(5));
}

#[test]
fn test_if_and_while() {
    let v = listing("IF x < 7 THEN label\nIF x <> 10 then label\nIF x >= 20 THEN label\nIF x <= 2");
    assert_eq!(
        v,
        [
            "IF x < 7 THEN label",
            "IF x <> 10 THEN label",
            "IF x >= 20 THEN label"
        ]
    );
    assert_eq!(
        listing("IF a = 1 THEN b"),
        ["IF a = 1 THEN b"]
    );
    let v = listing("WHILE x < 5 endWhileLabel\nWHILE x <> 3");
    assert_eq!(v, ["WHILE x < 5 endWhileLabel"]);
}

#[test]
fn test_builtins() {
    let v = listing("x = mid$(word$, num1, 2)\ny = random()\nx = 2 + random()");
    assert_eq!(
        v,
        ["x = mid$(word$, num1, 2)", "y = random()", "x = (2 + random())"]
    );
    match &parse_str("y$ = NUM$(2.5)")[0] {
        Statement::Let(_, _, Expression::Function(f, params)) => {
            assert_eq!(*f, Function::Num);
            assert_eq!(params.len(), 1);
        }
        s => panic!("{:?}", s),
    }
}

#[test]
fn test_builtin_with_wrong_shape_does_not_match() {
    assert!(parse_str("x$ = left$(\"abc\")\ny = 1").is_empty());
    assert!(parse_str("x$ = left$(1, 2)").is_empty());
    assert!(parse_str("x = val(7)").is_empty());
    assert!(parse_str("x = random(1)").is_empty());
}

#[test]
fn test_static_kinds() {
    let kind = |s: &str| match &parse_str(s)[0] {
        Statement::Let(_, _, expr) => expr.kind(),
        s => panic!("{:?}", s),
    };
    assert_eq!(kind("x$ = left$(a$, 2) + \"!\""), Kind::String);
    assert_eq!(kind("x = val%(\"1.5\") * 2"), Kind::Float);
    assert_eq!(kind("x = b% + 1"), Kind::Float);
    assert_eq!(kind("x = 1 + b%"), Kind::Integer);
}

#[test]
fn test_syntax_errors() {
    let e = compile("x 3").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 1 (2..3); EXPECTED =");
    let e = compile("x = (1 + 2").unwrap_err();
    assert_eq!(
        e.to_string(),
        "SYNTAX ERROR IN 1 (10..10); EXPECTED RIGHT PARENTHESIS"
    );
    let e = compile("PRINT 1\nPRINT )").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 2 (6..7); EXPECTED EXPRESSION");
}

#[test]
fn test_unknown_statement_ends_program() {
    assert_eq!(listing("PRINT 1\nTHEN\nPRINT 2"), ["PRINT 1"]);
    assert!(parse_str("").is_empty());
    assert!(parse_str("\n\n").is_empty());
}
