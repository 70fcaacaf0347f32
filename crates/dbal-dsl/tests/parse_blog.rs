use dbal_core::types::{Constraint, Reference, Relation};
use dbal_dsl::{parse, tokenize, DslError, TokenKind};

/// A blog schema exercising every construct of the notation.
const BLOG_SCHEMA: &str = r#"
Table auth.users [pk: id] {
    id int [pk, increment]
    email string [not null, unique] note: 'login address'
    nickname string [null]
    active bool [default: true]
    Note: 'registered accounts'
}

Table posts {
    id int [pk]
    title string [not null]
    body string
    rating float [default: 0.5]
    author int [ref: > auth.users.id, not null]
    [note: 'ordered by id']
    Note: 'draft'
    Note: "published"
}

Table tags {
    id int [pk]
    label string [unique]
    posts int [ref: <> posts.id]
}
"#;

#[test]
fn parse_full_blog_schema() {
    let ast = parse(BLOG_SCHEMA).expect("blog schema should parse successfully");
    assert_eq!(ast.tables.len(), 3, "expected 3 tables: users, posts, tags");

    // --- auth.users ---
    let users = &ast.tables[0];
    assert_eq!(users.name, "auth.users");
    assert_eq!(users.qualified_name(), (Some("auth"), "users"));
    assert_eq!(users.constraints, ["pk", ":", "id"]);
    assert_eq!(users.columns.len(), 4);
    assert_eq!(users.note.as_deref(), Some("registered accounts"));

    let email = users.column("email").expect("users.email");
    assert_eq!(email.data_type, "string");
    assert_eq!(email.constraints, ["not", "null", "unique"]);
    assert_eq!(email.note.as_deref(), Some("login address"));
    assert!(email.is_not_null());
    assert!(email.is_unique());

    let nickname = users.column("nickname").expect("users.nickname");
    assert!(!nickname.is_not_null());
    assert_eq!(nickname.typed_constraints(), vec![Constraint::Null]);

    let active = users.column("active").expect("users.active");
    assert_eq!(
        active.typed_constraints(),
        vec![Constraint::Default("true".into())]
    );

    // --- posts ---
    let posts = &ast.tables[1];
    assert_eq!(posts.columns.len(), 5);
    assert_eq!(posts.note.as_deref(), Some("published"));
    assert_eq!(posts.constraints, ["note", ":", "ordered by id"]);

    let author = posts.column("author").expect("posts.author");
    assert_eq!(
        author.constraints,
        ["ref", ":", ">", "auth.users.id", "not", "null"]
    );
    assert_eq!(
        author.typed_constraints(),
        vec![
            Constraint::Reference {
                relation: Relation::ManyToOne,
                target: "auth.users.id".into()
            },
            Constraint::NotNull
        ]
    );

    let rating = posts.column("rating").expect("posts.rating");
    assert_eq!(rating.constraints, ["default", ":", "0.5"]);

    // --- tags ---
    let tags = &ast.tables[2];
    assert!(tags.note.is_none());
    assert_eq!(tags.column("label").unwrap().constraints, ["unique"]);
}

#[test]
fn references_are_collected_in_source_order() {
    let ast = parse(BLOG_SCHEMA).unwrap();
    assert_eq!(
        ast.references(),
        vec![
            Reference::new("posts.author", "auth.users.id"),
            Reference::new("tags.posts", "posts.id"),
        ]
    );
}

#[test]
fn table_count_matches_declarations() {
    let source = (0..25)
        .map(|i| format!("Table t{i} {{ id int }}\n"))
        .collect::<String>();
    let ast = parse(&source).unwrap();
    assert_eq!(ast.tables.len(), 25);
    assert_eq!(ast.tables[24].name, "t24");
}

#[test]
fn tokens_cover_the_source_contiguously() {
    let tokens = tokenize(BLOG_SCHEMA).unwrap();
    let mut offset = 0;
    for token in &tokens {
        assert_eq!(token.span.start, offset, "gap before {token:?}");
        offset = token.span.end;
    }
    assert_eq!(offset, BLOG_SCHEMA.len());
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Comment));
}

#[test]
fn unknown_character_is_a_lex_error() {
    let err = parse("Table t { id int }\n@").unwrap_err();
    assert!(err.is_lex_error());
    assert!(err.to_string().contains("'@'"));
}

#[test]
fn unknown_type_names_expected_kind() {
    let err = parse("Table t { id foo }").unwrap_err();
    assert!(err.is_syntax_error());
    let msg = err.to_string();
    assert!(msg.contains("expected keyword"), "{msg}");
    assert!(msg.contains("identifier 'foo'"), "{msg}");
}

#[test]
fn syntax_error_line_and_column() {
    let source = "Table t {\n    id int\n    name foo\n}";
    let err = parse(source).unwrap_err();
    let (line, column) = err.span().line_col(source);
    assert_eq!((line, column), (3, 10));
}

#[test]
fn end_of_input_error_points_at_end() {
    let source = "Table t {\n    id int";
    match parse(source).unwrap_err() {
        DslError::UnexpectedEndOfInput { span, .. } => assert_eq!(span.start, source.len()),
        other => panic!("expected end of input, got {other:?}"),
    }
}

#[test]
fn first_error_aborts_the_parse() {
    // Both tables are malformed; only the first is reported.
    let err = parse("Table a { id foo }\nTable b { id }").unwrap_err();
    assert!(err.to_string().contains("'foo'"));
}

#[test]
fn ast_serializes_to_json() {
    let ast = parse("Table t { id int [pk] note: 'x' }").unwrap();
    let json = serde_json::to_value(&ast).unwrap();
    assert_eq!(json["tables"][0]["name"], "t");
    assert_eq!(json["tables"][0]["columns"][0]["constraints"][0], "pk");
    assert_eq!(json["tables"][0]["columns"][0]["note"], "x");
}
