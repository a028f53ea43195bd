use sqlgen_dsl::{parse, print};

/// Helper: parse source, print it, parse again, and compare the two ASTs.
/// Printing the re-parsed file must also reproduce the first printout.
fn assert_round_trip(source: &str) {
    let file1 = parse("first", source).expect("first parse should succeed");
    let printed = print(&file1);
    let file2 = parse("second", &printed).unwrap_or_else(|e| {
        panic!("second parse (after printing) failed: {e}\n\nPrinted DSL:\n{printed}")
    });

    assert_eq!(file1, file2, "AST changed after round trip:\n{printed}");
    assert_eq!(print(&file2), printed, "printing is not idempotent");
}

#[test]
fn round_trip_placeholders() {
    assert_round_trip("generate");
    assert_round_trip("generate generate generate");
    assert_round_trip("generate {} () from {}");
}

#[test]
fn round_trip_options() {
    assert_round_trip("generate Account (plural Accounts, prefix acc zeta Z)");
}

#[test]
fn round_trip_quoting() {
    assert_round_trip(r#"generate A from "schema\"account""#);
    assert_round_trip(r#"generate A from "back\\slash""#);
    assert_round_trip(r#"generate A from "schema.account""#);
    assert_round_trip(r#"generate A from "with space"."and \"quote\"""#);
    assert_round_trip(r#"generate A from "" "#);
    assert_round_trip(r#"generate A from public."{}""#);
}

#[test]
fn round_trip_joins() {
    assert_round_trip(
        "generate UserJoinAccount
            from \"user\" (User) as u
            join \"account_user\" (AccountUser) as au on u.id = au.user_id
            full join \"account\" (Account) as a on a.id = au.account_id
            left join region as r_ on r_.id = a.region_id and r_.active = 1
            right join x.y on x.y.id = a.y_id
            cross join calendar (Day) as d;",
    );
}

#[test]
fn round_trip_conditions_needing_backticks() {
    assert_round_trip("generate X from a join b on `a.id = b.id;` join c on c.x = 1");
    assert_round_trip("generate X from a join b on ` a.id = b.id `");
    assert_round_trip("generate X from a join b on `a.x = full` join c on c.y = 2");
    assert_round_trip("generate X from a join b on `a.s = \"bad\\n\"`");
    assert_round_trip("generate X from a join b on `a.id = b.id // note`");
    assert_round_trip(
        "generate X from a left join b on `/*` left join c on */ 1\ngenerate Y from a left join b on `a /* b` left join c on *",
    );
}

#[test]
fn round_trip_comments_are_dropped_outside_conditions() {
    let source = "// header\ngenerate /* inline */ Account from account; // trailing";
    let file = parse("test", source).unwrap();
    assert_eq!(print(&file), "generate Account from \"account\";\n");
    assert_round_trip(source);
}

#[test]
fn round_trip_multiline_condition() {
    assert_round_trip(
        "generate X\n  from a\n  join b on a.id = b.a_id\n     and b.deleted_at is null\n  join c on c.id = b.c_id",
    );
}
