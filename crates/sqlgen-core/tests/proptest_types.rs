use proptest::prelude::*;
use sqlgen_core::types::{is_keyword, Ident, JoinCondition, SqlName};

proptest! {
    #[test]
    fn ident_display_roundtrip(s in "[A-Za-z_][A-Za-z0-9_]{0,30}") {
        prop_assume!(!is_keyword(&s));
        let ident = Ident::new(&s).unwrap();
        let back = Ident::new(ident.to_string()).unwrap();
        prop_assert_eq!(ident, back);
    }

    #[test]
    fn ident_rejects_leading_digit(s in "[0-9][A-Za-z0-9_]{0,30}") {
        prop_assert!(Ident::new(&s).is_err());
    }

    #[test]
    fn sql_name_accepts_anything_but_placeholder(s in "\\PC{0,40}") {
        prop_assert_eq!(SqlName::new(s.as_str()).is_ok(), s != "{}");
    }

    #[test]
    fn sql_name_serde_roundtrip(s in "\\PC{0,40}") {
        prop_assume!(s != "{}");
        let name = SqlName::new(s).unwrap();
        let json = serde_json::to_string(&name).unwrap();
        let back: SqlName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(name, back);
    }

    #[test]
    fn join_condition_rejects_backticks(prefix in "[a-z .=]{0,10}", suffix in "[a-z .=]{0,10}") {
        let text = format!("{prefix}`{suffix}");
        prop_assert!(JoinCondition::new(text).is_err());
    }
}
