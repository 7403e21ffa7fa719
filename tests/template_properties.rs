use proptest::prelude::*;

use shackles::action::{Action, CallArgs};

// Templates made only of characters that can never form a placeholder.
fn literal_template() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./=:-]{0,16}"
}

fn args_strategy() -> impl Strategy<Value = CallArgs> {
    proptest::collection::btree_map("[a-z]{1,6}", "[ -~]{0,12}", 0..6)
}

proptest! {
    #[test]
    fn literal_templates_ignore_args(
        templates in proptest::collection::vec(literal_template(), 0..6),
        args in args_strategy(),
    ) {
        let action = Action::new("prog", templates.clone(), None).unwrap();

        let with_args = action.resolve(&args).unwrap();
        let without_args = action.resolve(&CallArgs::new()).unwrap();

        prop_assert_eq!(&with_args, &without_args);
        prop_assert_eq!(&with_args[0], "prog");
        prop_assert_eq!(&with_args[1..], &templates[..]);
    }

    #[test]
    fn placeholder_takes_value_verbatim(
        key in "[a-z]{1,6}",
        value in "[ -~]{0,24}",
        prefix in literal_template(),
    ) {
        let action = Action::new(
            "prog",
            vec![format!("{prefix}%({key})s")],
            None,
        )
        .unwrap();

        let mut args = CallArgs::new();
        args.insert(key, value.clone());

        let resolved = action.resolve(&args).unwrap();
        prop_assert_eq!(resolved, vec!["prog".to_string(), format!("{prefix}{value}")]);
    }
}
