//! Property tests for tokenizing and alias expansion

use proptest::prelude::*;
use spot_logic::prefix::{PREFIX_NAME, PREFIX_RATING, PREFIX_REMOVE_TAG, PREFIX_TAG};
use spot_logic::{tokenize, CommandDispatcher};
use spot_model::{Alias, AliasTable};

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,8}"
}

proptest! {
    #[test]
    fn tokenized_values_are_recovered(
        name in proptest::collection::vec(word(), 1..4),
        tags in proptest::collection::vec(word(), 0..4),
        rating in 1u8..=5,
    ) {
        let name = name.join(" ");
        let mut args = format!("n/{name} r/{rating}");
        for tag in &tags {
            args.push_str(&format!(" t/{tag}"));
        }

        let map = tokenize(&args, &[PREFIX_NAME, PREFIX_RATING, PREFIX_TAG]);
        let rating_text = rating.to_string();
        prop_assert_eq!(map.preamble(), "");
        prop_assert_eq!(map.value(PREFIX_NAME), Some(name.as_str()));
        prop_assert_eq!(map.value(PREFIX_RATING), Some(rating_text.as_str()));
        prop_assert_eq!(map.all_values(PREFIX_TAG), tags.as_slice());
    }

    #[test]
    fn remove_tag_never_read_as_tag(
        added in proptest::collection::vec(word(), 0..4),
        removed in proptest::collection::vec(word(), 0..4),
    ) {
        let mut args = String::new();
        for (i, tag) in added.iter().enumerate() {
            args.push_str(&format!(" t/{tag}"));
            if let Some(other) = removed.get(i) {
                args.push_str(&format!(" rt/{other}"));
            }
        }
        for other in removed.iter().skip(added.len()) {
            args.push_str(&format!(" rt/{other}"));
        }

        let map = tokenize(&args, &[PREFIX_TAG, PREFIX_REMOVE_TAG]);
        prop_assert_eq!(map.all_values(PREFIX_TAG), added.as_slice());
        prop_assert_eq!(map.all_values(PREFIX_REMOVE_TAG), removed.as_slice());
    }

    #[test]
    fn alias_dispatches_like_expansion(
        token in "[a-z]{3,6}",
        favourites in any::<bool>(),
        sort in any::<bool>(),
    ) {
        prop_assume!(!spot_model::is_command_word(&token));

        let mut tail = String::new();
        if favourites {
            tail.push_str(" -f");
        }
        if sort {
            tail.push_str(" -s");
        }

        let mut aliases = AliasTable::new();
        aliases.upsert(Alias::new(&token, "list").unwrap());
        let dispatcher = CommandDispatcher::with_defaults();

        let via_alias = dispatcher.parse(&format!("{token}{tail}"), &aliases).unwrap();
        let typed = dispatcher.parse(&format!("list{tail}"), &aliases).unwrap();
        prop_assert_eq!(via_alias, typed);
    }

    #[test]
    fn unknown_words_never_panic(input in "\\PC{0,40}") {
        let dispatcher = CommandDispatcher::with_defaults();
        let _ = dispatcher.parse(&input, &AliasTable::new());
    }
}
