use std::collections::HashMap;

use lingo_core::lang::builtins;
use lingo_core::lang::keywords;
use lingo_core::lang::operators;
use lingo_core::lang::punctuation;

#[test]
fn keyword_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        for &spelling in std::iter::once(&info.canonical).chain(info.aliases.iter()) {
            assert_eq!(
                keywords::from_str(spelling),
                Some(info.id),
                "keyword spelling not resolvable: {spelling}"
            );
            if let Some(prev) = seen.insert(spelling, info.id) {
                panic!("duplicate keyword spelling {spelling:?}: {prev:?} and {:?}", info.id);
            }
        }
    }
}

#[test]
fn operator_and_punctuation_spellings_do_not_collide() {
    for op in operators::OPERATORS {
        assert_eq!(
            punctuation::from_str(op.spelling),
            None,
            "operator {:?} shadows punctuation",
            op.id
        );
        if op.is_keyword_spelling {
            assert!(
                keywords::from_str(op.spelling).is_some(),
                "word operator {} is not reserved",
                op.spelling
            );
        }
    }
}

#[test]
fn builtin_names_are_not_keywords() {
    for constant in builtins::CHAR_CONSTANTS.iter().filter(|c| c.is_identifier) {
        assert_eq!(keywords::from_str(constant.name), None, "{} is reserved", constant.name);
    }
    for name in ["cursor", "go", "sendSprite", "sprite", "member", "field", "menu", "menuItem", "sound"] {
        assert_eq!(keywords::from_str(name), None, "{name} is reserved");
    }
}
