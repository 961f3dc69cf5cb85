//! Bundles holding values of different types, and element types whose
//! operators do not follow the usual algebra.

use dry_comparisons::{all_of, any_of, none_of, reflect};

/// A lexer token, comparable with both integers and words.
#[derive(Debug)]
enum Token {
    Num(i32),
    Word(&'static str),
}

impl PartialEq<Token> for i32 {
    fn eq(&self, other: &Token) -> bool {
        matches!(other, Token::Num(n) if n == self)
    }
}

impl PartialEq<Token> for &str {
    fn eq(&self, other: &Token) -> bool {
        matches!(other, Token::Word(w) if w == self)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Token) -> bool {
        match self {
            Token::Num(n) => *n == *other,
            Token::Word(w) => *w == *other,
        }
    }
}

reflect!(Token);

/// `!=` is always true and `==` compares the payload.
#[derive(Debug, Clone, Copy)]
struct Restless(i32);

#[allow(clippy::partialeq_ne_impl)]
impl PartialEq<i32> for Restless {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
    fn ne(&self, _: &i32) -> bool {
        true
    }
}

#[test]
fn test_integer_and_text_against_one_operand() {
    let keywords = any_of!(7, "let");
    assert!(keywords == Token::Num(7));
    assert!(keywords == Token::Word("let"));
    assert!(!(keywords == Token::Num(8)));
    assert!(keywords != Token::Word("fn"));

    assert!(none_of!(7, "let") == Token::Word("fn"));
    assert!(!(all_of!(7, "let") == Token::Num(7)));
}

#[test]
fn test_operand_first_with_custom_type() {
    assert!(Token::Word("let") == any_of!(7, "let"));
    assert!(Token::Num(1) == none_of!(7, "let"));
    assert!(Token::Num(1) != all_of!(1, "one"));
}

#[test]
fn test_ne_follows_element_ne() {
    let b = any_of!(Restless(1), Restless(2));
    assert!(b == 1);
    // every element claims `!=`, so `any_of != 1` holds as well
    assert!(b != 1);

    let n = none_of!(Restless(1), Restless(2));
    assert!(!(n == 1));
    assert!(!(n != 1));

    let l = all_of!(Restless(1), Restless(1));
    assert!(l == 1);
    assert!(l != 1);
}
