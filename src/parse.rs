use crate::tree::Formula;
use crate::{tokenize, Error, ParseError, ParseErrorKind, Token};
use std::iter::Peekable;
use std::str::FromStr;

/// How deeply a parsed formula may nest
///
/// This bounds both the nesting of negations and parenthesized groups while parsing and the height
/// of the resulting tree, so parsing and every walk over a parsed [`Formula`] stay within the
/// stack. Deeper input fails with [`ParseErrorKind::TooDeep`].
pub const MAX_DEPTH: usize = 256;

/// A subformula and the height of its tree, an atom being height zero
type Parsed = (Formula, usize);

/// A token stream that knows how many tokens it has consumed
struct Cursor<I: Iterator> {
    tokens: Peekable<I>,
    position: usize,
    depth: usize,
}

impl<I> Cursor<I>
where
    I: Iterator<Item = Token>,
{
    fn new(tokens: I) -> Self {
        Cursor {
            tokens: tokens.peekable(),
            position: 0,
            depth: 0,
        }
    }

    fn peek(&mut self) -> Option<Token> {
        self.tokens.peek().copied()
    }

    fn bump(&mut self) {
        if self.tokens.next().is_some() {
            self.position += 1;
        }
    }

    /// Consume the next token if it is `token`
    fn eat(&mut self, token: Token) -> bool {
        let matched = self.peek() == Some(token);
        if matched {
            self.bump();
        }
        matched
    }

    /// Consume an opening token and enter one nesting level
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(self.error(ParseErrorKind::TooDeep));
        }
        self.depth += 1;
        self.bump();
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.position)
    }
}

/// The height of a node over children of height `child`, built from the token at `at`
fn grow(child: usize, at: usize) -> Result<usize, ParseError> {
    if child < MAX_DEPTH {
        Ok(child + 1)
    } else {
        Err(ParseError::new(ParseErrorKind::TooDeep, at))
    }
}

/// Parse `operand (op operand)*`, folding repeated operators to the left
fn next_left_fold<I, N, B>(
    tokens: &mut Cursor<I>,
    op: Token,
    next_operand: N,
    build: B,
) -> Result<Parsed, ParseError>
where
    I: Iterator<Item = Token>,
    N: Fn(&mut Cursor<I>) -> Result<Parsed, ParseError>,
    B: Fn(Formula, Formula) -> Formula,
{
    let (mut node, mut height) = next_operand(tokens)?;
    loop {
        let at = tokens.position;
        if !tokens.eat(op) {
            break;
        }
        let (right, right_height) = next_operand(tokens)?;
        height = grow(height.max(right_height), at)?;
        node = build(node, right);
    }
    Ok((node, height))
}

fn next_iff<I>(tokens: &mut Cursor<I>) -> Result<Parsed, ParseError>
where
    I: Iterator<Item = Token>,
{
    next_left_fold(tokens, Token::Iff, next_imp::<I>, |left, right| {
        Formula::iff(left, right)
    })
}

// NOTE implication folds left too, so P → Q → R is (P → Q) → R
fn next_imp<I>(tokens: &mut Cursor<I>) -> Result<Parsed, ParseError>
where
    I: Iterator<Item = Token>,
{
    next_left_fold(tokens, Token::Implies, next_or::<I>, |left, right| {
        Formula::imp(left, right)
    })
}

fn next_or<I>(tokens: &mut Cursor<I>) -> Result<Parsed, ParseError>
where
    I: Iterator<Item = Token>,
{
    next_left_fold(tokens, Token::Or, next_and::<I>, |left, right| {
        Formula::or(left, right)
    })
}

fn next_and<I>(tokens: &mut Cursor<I>) -> Result<Parsed, ParseError>
where
    I: Iterator<Item = Token>,
{
    next_left_fold(tokens, Token::And, next_not::<I>, |left, right| {
        Formula::and(left, right)
    })
}

fn next_not<I>(tokens: &mut Cursor<I>) -> Result<Parsed, ParseError>
where
    I: Iterator<Item = Token>,
{
    if tokens.peek() == Some(Token::Not) {
        let at = tokens.position;
        tokens.descend()?;
        let (inner, height) = next_not(tokens)?;
        tokens.ascend();
        Ok((Formula::not(inner), grow(height, at)?))
    } else {
        next_atom(tokens)
    }
}

fn next_atom<I>(tokens: &mut Cursor<I>) -> Result<Parsed, ParseError>
where
    I: Iterator<Item = Token>,
{
    match tokens.peek() {
        Some(Token::Atom(atom)) => {
            tokens.bump();
            Ok((Formula::Var(atom), 0))
        }
        Some(Token::LParen) => {
            tokens.descend()?;
            let inner = next_iff(tokens)?;
            match tokens.peek() {
                Some(Token::RParen) => {
                    tokens.bump();
                    tokens.ascend();
                    Ok(inner)
                }
                found => Err(tokens.error(ParseErrorKind::ExpectedClosingParen { found })),
            }
        }
        Some(token) => Err(tokens.error(ParseErrorKind::UnexpectedToken(token))),
        None => Err(tokens.error(ParseErrorKind::UnexpectedEnd)),
    }
}

/// Parse a tokenized formula
///
/// Every token must be used: a complete formula followed by more tokens is an error. Formulas
/// nesting deeper than [`MAX_DEPTH`] are rejected.
///
/// # Example
/// ```
/// use cpc_translate::{parse_tokens, Token};
/// use cpc_translate::tree::{Atom, Formula};
///
/// let formula = parse_tokens([Token::Not, Token::Atom(Atom::P)]).unwrap();
/// assert_eq!(formula, Formula::not(Atom::P));
/// ```
pub fn parse_tokens<T>(tokens: T) -> Result<Formula, ParseError>
where
    T: IntoIterator<Item = Token>,
{
    let mut tokens = Cursor::new(tokens.into_iter());
    let (formula, _) = next_iff(&mut tokens)?;
    match tokens.peek() {
        None => Ok(formula),
        Some(extra) => Err(tokens.error(ParseErrorKind::TrailingTokens(extra))),
    }
}

/// Parse a formula string
///
/// This tokenizes with the default glyphs in [`crate::CPC_TOKENS`] and then parses the tokens.
/// From loosest to tightest the connectives bind `↔`, `→`, `∨`, `∧`, `¬`. All binary connectives
/// associate to the left.
///
/// # Example
/// ```
/// use cpc_translate::parse;
/// use cpc_translate::tree::{Atom, Formula};
///
/// let formula = parse("(P ^ Q) -> R").unwrap();
/// assert_eq!(formula, Formula::imp(Formula::and(Atom::P, Atom::Q), Atom::R));
/// ```
pub fn parse(formula: &str) -> Result<Formula, Error> {
    let tokens = tokenize(formula)?;
    let tree = parse_tokens(tokens).map_err(|err| {
        log::debug!("rejected {:?}: {}", formula, err);
        err
    })?;
    log::trace!("parsed {:?} as {}", formula, tree);
    Ok(tree)
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(inp: &str) -> Result<Self, Self::Err> {
        parse(inp)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_tokens, MAX_DEPTH};
    use crate::tree::{Atom, Formula};
    use crate::{Error, ParseError, ParseErrorKind, Token};

    fn parse_err(inp: &str) -> ParseError {
        match parse(inp) {
            Err(Error::Parse(err)) => err,
            other => panic!("expected a parse error for {:?}, got {:?}", inp, other),
        }
    }

    #[test]
    fn precedence() {
        assert_eq!(
            parse("P∧Q∨R").unwrap(),
            Formula::or(Formula::and(Atom::P, Atom::Q), Atom::R)
        );
        assert_eq!(
            parse("P ∨ Q ∧ R").unwrap(),
            Formula::or(Atom::P, Formula::and(Atom::Q, Atom::R))
        );
        assert_eq!(
            parse("¬P∧Q").unwrap(),
            Formula::and(Formula::not(Atom::P), Atom::Q)
        );
        assert_eq!(
            parse("P → Q ∨ R").unwrap(),
            Formula::imp(Atom::P, Formula::or(Atom::Q, Atom::R))
        );
        assert_eq!(
            parse("P ↔ Q → R").unwrap(),
            Formula::iff(Atom::P, Formula::imp(Atom::Q, Atom::R))
        );
    }

    #[test]
    fn chains_fold_left() {
        assert_eq!(
            parse("P->Q->R").unwrap(),
            Formula::imp(Formula::imp(Atom::P, Atom::Q), Atom::R)
        );
        assert_eq!(
            parse("P<->Q<->R").unwrap(),
            Formula::iff(Formula::iff(Atom::P, Atom::Q), Atom::R)
        );
        assert_eq!(
            parse("P & Q & R").unwrap(),
            Formula::and(Formula::and(Atom::P, Atom::Q), Atom::R)
        );
        assert_eq!(
            parse("P → (Q → R)").unwrap(),
            Formula::imp(Atom::P, Formula::imp(Atom::Q, Atom::R))
        );
    }

    #[test]
    fn negation_chains() {
        assert_eq!(
            parse("¬¬P").unwrap(),
            Formula::not(Formula::not(Atom::P))
        );
        assert_eq!(
            parse("~!¬(P | Q)").unwrap(),
            Formula::not(Formula::not(Formula::not(Formula::or(Atom::P, Atom::Q))))
        );
    }

    #[test]
    fn malformed_input() {
        assert_eq!(
            parse_err(""),
            ParseError::new(ParseErrorKind::UnexpectedEnd, 0)
        );
        assert_eq!(
            parse_err("P)"),
            ParseError::new(ParseErrorKind::TrailingTokens(Token::RParen), 1)
        );
        assert_eq!(
            parse_err("P Q"),
            ParseError::new(ParseErrorKind::TrailingTokens(Token::Atom(Atom::Q)), 1)
        );
        assert_eq!(
            parse_err("(P"),
            ParseError::new(ParseErrorKind::ExpectedClosingParen { found: None }, 2)
        );
        assert_eq!(
            parse_err("(P ∧ Q R)"),
            ParseError::new(
                ParseErrorKind::ExpectedClosingParen {
                    found: Some(Token::Atom(Atom::R))
                },
                4
            )
        );
        assert_eq!(
            parse_err("P ∧"),
            ParseError::new(ParseErrorKind::UnexpectedEnd, 2)
        );
        assert_eq!(
            parse_err("∧P"),
            ParseError::new(ParseErrorKind::UnexpectedToken(Token::And), 0)
        );
        assert_eq!(
            parse_err("()"),
            ParseError::new(ParseErrorKind::UnexpectedToken(Token::RParen), 1)
        );
        assert_eq!(
            parse_err("¬"),
            ParseError::new(ParseErrorKind::UnexpectedEnd, 1)
        );
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}P", "~".repeat(20_000));
        assert_eq!(
            parse_err(&deep),
            ParseError::new(ParseErrorKind::TooDeep, MAX_DEPTH)
        );

        let deep = format!("{}P{}", "(".repeat(20_000), ")".repeat(20_000));
        assert_eq!(
            parse_err(&deep),
            ParseError::new(ParseErrorKind::TooDeep, MAX_DEPTH)
        );

        // groups and negations share one budget
        let mixed = format!("{}P{}", "~(".repeat(200), ")".repeat(200));
        assert_eq!(
            parse_err(&mixed),
            ParseError::new(ParseErrorKind::TooDeep, MAX_DEPTH)
        );
    }

    #[test]
    fn long_chains_are_bounded() {
        // the n-th `&` of a chain is token 2n - 1
        let long = vec!["P"; MAX_DEPTH + 2].join(" & ");
        assert_eq!(
            parse_err(&long),
            ParseError::new(ParseErrorKind::TooDeep, 2 * MAX_DEPTH + 1)
        );

        let long = vec!["Q"; 20_000].join(" -> ");
        assert_eq!(
            parse_err(&long),
            ParseError::new(ParseErrorKind::TooDeep, 2 * MAX_DEPTH + 1)
        );
    }

    #[test]
    fn nesting_at_the_limit_parses() {
        let formula = parse(&format!("{}P", "~".repeat(MAX_DEPTH))).unwrap();
        assert_eq!(formula.to_string().chars().filter(|&c| c == '¬').count(), MAX_DEPTH);

        let group = format!("{}P{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&group).unwrap(), Formula::var(Atom::P));

        // closing a group frees its level
        assert!(parse(&format!("{0} & {0}", group)).is_ok());

        let long = vec!["R"; MAX_DEPTH + 1].join(" | ");
        assert!(parse(&long).is_ok());
    }

    #[test]
    fn lex_errors_pass_through() {
        assert!(matches!(parse("P ∧ x"), Err(Error::Lex(_))));
    }

    #[test]
    fn from_tokens() {
        let formula = parse_tokens([
            Token::LParen,
            Token::Atom(Atom::R),
            Token::RParen,
            Token::Iff,
            Token::Atom(Atom::R),
        ]);
        assert_eq!(formula, Ok(Formula::iff(Atom::R, Atom::R)));
    }

    #[test]
    fn display_reparses_to_same_tree() {
        for inp in ["P->Q->R", "P->(Q->R)", "¬(P∧Q)∨¬¬R", "P<->Q<->R", "(P v Q) & R"] {
            let formula = parse(inp).unwrap();
            assert_eq!(formula.to_string().parse::<Formula>().unwrap(), formula, "{}", inp);
        }
    }
}
