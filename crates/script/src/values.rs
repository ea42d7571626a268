//! Parsers that decode token text into typed values.

use crate::ValueError;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair, separated_pair, terminated};
use pagescript_types::Point;

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                // `opt(digit1)` matches the same input as `digit0`, but
                // nom 8.0.0's `digit0` drops its span under `recognize`.
                recognize((digit1, opt((char('.'), opt(digit1))))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>()).parse(input)
}

fn ws<'a, O>(
    inner: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>> {
    delimited(space0, inner, space0)
}

/// Run a parser over the whole (trimmed) token, or fail.
fn run<'a, O>(
    parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
    input: &'a str,
) -> Option<O> {
    all_consuming(parser).parse(input.trim()).ok().map(|(_, v)| v)
}

/// Parse a single float token.
pub fn parse_number(token: &str) -> Result<f32, ValueError> {
    run(parse_f32, token).ok_or_else(|| ValueError::Number(token.to_string()))
}

/// Parse a single non-negative integer token.
pub fn parse_count(token: &str) -> Result<usize, ValueError> {
    run(parse_usize, token).ok_or_else(|| ValueError::Number(token.to_string()))
}

/// Parse an `x,y` coordinate pair.
pub fn parse_point(token: &str) -> Result<Point, ValueError> {
    run(
        separated_pair(ws(parse_f32), char(','), ws(parse_f32)),
        token,
    )
    .map(|(x, y)| Point::new(x, y))
    .ok_or_else(|| ValueError::Point(token.to_string()))
}

/// Parse a `col,row` cell reference.
pub fn parse_cell(token: &str) -> Result<(usize, usize), ValueError> {
    run(
        separated_pair(ws(parse_usize), char(','), ws(parse_usize)),
        token,
    )
    .ok_or_else(|| ValueError::Cell(token.to_string()))
}

/// Parse a comma-separated float list like `10,10,20,20,50*`.
///
/// The trailing `*` is cosmetic shorthand for "repeat last" and is
/// ignored; the repeat-last behavior applies whenever a target length
/// is given: a shorter list is padded with its last value, a longer one
/// is truncated.
pub fn parse_list(token: &str, target: Option<usize>) -> Result<Vec<f32>, ValueError> {
    let mut vals = run(
        terminated(separated_list1(char(','), ws(parse_f32)), opt(char('*'))),
        token,
    )
    .ok_or_else(|| ValueError::Number(token.to_string()))?;

    if vals.is_empty() {
        return Err(ValueError::EmptyList(token.to_string()));
    }
    if let Some(n) = target {
        let last = *vals.last().expect("list is non-empty");
        vals.resize(n, last);
    }
    Ok(vals)
}
