//! 测试辅助工具
//!
//! Dummy sources and a width-generic integer reader for end-to-end tests.

#![allow(dead_code)]

use ll1::{
    expect, ignore_if, ignore_while, is, is_not, read, satisfies, CharUnit, InputSource,
    Position, UnexpectedToken, DIGIT, END, SPACE,
};

/// Source that yields the same token forever; `None` is a source at end
pub struct ConstSource<C> {
    tok: Option<C>,
}

impl<C: CharUnit> ConstSource<C> {
    pub fn new(tok: C) -> Self {
        Self { tok: Some(tok) }
    }

    pub fn end() -> Self {
        Self { tok: None }
    }
}

impl<C: CharUnit> InputSource for ConstSource<C> {
    type Char = C;

    fn look_ahead(&mut self) -> Option<C> {
        self.tok
    }

    fn read(&mut self) -> Option<C> {
        self.tok
    }
}

pub fn narrow(s: &str) -> Vec<u8> {
    s.bytes().collect()
}

pub fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

pub fn utf32(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

pub fn wide(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn digit_value<C: CharUnit>(c: C) -> i64 {
    c.to_char().and_then(|c| c.to_digit(10)).map_or(0, i64::from)
}

/// `'-'? DIGIT+` in any width, no overflow checks
pub fn read_integer<S>(source: &mut S, pos: &mut Position) -> Result<i64, UnexpectedToken>
where
    S: InputSource,
{
    let minus = satisfies(|c: S::Char| c.to_char() == Some('-'));
    let has_sign = ignore_if(source, pos, minus);

    let mut val = expect(source, pos, DIGIT)?.map_or(0, digit_value);
    while is(source, DIGIT) {
        val = val * 10 + read(source, pos).map_or(0, digit_value);
    }

    Ok(if has_sign { -val } else { val })
}

/// Integers separated by whitespace, until end of input
pub fn read_integers<S>(source: &mut S, pos: &mut Position) -> Result<Vec<i64>, UnexpectedToken>
where
    S: InputSource,
{
    let mut values = Vec::new();
    while is_not(source, END) {
        values.push(read_integer(source, pos)?);
        ignore_while(source, pos, SPACE);
    }
    Ok(values)
}
