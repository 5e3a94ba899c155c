//! Whitespace separated signed integers
//!
//! Grammar, one character of lookahead:
//!
//! ```text
//! integers := (integer SPACE*)* END
//! integer  := '-'? DIGIT+
//! ```

use ll1_core::{
    expect, ignore_if, ignore_while, is, is_not, read, InputSource, Position, UnexpectedToken,
    DIGIT, END, SPACE,
};
use tracing::trace;

use crate::error::ScanError;

fn digit_value(d: u8) -> i64 {
    i64::from(d - b'0')
}

/// Read one integer, leaving the source right after its last digit
pub fn read_integer<S>(source: &mut S, pos: &mut Position) -> Result<i64, ScanError>
where
    S: InputSource<Char = u8> + ?Sized,
{
    let start = *pos;
    let negative = ignore_if(source, pos, b'-');

    // DIGIT never matches at end
    let Some(first) = expect(source, pos, DIGIT)? else {
        return Err(UnexpectedToken.into());
    };
    let mut value = if negative {
        -digit_value(first)
    } else {
        digit_value(first)
    };

    while is(source, DIGIT) {
        let Some(d) = read(source, pos) else { break };
        let d = digit_value(d);
        value = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) })
            .ok_or(ScanError::Overflow(start))?;
    }

    trace!(value, row = start.row, column = start.column, "integer");
    Ok(value)
}

/// Read integers until end of input
pub fn read_integers<S>(source: &mut S, pos: &mut Position) -> Result<Vec<i64>, ScanError>
where
    S: InputSource<Char = u8> + ?Sized,
{
    let mut values = Vec::new();
    while is_not(source, END) {
        values.push(read_integer(source, pos)?);
        ignore_while(source, pos, SPACE);
    }
    Ok(values)
}
