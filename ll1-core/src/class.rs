//! Classification tags
//!
//! A tag stands in for a set of characters wherever a single literal could
//! be expected. `CHARACTER` and `END` are the only tags that look at the end
//! of input; every other tag is false there.

/// Character class tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// Any character, i.e. not at end
    Character,
    /// End of input
    End,
    /// `0-9`
    Digit,
    /// Hexadecimal digit
    XDigit,
    /// Whitespace, including newlines
    Space,
    /// Space or horizontal tab
    Blank,
    Alpha,
    Alnum,
    Upper,
    Lower,
    /// ASCII punctuation
    Punct,
    /// Control character
    Cntrl,
    /// Visible character
    Graph,
    /// Visible character or space
    Print,
}

pub const CHARACTER: Class = Class::Character;
pub const END: Class = Class::End;
pub const DIGIT: Class = Class::Digit;
pub const XDIGIT: Class = Class::XDigit;
pub const SPACE: Class = Class::Space;
pub const BLANK: Class = Class::Blank;
pub const ALPHA: Class = Class::Alpha;
pub const ALNUM: Class = Class::Alnum;
pub const UPPER: Class = Class::Upper;
pub const LOWER: Class = Class::Lower;
pub const PUNCT: Class = Class::Punct;
pub const CNTRL: Class = Class::Cntrl;
pub const GRAPH: Class = Class::Graph;
pub const PRINT: Class = Class::Print;

impl Class {
    /// Whether a Unicode scalar belongs to this class
    ///
    /// `Character` accepts every scalar, `End` none.
    pub fn contains(self, c: char) -> bool {
        match self {
            Class::Character => true,
            Class::End => false,
            Class::Digit => c.is_ascii_digit(),
            Class::XDigit => c.is_ascii_hexdigit(),
            Class::Space => c.is_whitespace(),
            Class::Blank => c == ' ' || c == '\t',
            Class::Alpha => c.is_alphabetic(),
            Class::Alnum => c.is_alphanumeric(),
            Class::Upper => c.is_uppercase(),
            Class::Lower => c.is_lowercase(),
            Class::Punct => c.is_ascii_punctuation(),
            Class::Cntrl => c.is_control(),
            Class::Graph => !c.is_control() && !c.is_whitespace(),
            Class::Print => c == ' ' || (!c.is_control() && !c.is_whitespace()),
        }
    }
}
