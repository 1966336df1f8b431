//! @ai:module:intent Mask pattern tokens shared by every generation tool
//! @ai:module:layer domain
//! @ai:module:public_api CharClass, MaskPosition, parse_mask
//! @ai:module:stateless true

/// @ai:intent Character class denoted by a two-character mask token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Lower,
    Upper,
    Symbol,
    /// Union of digit, lower, upper and symbol
    All,
    /// Every byte value 0x00-0xff
    Binary,
}

impl CharClass {
    pub const VARIANTS: [CharClass; 6] = [
        CharClass::Digit,
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Symbol,
        CharClass::All,
        CharClass::Binary,
    ];

    /// @ai:intent Canonical token for this class
    /// @ai:effects pure
    pub fn token(&self) -> &'static str {
        match self {
            CharClass::Digit => "?d",
            CharClass::Lower => "?l",
            CharClass::Upper => "?u",
            CharClass::Symbol => "?s",
            CharClass::All => "?a",
            CharClass::Binary => "?b",
        }
    }

    /// @ai:intent Resolve the class from the character following '?'
    /// @ai:effects pure
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'd' => Some(CharClass::Digit),
            'l' => Some(CharClass::Lower),
            'u' => Some(CharClass::Upper),
            's' => Some(CharClass::Symbol),
            'a' => Some(CharClass::All),
            'b' => Some(CharClass::Binary),
            _ => None,
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// @ai:intent One generated character position of a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPosition {
    Class(CharClass),
    Literal(char),
}

/// @ai:intent Split a mask into positions
/// @ai:pre mask uses ?d ?l ?u ?s ?a ?b tokens, ?? for a literal '?', anything else literal
/// @ai:post one MaskPosition per generated character
/// @ai:effects pure
pub fn parse_mask(mask: &str) -> Result<Vec<MaskPosition>, String> {
    let mut positions = Vec::new();
    let mut chars = mask.chars();

    while let Some(c) = chars.next() {
        if c != '?' {
            positions.push(MaskPosition::Literal(c));
            continue;
        }

        match chars.next() {
            Some('?') => positions.push(MaskPosition::Literal('?')),
            Some(marker) => match CharClass::from_marker(marker) {
                Some(class) => positions.push(MaskPosition::Class(class)),
                None => return Err(format!("unknown mask token '?{}'", marker)),
            },
            None => return Err("mask ends with a dangling '?'".to_string()),
        }
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_class_tokens() {
        let positions = parse_mask("?u?l?d").unwrap();
        assert_eq!(
            positions,
            vec![
                MaskPosition::Class(CharClass::Upper),
                MaskPosition::Class(CharClass::Lower),
                MaskPosition::Class(CharClass::Digit),
            ]
        );
    }

    #[test]
    fn test_parse_literals_and_escaped_question_mark() {
        let positions = parse_mask("pw???s").unwrap();
        assert_eq!(
            positions,
            vec![
                MaskPosition::Literal('p'),
                MaskPosition::Literal('w'),
                MaskPosition::Literal('?'),
                MaskPosition::Class(CharClass::Symbol),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = parse_mask("?d?x").unwrap_err();
        assert!(err.contains("?x"));
    }

    #[test]
    fn test_parse_all_and_binary_tokens() {
        let positions = parse_mask("?a?b").unwrap();
        assert_eq!(
            positions,
            vec![
                MaskPosition::Class(CharClass::All),
                MaskPosition::Class(CharClass::Binary),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_dangling_marker() {
        assert!(parse_mask("?d?").is_err());
    }

    #[test]
    fn test_tokens_round_trip_through_marker() {
        for class in CharClass::VARIANTS {
            let marker = class.token().chars().nth(1).unwrap();
            assert_eq!(CharClass::from_marker(marker), Some(class));
        }
    }
}
