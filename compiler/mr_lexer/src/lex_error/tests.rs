use pretty_assertions::assert_eq;

use super::*;

#[test]
fn messages() {
    let position = Position::new(4, 2);
    assert_eq!(
        LexError::IllegalCharacter {
            byte: b'@',
            position
        }
        .to_string(),
        "illegal character `@`"
    );
    assert_eq!(
        LexError::IllegalCharacter { byte: 0, position }.to_string(),
        "illegal character `\\x00`"
    );
    assert_eq!(
        LexError::MissingTerminator {
            expected: b'"',
            position
        }
        .to_string(),
        "missing `\"`"
    );
    assert_eq!(
        LexError::MissingTerminator {
            expected: b'}',
            position
        }
        .to_string(),
        "missing `}`"
    );
    assert_eq!(
        LexError::NestingTooDeep { limit: 3, position }.to_string(),
        "interpolated strings nested deeper than 3 levels"
    );
}

#[test]
fn out_of_memory_wraps_arena_error() {
    let err = LexError::from(ArenaError::OutOfMemory { requested: 12 });
    assert_eq!(err, LexError::OutOfMemory(ArenaError::OutOfMemory { requested: 12 }));
    assert_eq!(err.to_string(), ArenaError::OutOfMemory { requested: 12 }.to_string());
    assert_eq!(err.position(), None);
}

#[test]
fn position_of_located_errors() {
    let position = Position::new(9, 3);
    assert_eq!(
        LexError::MissingTerminator {
            expected: b'#',
            position
        }
        .position(),
        Some(position)
    );
}
