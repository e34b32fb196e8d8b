//! Binary and unary operators.

use crate::TokenKind;

/// Binary operators stored in [`BinaryOpRecord`](super::BinaryOpRecord).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Quot,
    Pow,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // Comparison
    Eq,
    NotEq,
    ExEq,
    ExNotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,

    // Logical
    And,
    Or,

    // Membership and identity
    In,
    Is,
}

impl BinaryOp {
    /// Operator spelled by a token, if it is a binary operator.
    ///
    /// `&&` and `||` are lexed as the `and`/`or` keywords, so both
    /// spellings map to the same operator.
    pub const fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        Some(match kind {
            TokenKind::Add => BinaryOp::Add,
            TokenKind::Sub => BinaryOp::Sub,
            TokenKind::Mul => BinaryOp::Mul,
            TokenKind::Div => BinaryOp::Div,
            TokenKind::Mod => BinaryOp::Mod,
            TokenKind::Quot => BinaryOp::Quot,
            TokenKind::Pow => BinaryOp::Pow,
            TokenKind::BitAnd => BinaryOp::BitAnd,
            TokenKind::BitOr => BinaryOp::BitOr,
            TokenKind::BitXor => BinaryOp::BitXor,
            TokenKind::Shl => BinaryOp::Shl,
            TokenKind::Shr => BinaryOp::Shr,
            TokenKind::Eq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::ExEq => BinaryOp::ExEq,
            TokenKind::ExNotEq => BinaryOp::ExNotEq,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::LessEq => BinaryOp::LessEq,
            TokenKind::GreaterEq => BinaryOp::GreaterEq,
            TokenKind::And => BinaryOp::And,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::In => BinaryOp::In,
            TokenKind::Is => BinaryOp::Is,
            _ => return None,
        })
    }

    /// Operator applied by a compound assignment token (`+=` gives `Add`).
    pub const fn from_compound_assign(kind: TokenKind) -> Option<BinaryOp> {
        Some(match kind {
            TokenKind::AddAssign => BinaryOp::Add,
            TokenKind::SubAssign => BinaryOp::Sub,
            TokenKind::MulAssign => BinaryOp::Mul,
            TokenKind::DivAssign => BinaryOp::Div,
            TokenKind::ModAssign => BinaryOp::Mod,
            TokenKind::QuotAssign => BinaryOp::Quot,
            TokenKind::PowAssign => BinaryOp::Pow,
            TokenKind::BitAndAssign => BinaryOp::BitAnd,
            TokenKind::BitOrAssign => BinaryOp::BitOr,
            TokenKind::BitXorAssign => BinaryOp::BitXor,
            TokenKind::ShlAssign => BinaryOp::Shl,
            TokenKind::ShrAssign => BinaryOp::Shr,
            _ => return None,
        })
    }

    /// Source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Quot => "//",
            Self::Pow => "**",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::ExEq => "===",
            Self::ExNotEq => "!==",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
            Self::And => "and",
            Self::Or => "or",
            Self::In => "in",
            Self::Is => "is",
        }
    }
}

/// Unary operators stored in [`UnaryOpRecord`](super::UnaryOpRecord).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum UnaryOp {
    /// `+x`
    Pos,
    /// `-x`
    Neg,
    /// `not x` / `!x`
    Not,
    /// `~x`
    BitNot,
    /// `++x`
    PreInc,
    /// `--x`
    PreDec,
    /// `x++`
    PostInc,
    /// `x--`
    PostDec,
}

impl UnaryOp {
    /// Prefix operator spelled by a token.
    pub const fn from_prefix_token(kind: TokenKind) -> Option<UnaryOp> {
        Some(match kind {
            TokenKind::Add => UnaryOp::Pos,
            TokenKind::Sub => UnaryOp::Neg,
            TokenKind::Not => UnaryOp::Not,
            TokenKind::BitNot => UnaryOp::BitNot,
            TokenKind::Inc => UnaryOp::PreInc,
            TokenKind::Dec => UnaryOp::PreDec,
            _ => return None,
        })
    }

    /// Postfix operator spelled by a token.
    pub const fn from_postfix_token(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Inc => Some(UnaryOp::PostInc),
            TokenKind::Dec => Some(UnaryOp::PostDec),
            _ => None,
        }
    }

    pub const fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostInc | UnaryOp::PostDec)
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Pos => "+",
            Self::Neg => "-",
            Self::Not => "not",
            Self::BitNot => "~",
            Self::PreInc | Self::PostInc => "++",
            Self::PreDec | Self::PostDec => "--",
        }
    }
}
