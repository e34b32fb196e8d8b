//! Token kinds for MetaReal.

use std::fmt;

/// First keyword discriminant; keyword `i` of the classifier table is
/// `KEYWORD_BASE + i`.
pub const KEYWORD_BASE: u8 = 16;

/// First type-name discriminant; type name `i` of the classifier table is
/// `TYPE_BASE + i`.
pub const TYPE_BASE: u8 = 56;

/// Defines `TokenKind` with explicit discriminants, the reverse lookup
/// from `u8` and the display label of every kind.
macro_rules! define_token_kinds {
    ($($(#[$doc:meta])* $name:ident = $value:literal => $label:literal,)*) => {
        /// Token kinds for MetaReal, with semantic range layout.
        ///
        /// | Range   | Category              |
        /// |---------|-----------------------|
        /// | 0-8     | Literals              |
        /// | 16-50   | Keywords              |
        /// | 56-66   | Type names            |
        /// | 72-84   | Punctuation           |
        /// | 90-113  | Operators             |
        /// | 120-131 | Compound assignment   |
        /// | 140-142 | Special               |
        ///
        /// Keywords and type names are laid out in the same order as the
        /// classifier tables, so a table index converts to a kind by adding
        /// [`KEYWORD_BASE`] or [`TYPE_BASE`].
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TokenKind {
            $($(#[$doc])* $name = $value,)*
        }

        impl TokenKind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$name,)*];

            /// Kind with the given discriminant, if any.
            #[inline]
            pub const fn from_u8(value: u8) -> Option<TokenKind> {
                match value {
                    $($value => Some(TokenKind::$name),)*
                    _ => None,
                }
            }

            /// Label used by token dumps: upper-case names for literals,
            /// symbols and specials, the source word for keywords and types.
            pub const fn label(self) -> &'static str {
                match self {
                    $(TokenKind::$name => $label,)*
                }
            }
        }
    };
}

define_token_kinds! {
    // === Literals (0-8) ===
    Ident = 0 => "IDENTIFIER",
    Int = 1 => "INT",
    Float = 2 => "FLOAT",
    /// Imaginary literal; the payload excludes the trailing `i`.
    Imaginary = 3 => "IMAGINARY",
    Char = 4 => "CHAR",
    Str = 5 => "STR",
    /// `f"` opening an interpolated string.
    FStrStart = 6 => "FSTR_START",
    /// Literal run inside an interpolated string.
    FStrFragment = 7 => "FSTR_FRAGMENT",
    /// Closing quote of an interpolated string.
    FStrEnd = 8 => "FSTR_END",

    // === Keywords (16-50), classifier order ===
    If = 16 => "if",
    In = 17 => "in",
    Is = 18 => "is",
    Or = 19 => "or",
    To = 20 => "to",
    Do = 21 => "do",
    And = 22 => "and",
    For = 23 => "for",
    Not = 24 => "not",
    Var = 25 => "var",
    Elif = 26 => "elif",
    Else = 27 => "else",
    Case = 28 => "case",
    Func = 29 => "func",
    None = 30 => "none",
    True = 31 => "true",
    Step = 32 => "step",
    While = 33 => "while",
    False = 34 => "false",
    Break = 35 => "break",
    Const = 36 => "const",
    Class = 37 => "class",
    Global = 38 => "global",
    Import = 39 => "import",
    Static = 40 => "static",
    Public = 41 => "public",
    Switch = 42 => "switch",
    Return = 43 => "return",
    Struct = 44 => "struct",
    Default = 45 => "default",
    Private = 46 => "private",
    Include = 47 => "include",
    Continue = 48 => "continue",
    Readonly = 49 => "readonly",
    Protected = 50 => "protected",

    // === Type names (56-66), classifier order ===
    IntType = 56 => "int",
    StrType = 57 => "str",
    SetType = 58 => "set",
    CharType = 59 => "char",
    BoolType = 60 => "bool",
    ListType = 61 => "list",
    DictType = 62 => "dict",
    TypeType = 63 => "type",
    FloatType = 64 => "float",
    TupleType = 65 => "tuple",
    ComplexType = 66 => "complex",

    // === Punctuation (72-84) ===
    LParen = 72 => "LPAREN",
    RParen = 73 => "RPAREN",
    LBracket = 74 => "LSQUARE",
    RBracket = 75 => "RSQUARE",
    LCurly = 76 => "LCURLY",
    RCurly = 77 => "RCURLY",
    Comma = 78 => "COMMA",
    Colon = 79 => "COLON",
    Question = 80 => "QUESTION",
    Dollar = 81 => "DOLLAR",
    Dot = 82 => "DOT",
    Ellipsis = 83 => "ELLIPSIS",
    /// `->`
    Link = 84 => "LINK",

    // === Operators (90-113) ===
    Add = 90 => "ADD",
    Sub = 91 => "SUB",
    Mul = 92 => "MUL",
    Div = 93 => "DIV",
    Mod = 94 => "MOD",
    /// `//` (integer quotient)
    Quot = 95 => "QUOT",
    Pow = 96 => "POW",
    BitAnd = 97 => "B_AND",
    BitOr = 98 => "B_OR",
    BitXor = 99 => "B_XOR",
    BitNot = 100 => "B_NOT",
    Shl = 101 => "LSHIFT",
    Shr = 102 => "RSHIFT",
    Eq = 103 => "EQ",
    NotEq = 104 => "NEQ",
    /// `===`
    ExEq = 105 => "EX_EQ",
    /// `!==`
    ExNotEq = 106 => "EX_NEQ",
    Less = 107 => "LT",
    Greater = 108 => "GT",
    LessEq = 109 => "LTE",
    GreaterEq = 110 => "GTE",
    Assign = 111 => "ASSIGN",
    Inc = 112 => "INC",
    Dec = 113 => "DEC",

    // === Compound assignment (120-131) ===
    AddAssign = 120 => "ADD_ASSIGN",
    SubAssign = 121 => "SUB_ASSIGN",
    MulAssign = 122 => "MUL_ASSIGN",
    DivAssign = 123 => "DIV_ASSIGN",
    ModAssign = 124 => "MOD_ASSIGN",
    QuotAssign = 125 => "QUOT_ASSIGN",
    PowAssign = 126 => "POW_ASSIGN",
    BitAndAssign = 127 => "B_AND_ASSIGN",
    BitOrAssign = 128 => "B_OR_ASSIGN",
    BitXorAssign = 129 => "B_XOR_ASSIGN",
    ShlAssign = 130 => "LSHIFT_ASSIGN",
    ShrAssign = 131 => "RSHIFT_ASSIGN",

    // === Special (140-142) ===
    Newline = 140 => "NEWLINE",
    Semicolon = 141 => "SEMICOLON",
    Eof = 142 => "EOF",
}

impl TokenKind {
    /// Number of keyword kinds.
    pub const KEYWORD_COUNT: u8 = TokenKind::Protected as u8 - KEYWORD_BASE + 1;

    /// Number of type-name kinds.
    pub const TYPE_COUNT: u8 = TokenKind::ComplexType as u8 - TYPE_BASE + 1;

    /// Discriminant as a `u8`.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Keyword at `index` in the classifier table.
    #[inline]
    pub const fn keyword(index: u8) -> Option<TokenKind> {
        if index < Self::KEYWORD_COUNT {
            Self::from_u8(KEYWORD_BASE + index)
        } else {
            None
        }
    }

    /// Type name at `index` in the classifier table.
    #[inline]
    pub const fn type_name(index: u8) -> Option<TokenKind> {
        if index < Self::TYPE_COUNT {
            Self::from_u8(TYPE_BASE + index)
        } else {
            None
        }
    }

    /// Literal kinds, including the interpolated-string markers.
    #[inline]
    pub const fn is_literal(self) -> bool {
        (self as u8) <= TokenKind::FStrEnd as u8
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let tag = self as u8;
        tag >= KEYWORD_BASE && tag <= TokenKind::Protected as u8
    }

    #[inline]
    pub const fn is_type_name(self) -> bool {
        let tag = self as u8;
        tag >= TYPE_BASE && tag <= TokenKind::ComplexType as u8
    }

    #[inline]
    pub const fn is_compound_assign(self) -> bool {
        let tag = self as u8;
        tag >= TokenKind::AddAssign as u8 && tag <= TokenKind::ShrAssign as u8
    }

    /// Statement separators: `Newline` and `Semicolon`.
    #[inline]
    pub const fn is_separator(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon)
    }

    /// Kinds that carry a text or char payload.
    #[inline]
    pub const fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Imaginary
                | TokenKind::Char
                | TokenKind::Str
                | TokenKind::FStrFragment
        )
    }

    /// Kinds after which a line break ends a statement.
    ///
    /// A newline following any other token (an operator, an opening
    /// bracket, a keyword such as `if`) continues the current statement.
    #[inline]
    pub const fn ends_value(self) -> bool {
        if self.is_type_name() {
            return true;
        }
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Imaginary
                | TokenKind::Char
                | TokenKind::Str
                | TokenKind::FStrEnd
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RCurly
                | TokenKind::True
                | TokenKind::False
                | TokenKind::None
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Continue
        )
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
