//! Declaration modifiers and their reduction to an integer mask.

use bitflags::bitflags;

bitflags! {
    /// Modifier bits of a declaration.
    ///
    /// Bit values follow the JVM reflection encoding so that a generated
    /// `int` mask can be emitted verbatim.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::empty()
    }
}

impl Modifiers {
    /// OR-fold a set of modifier keywords into a mask.
    ///
    /// Keywords without a bit (`default`, `volatile`, `strictfp`) are skipped.
    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        modifiers
            .into_iter()
            .filter_map(Modifier::mask)
            .fold(Modifiers::empty(), |acc, bit| acc | bit)
    }
}

/// A declaration modifier keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// The bit this keyword contributes to a mask, if any.
    pub fn mask(self) -> Option<Modifiers> {
        match self {
            Modifier::Public => Some(Modifiers::PUBLIC),
            Modifier::Protected => Some(Modifiers::PROTECTED),
            Modifier::Private => Some(Modifiers::PRIVATE),
            Modifier::Abstract => Some(Modifiers::ABSTRACT),
            Modifier::Static => Some(Modifiers::STATIC),
            Modifier::Final => Some(Modifiers::FINAL),
            Modifier::Transient => Some(Modifiers::TRANSIENT),
            Modifier::Synchronized => Some(Modifiers::SYNCHRONIZED),
            Modifier::Native => Some(Modifiers::NATIVE),
            Modifier::Default | Modifier::Volatile | Modifier::Strictfp => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }

    /// Parse a keyword, case-insensitively.
    pub fn from_keyword(keyword: &str) -> Option<Modifier> {
        const ALL: [Modifier; 12] = [
            Modifier::Public,
            Modifier::Protected,
            Modifier::Private,
            Modifier::Abstract,
            Modifier::Default,
            Modifier::Static,
            Modifier::Final,
            Modifier::Transient,
            Modifier::Volatile,
            Modifier::Synchronized,
            Modifier::Native,
            Modifier::Strictfp,
        ];
        ALL.into_iter()
            .find(|m| m.keyword().eq_ignore_ascii_case(keyword))
    }
}

/// Reduce modifier keywords to their integer mask.
pub fn modifiers_to_int(modifiers: impl IntoIterator<Item = Modifier>) -> u32 {
    Modifiers::from_modifiers(modifiers).bits()
}

/// Reduce textual keywords to their integer mask, skipping unknown ones.
pub fn keywords_to_int<'a>(keywords: impl IntoIterator<Item = &'a str>) -> u32 {
    modifiers_to_int(keywords.into_iter().filter_map(Modifier::from_keyword))
}
