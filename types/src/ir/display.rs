//! Source-like rendering of references and parameter declarations.
//!
//! Class references render with their definition's fully qualified name so
//! the output is unambiguous; a renderer that wants short names should use
//! [`ClassRef::name`](super::ClassRef::name) instead.

use super::{ClassRef, PrimitiveRef, TypeParamDef, TypeParamRef, TypeRef, VoidRef, WildcardRef};
use core::fmt;

fn write_dimensions(f: &mut fmt::Formatter<'_>, dimensions: u32) -> fmt::Result {
    for _ in 0..dimensions {
        write!(f, "[]")?;
    }
    Ok(())
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void(r) => r.fmt(f),
            TypeRef::Primitive(r) => r.fmt(f),
            TypeRef::TypeParam(r) => r.fmt(f),
            TypeRef::Class(r) => r.fmt(f),
            TypeRef::Wildcard(r) => r.fmt(f),
        }
    }
}

impl fmt::Display for VoidRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "void")
    }
}

impl fmt::Display for PrimitiveRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write_dimensions(f, self.dimensions)
    }
}

impl fmt::Display for TypeParamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write_dimensions(f, self.dimensions)
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fully_qualified_name())?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            write_joined(f, &self.arguments, ", ")?;
            write!(f, ">")?;
        }
        write_dimensions(f, self.dimensions)
    }
}

impl fmt::Display for WildcardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?")?;
        if !self.bounds.is_empty() {
            write!(f, " extends ")?;
            write_joined(f, &self.bounds, " & ")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeParamDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.bounds.is_empty() {
            write!(f, " extends ")?;
            write_joined(f, &self.bounds, " & ")?;
        }
        Ok(())
    }
}
