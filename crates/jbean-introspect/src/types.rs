//! Erased Java type references and method signatures as seen by introspection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Char,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

/// A type identity, compared structurally.
///
/// Reference types are identified by their binary name (`java.lang.String`,
/// `com.example.Outer$Inner`). Generic arguments are not modelled; accessor
/// matching works on erasures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Void,
    Primitive(PrimitiveType),
    Named(String),
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(binary_name: impl Into<String>) -> Self {
        TypeRef::Named(binary_name.into())
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub fn boolean() -> Self {
        TypeRef::Primitive(PrimitiveType::Boolean)
    }

    pub fn int() -> Self {
        TypeRef::Primitive(PrimitiveType::Int)
    }

    pub fn string() -> Self {
        TypeRef::named("java.lang.String")
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    pub fn is_primitive_boolean(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveType::Boolean))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Primitive(p) => f.write_str(p.keyword()),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Array(elem) => write!(f, "{elem}[]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("empty type name")]
    Empty,
    #[error("`void` cannot be used as an array element type")]
    VoidArray,
    #[error("invalid type name `{0}`")]
    Invalid(String),
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    /// Parses Java source spelling: `void`, primitive keywords, binary names,
    /// and any of those followed by `[]` suffixes.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TypeParseError::Empty);
        }

        let mut base = text;
        let mut dims = 0usize;
        while let Some(rest) = base.strip_suffix("[]") {
            base = rest.trim_end();
            dims += 1;
        }

        let mut ty = match base {
            "void" if dims > 0 => return Err(TypeParseError::VoidArray),
            "void" => TypeRef::Void,
            _ => match PrimitiveType::from_keyword(base) {
                Some(p) => TypeRef::Primitive(p),
                None if is_binary_name(base) => TypeRef::Named(base.to_string()),
                None => return Err(TypeParseError::Invalid(text.to_string())),
            },
        };
        for _ in 0..dims {
            ty = TypeRef::array(ty);
        }
        Ok(ty)
    }
}

fn is_binary_name(name: &str) -> bool {
    name.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    })
}

impl TryFrom<String> for TypeRef {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

/// A public method of the introspected type: name, erased return type and
/// erased parameter types in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub params: Vec<TypeRef>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, return_type: TypeRef, params: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            return_type,
            params,
        }
    }

    /// A no-argument method returning `ty`.
    pub fn getter(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, ty, Vec::new())
    }

    /// A `void` method taking a single `ty` argument.
    pub fn setter(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, TypeRef::Void, vec![ty])
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }

    /// The parameter type when the method takes exactly one argument.
    pub fn single_param(&self) -> Option<&TypeRef> {
        match self.params.as_slice() {
            [param] => Some(param),
            _ => None,
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}
