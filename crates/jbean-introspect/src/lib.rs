//! JavaBean-style property introspection over method signatures.
//!
//! Given the public methods of a type, introspection:
//!
//! 1. classifies each method as a candidate accessor (`getX()`, `isX()`) and/or
//!    mutator (`setX(T)`), bucketing candidates by property name,
//! 2. resolves each bucket to at most one canonical getter and setter,
//! 3. assembles descriptors for the buckets that resolved to something.
//!
//! Malformed or ambiguous methods are filtered out rather than reported. The
//! computation is pure: each call owns its buckets and returns a fresh
//! [`BeanInfo`]. Descriptor order is the order in which property names are
//! first seen in the input.
//!
//! Enumerating the methods of a type is the caller's job.

#![forbid(unsafe_code)]

mod classify;
mod descriptor;
mod reserved;
mod resolve;
mod types;

pub use classify::{classify, CandidateMap, PropertyCandidateBucket};
pub use descriptor::{assemble, BeanInfo, PropertyDescriptor};
pub use reserved::{ReservedNames, DEFAULT_RESERVED_NAMES};
pub use resolve::{resolve, ResolvedProperty};
pub use types::{MethodSignature, PrimitiveType, TypeParseError, TypeRef};

/// Runs introspection against a fixed reserved-name set.
#[derive(Debug, Clone)]
pub struct Introspector {
    reserved: ReservedNames,
}

impl Introspector {
    pub fn new(reserved: ReservedNames) -> Self {
        Self { reserved }
    }

    pub fn reserved_names(&self) -> &ReservedNames {
        &self.reserved
    }

    pub fn introspect(&self, bean_type: impl Into<String>, methods: &[MethodSignature]) -> BeanInfo {
        let buckets = classify(methods, &self.reserved);
        assemble(bean_type, &buckets)
    }
}

impl Default for Introspector {
    /// Uses [`ReservedNames::global`].
    fn default() -> Self {
        Self::new(ReservedNames::global().clone())
    }
}

/// Introspects `methods` using the process-wide reserved names.
pub fn introspect(bean_type: impl Into<String>, methods: &[MethodSignature]) -> BeanInfo {
    let buckets = classify(methods, ReservedNames::global());
    assemble(bean_type, &buckets)
}
