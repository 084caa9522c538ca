//! Partitions method signatures into per-property candidate buckets.
//!
//! Every method is considered once for the accessor role and once for the
//! mutator role. Methods that fail a role's shape rules are dropped for that
//! role only.

use indexmap::IndexMap;
use jbean_naming::decapitalize;

use crate::reserved::ReservedNames;
use crate::types::{MethodSignature, PrimitiveType, TypeRef};

pub(crate) const LOG_TARGET: &str = "jbean.introspect";

const PREFIX_GET: &str = "get";
const PREFIX_IS: &str = "is";
const PREFIX_SET: &str = "set";

/// Candidate accessors and mutators discovered for one property name.
///
/// Both lists keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCandidateBucket<'m> {
    pub getters: Vec<&'m MethodSignature>,
    pub setters: Vec<&'m MethodSignature>,
}

/// Buckets keyed by property name, in first-discovery order.
pub type CandidateMap<'m> = IndexMap<String, PropertyCandidateBucket<'m>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    EmptyMethodName,
    NoAccessorPrefix,
    NoMutatorPrefix,
    InvalidPropertyName,
    VoidReturn,
    NonVoidReturn,
    NonBooleanIsAccessor,
    UnsupportedAccessorParams,
    MutatorArity,
}

impl SkipReason {
    fn as_str(self) -> &'static str {
        match self {
            SkipReason::EmptyMethodName => "empty method name",
            SkipReason::NoAccessorPrefix => "no get/is prefix",
            SkipReason::NoMutatorPrefix => "no set prefix",
            SkipReason::InvalidPropertyName => "empty or reserved property name",
            SkipReason::VoidReturn => "accessor returns void",
            SkipReason::NonVoidReturn => "mutator does not return void",
            SkipReason::NonBooleanIsAccessor => "is-accessor does not return boolean",
            SkipReason::UnsupportedAccessorParams => "accessor parameters unsupported",
            SkipReason::MutatorArity => "mutator does not take exactly one parameter",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Accessor,
    Mutator,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Role::Accessor => "accessor",
            Role::Mutator => "mutator",
        }
    }
}

/// Classifies `methods` into candidate buckets.
///
/// A method contributes to a bucket only when it has a valid getter or setter
/// shape; everything else is skipped without error.
pub fn classify<'m>(methods: &'m [MethodSignature], reserved: &ReservedNames) -> CandidateMap<'m> {
    let mut buckets = CandidateMap::with_capacity(methods.len());

    for method in methods {
        if method.name.is_empty() {
            log_skip(method, Role::Accessor, SkipReason::EmptyMethodName);
            continue;
        }

        match accessor_property_name(method, reserved) {
            Ok(name) => buckets.entry(name).or_default().getters.push(method),
            Err(reason) => log_skip(method, Role::Accessor, reason),
        }

        match mutator_property_name(method, reserved) {
            Ok(name) => buckets.entry(name).or_default().setters.push(method),
            Err(reason) => log_skip(method, Role::Mutator, reason),
        }
    }

    buckets
}

/// `int` is the only parameter type an accessor may take. Such indexed
/// accessors are kept as candidates but never chosen.
pub(crate) fn is_index_type(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Primitive(PrimitiveType::Int))
}

fn accessor_property_name(
    method: &MethodSignature,
    reserved: &ReservedNames,
) -> Result<String, SkipReason> {
    let (prefix, rest) = if let Some(rest) = method.name.strip_prefix(PREFIX_GET) {
        (PREFIX_GET, rest)
    } else if let Some(rest) = method.name.strip_prefix(PREFIX_IS) {
        (PREFIX_IS, rest)
    } else {
        return Err(SkipReason::NoAccessorPrefix);
    };

    let property = valid_property_name(rest, reserved)?;

    if method.returns_void() {
        return Err(SkipReason::VoidReturn);
    }
    if prefix == PREFIX_IS && !method.return_type.is_primitive_boolean() {
        return Err(SkipReason::NonBooleanIsAccessor);
    }

    match method.params.as_slice() {
        [] => Ok(property),
        [param] if is_index_type(param) => Ok(property),
        _ => Err(SkipReason::UnsupportedAccessorParams),
    }
}

fn mutator_property_name(
    method: &MethodSignature,
    reserved: &ReservedNames,
) -> Result<String, SkipReason> {
    if !method.returns_void() {
        return Err(SkipReason::NonVoidReturn);
    }
    let rest = method
        .name
        .strip_prefix(PREFIX_SET)
        .ok_or(SkipReason::NoMutatorPrefix)?;

    let property = valid_property_name(rest, reserved)?;

    if method.params.len() != 1 {
        return Err(SkipReason::MutatorArity);
    }
    Ok(property)
}

fn valid_property_name(stripped: &str, reserved: &ReservedNames) -> Result<String, SkipReason> {
    let property = decapitalize(stripped);
    if property.is_empty() || reserved.contains(&property) {
        return Err(SkipReason::InvalidPropertyName);
    }
    Ok(property)
}

fn log_skip(method: &MethodSignature, role: Role, reason: SkipReason) {
    tracing::trace!(
        target: LOG_TARGET,
        method = %method.name,
        role = role.as_str(),
        reason = reason.as_str(),
        "method skipped"
    );
}
