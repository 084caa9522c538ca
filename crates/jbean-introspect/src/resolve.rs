//! Picks one canonical getter and setter per candidate bucket.

use crate::classify::PropertyCandidateBucket;
use crate::types::{MethodSignature, TypeRef};

/// Outcome of resolving a single bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProperty<'m> {
    pub getter: Option<&'m MethodSignature>,
    pub setter: Option<&'m MethodSignature>,
    pub property_type: Option<&'m TypeRef>,
}

impl ResolvedProperty<'_> {
    /// A property is valid when at least one accessor or mutator survived.
    pub fn is_valid(&self) -> bool {
        self.getter.is_some() || self.setter.is_some()
    }
}

/// Resolves `bucket` into at most one getter and one setter.
///
/// Getter: among zero-argument candidates, the first one wins unless a later
/// `is`-prefixed candidate appears; the last `is` candidate always wins.
///
/// Setter: with a getter, the first setter whose parameter type equals the
/// getter's return type. Without one, the last single-argument setter.
pub fn resolve<'m>(bucket: &PropertyCandidateBucket<'m>) -> ResolvedProperty<'m> {
    let getter = canonical_getter(&bucket.getters);

    let setter = match getter {
        Some(getter) => bucket
            .setters
            .iter()
            .copied()
            .find(|setter| setter.single_param() == Some(&getter.return_type)),
        None => bucket
            .setters
            .iter()
            .rev()
            .copied()
            .find(|setter| setter.single_param().is_some()),
    };

    let property_type = getter
        .map(|getter| &getter.return_type)
        .or_else(|| setter.and_then(MethodSignature::single_param));

    ResolvedProperty {
        getter,
        setter,
        property_type,
    }
}

fn canonical_getter<'m>(candidates: &[&'m MethodSignature]) -> Option<&'m MethodSignature> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.params.is_empty())
        .fold(None, |chosen, candidate| {
            if chosen.is_none() || candidate.name.starts_with("is") {
                Some(candidate)
            } else {
                chosen
            }
        })
}
