//! Immutable property descriptors and the per-type `BeanInfo` built from them.

use serde::Serialize;

use crate::classify::{CandidateMap, LOG_TARGET};
use crate::resolve::{resolve, ResolvedProperty};
use crate::types::{MethodSignature, TypeRef};

/// A resolved bean property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyDescriptor {
    name: String,
    read_method: Option<MethodSignature>,
    write_method: Option<MethodSignature>,
    property_type: TypeRef,
}

impl PropertyDescriptor {
    /// Builds a descriptor from a resolved bucket, or `None` when the bucket
    /// is invalid.
    pub fn from_resolved(name: impl Into<String>, resolved: &ResolvedProperty<'_>) -> Option<Self> {
        if !resolved.is_valid() {
            return None;
        }
        let property_type = resolved.property_type?.clone();
        Some(Self {
            name: name.into(),
            read_method: resolved.getter.cloned(),
            write_method: resolved.setter.cloned(),
            property_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn read_method(&self) -> Option<&MethodSignature> {
        self.read_method.as_ref()
    }

    pub fn write_method(&self) -> Option<&MethodSignature> {
        self.write_method.as_ref()
    }

    pub fn property_type(&self) -> &TypeRef {
        &self.property_type
    }

    pub fn is_readable(&self) -> bool {
        self.read_method.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.write_method.is_some()
    }
}

/// Introspection result for one bean type.
///
/// The descriptor list is fixed at construction and exposed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeanInfo {
    bean_type: String,
    properties: Box<[PropertyDescriptor]>,
}

impl BeanInfo {
    pub fn bean_type(&self) -> &str {
        &self.bean_type
    }

    pub fn property_descriptors(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyDescriptor> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a BeanInfo {
    type Item = &'a PropertyDescriptor;
    type IntoIter = std::slice::Iter<'a, PropertyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolves every bucket and collects descriptors for the valid ones, in
/// bucket order.
pub fn assemble(bean_type: impl Into<String>, buckets: &CandidateMap<'_>) -> BeanInfo {
    let bean_type = bean_type.into();
    let mut properties = Vec::with_capacity(buckets.len());

    for (name, bucket) in buckets {
        let resolved = resolve(bucket);
        match PropertyDescriptor::from_resolved(name.as_str(), &resolved) {
            Some(descriptor) => properties.push(descriptor),
            None => tracing::trace!(
                target: LOG_TARGET,
                bean = %bean_type,
                property = %name,
                getters = bucket.getters.len(),
                setters = bucket.setters.len(),
                "dropping property without a usable accessor or mutator"
            ),
        }
    }

    tracing::debug!(
        target: LOG_TARGET,
        bean = %bean_type,
        buckets = buckets.len(),
        properties = properties.len(),
        "introspected bean properties"
    );

    BeanInfo {
        bean_type,
        properties: properties.into_boxed_slice(),
    }
}
