use jbean_introspect::{introspect, MethodSignature, PropertyDescriptor, TypeRef};
use pretty_assertions::assert_eq;

fn sample_methods() -> Vec<MethodSignature> {
    vec![
        MethodSignature::setter("setZip", TypeRef::string()),
        MethodSignature::getter("getStreet", TypeRef::string()),
        MethodSignature::getter("isPrimary", TypeRef::boolean()),
        MethodSignature::getter("getZip", TypeRef::string()),
        MethodSignature::setter("setStreet", TypeRef::string()),
        MethodSignature::getter("getClass", TypeRef::named("java.lang.Class")),
        MethodSignature::setter("setPrimary", TypeRef::boolean()),
    ]
}

#[test]
fn descriptors_follow_first_discovery_order() {
    let info = introspect("com.example.Address", &sample_methods());
    let names: Vec<&str> = info.iter().map(PropertyDescriptor::name).collect();
    assert_eq!(names, vec!["zip", "street", "primary"]);
}

#[test]
fn repeated_runs_produce_equal_results() {
    let methods = sample_methods();
    let first = introspect("com.example.Address", &methods);
    let second = introspect("com.example.Address", &methods);
    assert_eq!(first, second);
}

#[test]
fn reordering_input_keeps_descriptor_contents() {
    let methods = sample_methods();
    let mut reversed = methods.clone();
    reversed.reverse();

    let forward = introspect("com.example.Address", &methods);
    let backward = introspect("com.example.Address", &reversed);

    let mut forward_props: Vec<_> = forward.iter().cloned().collect();
    let mut backward_props: Vec<_> = backward.iter().cloned().collect();
    forward_props.sort_by(|a, b| a.name().cmp(b.name()));
    backward_props.sort_by(|a, b| a.name().cmp(b.name()));

    assert_eq!(forward_props, backward_props);
}
