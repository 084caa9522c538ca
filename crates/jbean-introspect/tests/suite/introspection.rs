use jbean_introspect::{
    introspect, Introspector, MethodSignature, PropertyDescriptor, ReservedNames, TypeRef,
};
use pretty_assertions::assert_eq;

fn class_type() -> TypeRef {
    TypeRef::named("java.lang.Class")
}

fn names(descriptors: &[PropertyDescriptor]) -> Vec<&str> {
    descriptors.iter().map(PropertyDescriptor::name).collect()
}

#[test]
fn getter_and_setter_form_one_property() {
    let methods = vec![
        MethodSignature::getter("getName", TypeRef::string()),
        MethodSignature::setter("setName", TypeRef::string()),
    ];

    let info = introspect("com.example.Person", &methods);
    assert_eq!(info.bean_type(), "com.example.Person");
    assert_eq!(names(info.property_descriptors()), vec!["name"]);

    let name = &info.property_descriptors()[0];
    assert_eq!(name.read_method(), Some(&methods[0]));
    assert_eq!(name.write_method(), Some(&methods[1]));
    assert_eq!(name.property_type(), &TypeRef::string());
}

#[test]
fn is_accessor_wins_over_get_accessor() {
    let methods = vec![
        MethodSignature::getter("isActive", TypeRef::boolean()),
        MethodSignature::getter("getActive", TypeRef::boolean()),
        MethodSignature::setter("setActive", TypeRef::boolean()),
    ];

    let info = introspect("com.example.Account", &methods);
    assert_eq!(info.len(), 1);

    let active = info.property("active").expect("active property");
    assert_eq!(active.read_method().map(|m| m.name.as_str()), Some("isActive"));
    assert_eq!(active.write_method().map(|m| m.name.as_str()), Some("setActive"));
    assert_eq!(active.property_type(), &TypeRef::boolean());
}

#[test]
fn getter_only_property() {
    let methods = vec![MethodSignature::getter("getCount", TypeRef::int())];

    let info = introspect("com.example.Counter", &methods);
    assert_eq!(names(info.property_descriptors()), vec!["count"]);

    let count = info.property("count").unwrap();
    assert!(count.is_readable());
    assert!(!count.is_writable());
    assert_eq!(count.property_type(), &TypeRef::int());
}

#[test]
fn setter_only_property() {
    let methods = vec![MethodSignature::setter("setTotal", TypeRef::int())];

    let info = introspect("com.example.Invoice", &methods);
    assert_eq!(names(info.property_descriptors()), vec!["total"]);

    let total = info.property("total").unwrap();
    assert!(!total.is_readable());
    assert!(total.is_writable());
    assert_eq!(total.property_type(), &TypeRef::int());
}

#[test]
fn class_property_is_never_reported() {
    let methods = vec![
        MethodSignature::getter("getClass", class_type()),
        MethodSignature::setter("setClass", class_type()),
        MethodSignature::getter("getName", TypeRef::string()),
    ];

    let info = introspect("com.example.Person", &methods);
    assert_eq!(names(info.property_descriptors()), vec!["name"]);
    assert!(info.property("class").is_none());

    let no_extra_reserved = Introspector::new(ReservedNames::new(Vec::<String>::new()));
    assert!(no_extra_reserved
        .introspect("com.example.Person", &methods)
        .property("class")
        .is_none());
}

#[test]
fn indexed_getter_produces_no_property() {
    let methods = vec![MethodSignature::new(
        "getIndexed",
        TypeRef::string(),
        vec![TypeRef::int()],
    )];

    let info = introspect("com.example.Table", &methods);
    assert!(info.is_empty());
    assert!(info.property("indexed").is_none());
}

#[test]
fn mismatched_setter_is_left_unpaired() {
    let methods = vec![
        MethodSignature::getter("getId", TypeRef::named("java.lang.Long")),
        MethodSignature::setter("setId", TypeRef::string()),
    ];

    let info = introspect("com.example.Entity", &methods);
    let id = info.property("id").unwrap();
    assert_eq!(id.read_method(), Some(&methods[0]));
    assert_eq!(id.write_method(), None);
    assert_eq!(id.property_type(), &TypeRef::named("java.lang.Long"));
}

#[test]
fn overloaded_setters_pick_the_getter_type() {
    let methods = vec![
        MethodSignature::setter("setAmount", TypeRef::string()),
        MethodSignature::setter("setAmount", TypeRef::named("java.math.BigDecimal")),
        MethodSignature::getter("getAmount", TypeRef::named("java.math.BigDecimal")),
    ];

    let info = introspect("com.example.Payment", &methods);
    let amount = info.property("amount").unwrap();
    assert_eq!(amount.write_method(), Some(&methods[1]));
    assert_eq!(amount.property_type(), &TypeRef::named("java.math.BigDecimal"));
}

#[test]
fn non_bean_methods_are_ignored() {
    let methods = vec![
        MethodSignature::getter("toString", TypeRef::string()),
        MethodSignature::getter("hashCode", TypeRef::int()),
        MethodSignature::new(
            "equals",
            TypeRef::boolean(),
            vec![TypeRef::named("java.lang.Object")],
        ),
        MethodSignature::new("notify", TypeRef::Void, vec![]),
        MethodSignature::getter("isEmpty", TypeRef::named("java.lang.Boolean")),
    ];

    let info = introspect("com.example.Plain", &methods);
    assert!(info.is_empty(), "{info:?}");
}

#[test]
fn custom_reserved_names_filter_properties() {
    let methods = vec![
        MethodSignature::getter("getMetaClass", TypeRef::named("groovy.lang.MetaClass")),
        MethodSignature::getter("getDelegate", TypeRef::named("java.lang.Object")),
        MethodSignature::getter("getOwner", TypeRef::named("java.lang.Object")),
    ];

    let introspector = Introspector::new(ReservedNames::new(["delegate", "owner"]));
    let info = introspector.introspect("com.example.Closure", &methods);
    assert_eq!(names(info.property_descriptors()), vec!["metaClass"]);
}
