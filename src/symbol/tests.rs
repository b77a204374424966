use super::*;

#[test]
fn class_scope_numbers_each_kind_densely() {
    let mut scope = ClassScope::new();
    scope.declare("x", "int", Kind::Field);
    scope.declare("y", "int", Kind::Field);
    scope.declare("s", "String", Kind::Static);

    assert_eq!(scope.get("x").unwrap().index, 0);
    assert_eq!(scope.get("y").unwrap().index, 1);
    assert_eq!(scope.get("s").unwrap().index, 0);
    assert_eq!(scope.count(Kind::Field), 2);
    assert_eq!(scope.count(Kind::Static), 1);
}

#[test]
fn class_scope_lookup_misses_return_none() {
    let scope = ClassScope::new();
    assert!(scope.get("nope").is_none());
}

#[test]
fn subroutine_scope_shadows_class_scope() {
    let mut class_scope = ClassScope::new();
    class_scope.declare("x", "int", Kind::Field);

    let mut sub = SubroutineScope::new(Rc::new(class_scope));
    sub.declare("x", "int", Kind::Argument);

    let symbol = sub.get("x").unwrap();
    assert_eq!(symbol.kind, Kind::Argument);
    assert_eq!(symbol.index, 0);
}

#[test]
fn subroutine_scope_falls_through_to_class_scope() {
    let mut class_scope = ClassScope::new();
    class_scope.declare("balance", "int", Kind::Field);

    let sub = SubroutineScope::new(Rc::new(class_scope));
    let symbol = sub.get("balance").unwrap();
    assert_eq!(symbol.kind, Kind::Field);
}

#[test]
fn subroutine_scope_numbers_arguments_and_locals_independently() {
    let sub_scope_base = Rc::new(ClassScope::new());
    let mut sub = SubroutineScope::new(sub_scope_base);
    sub.declare("a", "int", Kind::Argument);
    sub.declare("b", "int", Kind::Argument);
    sub.declare("i", "int", Kind::Local);

    assert_eq!(sub.get("a").unwrap().index, 0);
    assert_eq!(sub.get("b").unwrap().index, 1);
    assert_eq!(sub.get("i").unwrap().index, 0);
    assert_eq!(sub.count(Kind::Argument), 2);
    assert_eq!(sub.count(Kind::Local), 1);
}

#[test]
fn kind_maps_to_expected_segment() {
    assert_eq!(Kind::Static.segment(), "static");
    assert_eq!(Kind::Field.segment(), "this");
    assert_eq!(Kind::Argument.segment(), "argument");
    assert_eq!(Kind::Local.segment(), "local");
}

#[test]
fn method_names_are_tracked_on_class_scope() {
    let mut scope = ClassScope::new();
    scope.declare_method("run");
    assert!(scope.is_method("run"));
    assert!(!scope.is_method("dispose"));
}
