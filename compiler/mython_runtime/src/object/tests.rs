use super::*;
use crate::context::SimpleContext;
use crate::instance::SELF;
use crate::test_helpers::returning;
use pretty_assertions::assert_eq;

fn render(handle: &ObjectHandle) -> String {
    handle.render(&mut SimpleContext::silent()).unwrap()
}

fn empty_class(name: &str) -> Rc<Class> {
    Rc::new(Class::new(name, Vec::new(), None))
}

// === Empty handle ===

#[test]
fn empty_handle_is_none() {
    let handle = ObjectHandle::none();
    assert!(handle.is_none());
    assert!(!handle.is_some());
    assert!(!handle.is_alias());
    assert_eq!(handle.type_name(), "None");
    assert!(handle.try_get().is_none());
    assert!(matches!(handle.get(), Err(RuntimeError::InvalidHandle)));
}

#[test]
fn default_handle_is_empty() {
    assert!(ObjectHandle::default().is_none());
}

#[test]
fn empty_handles_are_not_the_same_object() {
    assert!(!ObjectHandle::none().ptr_eq(&ObjectHandle::none()));
}

// === Constructors and accessors ===

#[test]
fn primitive_constructors() {
    assert_eq!(ObjectHandle::number(42).as_number(), Some(42));
    assert_eq!(ObjectHandle::boolean(true).as_bool(), Some(true));
    assert_eq!(
        ObjectHandle::string("hello").as_string(),
        Some("hello".to_string())
    );
    assert_eq!(ObjectHandle::from(Object::Number(-7)).as_number(), Some(-7));
}

#[test]
fn accessors_reject_other_kinds() {
    let number = ObjectHandle::number(1);
    assert_eq!(number.as_bool(), None);
    assert_eq!(number.as_string(), None);
    assert!(number.as_class().is_none());
    assert!(!number.is_instance());
    assert_eq!(ObjectHandle::none().as_number(), None);
}

#[test]
fn type_names() {
    let class = empty_class("Point");
    assert_eq!(ObjectHandle::number(0).type_name(), "Number");
    assert_eq!(ObjectHandle::string("").type_name(), "String");
    assert_eq!(ObjectHandle::boolean(false).type_name(), "Bool");
    assert_eq!(ObjectHandle::class(Rc::clone(&class)).type_name(), "Class");
    assert_eq!(ObjectHandle::instance(class).type_name(), "ClassInstance");
}

#[test]
fn class_handle_shares_the_class() {
    let class = empty_class("Point");
    let handle = ObjectHandle::class(Rc::clone(&class));
    assert!(Rc::ptr_eq(&handle.as_class().unwrap(), &class));
}

#[test]
fn owned_handle_clones_share_the_object() {
    let a = ObjectHandle::number(5);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&ObjectHandle::number(5)));
}

// === Aliases ===

#[test]
fn share_does_not_keep_the_object_alive() {
    let object = Rc::new(Object::Number(3));
    let alias = ObjectHandle::share(&object);
    assert!(alias.is_alias());
    assert_eq!(Rc::strong_count(&object), 1);
    assert_eq!(alias.as_number(), Some(3));

    drop(object);
    assert!(alias.is_some());
    assert!(alias.try_get().is_none());
    assert!(matches!(alias.get(), Err(RuntimeError::InvalidHandle)));
    assert_eq!(alias.type_name(), "<freed>");
}

#[test]
fn resolve_separates_none_from_freed() {
    assert!(ObjectHandle::none().resolve().unwrap().is_none());
    assert_eq!(
        ObjectHandle::number(4).resolve().unwrap().map(|o| o.kind_name()),
        Some("Number")
    );

    let object = Rc::new(Object::Number(4));
    let alias = ObjectHandle::share(&object);
    assert!(alias.resolve().unwrap().is_some());
    drop(object);
    assert!(matches!(alias.resolve(), Err(RuntimeError::InvalidHandle)));
}

#[test]
fn instance_self_field_is_an_alias() {
    let handle = ObjectHandle::instance(empty_class("Point"));
    let object = handle.get().unwrap();
    // `handle` and `object`; the `self` field adds nothing.
    assert_eq!(Rc::strong_count(&object), 2);

    let this = object
        .as_instance()
        .unwrap()
        .fields()
        .get(SELF)
        .cloned()
        .unwrap();
    assert!(this.is_alias());
    assert!(this.ptr_eq(&handle));

    drop(object);
    drop(handle);
    assert!(this.try_get().is_none());
}

// === Printing ===

#[test]
fn print_primitives() {
    assert_eq!(render(&ObjectHandle::number(42)), "42");
    assert_eq!(render(&ObjectHandle::number(-1)), "-1");
    assert_eq!(render(&ObjectHandle::string("hi there")), "hi there");
    assert_eq!(render(&ObjectHandle::boolean(true)), "True");
    assert_eq!(render(&ObjectHandle::boolean(false)), "False");
    assert_eq!(render(&ObjectHandle::none()), "None");
}

#[test]
fn print_class() {
    let handle = ObjectHandle::class(empty_class("Rect"));
    assert_eq!(render(&handle), "Class Rect");
}

#[test]
fn print_instance_without_str() {
    let handle = ObjectHandle::instance(empty_class("Point"));
    let rendered = render(&handle);
    assert!(rendered.starts_with("<Point object at 0x"), "{rendered}");
    assert!(rendered.ends_with('>'));
    // Same object, same rendering.
    assert_eq!(render(&handle), rendered);
}

#[test]
fn print_instance_with_str() {
    let class = Rc::new(Class::new(
        "Point",
        vec![returning("__str__", ObjectHandle::string("(1, 2)"))],
        None,
    ));
    assert_eq!(render(&ObjectHandle::instance(class)), "(1, 2)");
}

#[test]
fn print_dangling_alias_fails() {
    let object = Rc::new(Object::Bool(true));
    let alias = ObjectHandle::share(&object);
    drop(object);
    let mut ctx = SimpleContext::silent();
    assert!(matches!(
        alias.render(&mut ctx),
        Err(RuntimeError::InvalidHandle)
    ));
}

#[test]
fn print_to_context_writes_output() {
    let mut ctx = SimpleContext::buffered();
    ObjectHandle::number(7).print_to_context(&mut ctx).unwrap();
    ObjectHandle::none().print_to_context(&mut ctx).unwrap();
    assert_eq!(ctx.captured(), "7None");
}

#[test]
fn print_to_explicit_stream() {
    let mut out = Vec::new();
    let mut ctx = SimpleContext::buffered();
    ObjectHandle::string("x")
        .print(&mut out, &mut ctx)
        .unwrap();
    assert_eq!(out, b"x");
    assert_eq!(ctx.captured(), "");
}

// === Debug ===

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", ObjectHandle::none()), "None");
    assert_eq!(format!("{:?}", ObjectHandle::number(3)), "Owned(Number(3))");

    let object = Rc::new(Object::String("s".to_string()));
    let alias = ObjectHandle::share(&object);
    assert_eq!(format!("{alias:?}"), "Alias(String)");
    drop(object);
    assert_eq!(format!("{alias:?}"), "Alias(<freed>)");
}
