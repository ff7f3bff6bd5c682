//! Shared fixtures for runtime tests.
//!
//! Method bodies here are small closures that stand in for the executor.

use std::rc::Rc;

use crate::{
    equal, less, Class, Closure, Method, ObjectHandle, RuntimeError, RuntimeResult, EQ_METHOD,
    LT_METHOD, SELF,
};

/// Binding `name` in a method's namespace, `None` if unbound.
pub(crate) fn local(closure: &Closure, name: &str) -> ObjectHandle {
    closure.get(name).cloned().unwrap_or_default()
}

/// Field `name` of the instance behind `handle`, `None` if unset.
pub(crate) fn field(handle: &ObjectHandle, name: &str) -> RuntimeResult<ObjectHandle> {
    let object = handle.get()?;
    let instance = object
        .as_instance()
        .ok_or_else(|| RuntimeError::custom("field access on a non-instance"))?;
    let value = instance.fields().get(name).cloned().unwrap_or_default();
    Ok(value)
}

pub(crate) fn set_field(handle: &ObjectHandle, name: &str, value: ObjectHandle) -> RuntimeResult<()> {
    let object = handle.get()?;
    let instance = object
        .as_instance()
        .ok_or_else(|| RuntimeError::custom("field assignment on a non-instance"))?;
    instance.fields_mut().insert(name.to_string(), value);
    Ok(())
}

/// Zero-argument method that always returns `value`.
pub(crate) fn returning(name: &str, value: ObjectHandle) -> Method {
    Method::native(name, &[], move |_, _| Ok(value.clone()))
}

/// `Counter` compares by its `value` field through `__eq__` and `__lt__`.
pub(crate) fn counter_class() -> Rc<Class> {
    let eq = Method::native(EQ_METHOD, &["other"], |locals, ctx| {
        let this = field(&local(locals, SELF), "value")?;
        let other = field(&local(locals, "other"), "value")?;
        Ok(ObjectHandle::boolean(equal(&this, &other, ctx)?))
    });
    let lt = Method::native(LT_METHOD, &["other"], |locals, ctx| {
        let this = field(&local(locals, SELF), "value")?;
        let other = field(&local(locals, "other"), "value")?;
        Ok(ObjectHandle::boolean(less(&this, &other, ctx)?))
    });
    Rc::new(Class::new("Counter", vec![eq, lt], None))
}

/// New instance of `class` with its `value` field set.
pub(crate) fn counter(class: &Rc<Class>, value: i32) -> ObjectHandle {
    let handle = ObjectHandle::instance(Rc::clone(class));
    if let Ok(object) = handle.get() {
        if let Some(instance) = object.as_instance() {
            instance
                .fields_mut()
                .insert("value".to_string(), ObjectHandle::number(value));
        }
    }
    handle
}
