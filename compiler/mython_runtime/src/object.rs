//! Runtime values and the handles that refer to them.
//!
//! # Ownership
//!
//! Every value lives in an `Rc<Object>`. An [`ObjectHandle`] refers to one
//! in one of two ways:
//!
//! - **owning**: holds a strong reference and keeps the object alive
//! - **alias**: holds a `Weak` reference and never keeps anything alive
//!
//! Aliases exist for a class instance's `self`: the instance stores an
//! alias of itself in its own fields and passes one to every method it
//! runs. A strong `self` would be a reference cycle that plain reference
//! counting never frees.
//!
//! An empty handle is the language's `None`.

use std::fmt;
use std::io::Write;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use crate::class::Class;
use crate::context::Context;
use crate::errors::{RuntimeError, RuntimeResult};
use crate::instance::ClassInstance;

/// A namespace: instance fields or a method call's locals.
pub type Closure = FxHashMap<String, ObjectHandle>;

/// A runtime value.
///
/// The set of kinds is closed, so printing and comparison are exhaustive
/// matches rather than trait objects.
#[derive(Debug)]
pub enum Object {
    Number(i32),
    String(String),
    Bool(bool),
    Class(Rc<Class>),
    Instance(ClassInstance),
}

impl Object {
    /// Kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Object::Number(_) => "Number",
            Object::String(_) => "String",
            Object::Bool(_) => "Bool",
            Object::Class(_) => "Class",
            Object::Instance(_) => "ClassInstance",
        }
    }

    /// The instance behind this object, if it is one.
    pub fn as_instance(&self) -> Option<&ClassInstance> {
        match self {
            Object::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Write the language-level rendering of this value.
    ///
    /// Instances render through their `__str__` method when they have one,
    /// which is why printing needs the context.
    pub fn print(&self, out: &mut dyn Write, ctx: &mut dyn Context) -> RuntimeResult<()> {
        match self {
            Object::Number(n) => write!(out, "{n}")?,
            Object::String(s) => out.write_all(s.as_bytes())?,
            Object::Bool(true) => out.write_all(b"True")?,
            Object::Bool(false) => out.write_all(b"False")?,
            Object::Class(class) => write!(out, "Class {}", class.name())?,
            Object::Instance(instance) => return instance.print(out, ctx),
        }
        Ok(())
    }
}

#[derive(Clone)]
enum Link {
    Owned(Rc<Object>),
    Alias(Weak<Object>),
}

/// Nullable, reference-counted handle to a runtime value.
#[derive(Clone, Default)]
pub struct ObjectHandle(Option<Link>);

impl ObjectHandle {
    /// Owning handle to a fresh allocation.
    pub fn own(object: Object) -> Self {
        ObjectHandle(Some(Link::Owned(Rc::new(object))))
    }

    /// Non-owning alias to an existing object.
    pub fn share(object: &Rc<Object>) -> Self {
        ObjectHandle(Some(Link::Alias(Rc::downgrade(object))))
    }

    pub(crate) fn alias(object: Weak<Object>) -> Self {
        ObjectHandle(Some(Link::Alias(object)))
    }

    /// The empty handle (`None`).
    #[inline]
    pub fn none() -> Self {
        ObjectHandle(None)
    }

    pub fn number(value: i32) -> Self {
        Self::own(Object::Number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::own(Object::String(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Self::own(Object::Bool(value))
    }

    pub fn class(class: Rc<Class>) -> Self {
        Self::own(Object::Class(class))
    }

    /// Owning handle to a new instance of `class`.
    ///
    /// The instance starts with a single field, `self`, aliasing itself.
    pub fn instance(class: Rc<Class>) -> Self {
        ObjectHandle(Some(Link::Owned(ClassInstance::new_object(class))))
    }

    /// Dereference the handle.
    ///
    /// Fails with [`RuntimeError::InvalidHandle`] for the empty handle and
    /// for an alias whose object has been freed.
    pub fn get(&self) -> RuntimeResult<Rc<Object>> {
        self.try_get().ok_or(RuntimeError::InvalidHandle)
    }

    /// Dereference the handle, telling `None` apart from a freed alias.
    ///
    /// `Ok(None)` for the empty handle; [`RuntimeError::InvalidHandle`] for
    /// an alias whose object has been freed.
    pub fn resolve(&self) -> RuntimeResult<Option<Rc<Object>>> {
        match &self.0 {
            None => Ok(None),
            Some(_) => self.get().map(Some),
        }
    }

    /// Dereference the handle, or `None` if there is nothing behind it.
    pub fn try_get(&self) -> Option<Rc<Object>> {
        match &self.0 {
            Some(Link::Owned(object)) => Some(Rc::clone(object)),
            Some(Link::Alias(object)) => object.upgrade(),
            None => None,
        }
    }

    /// Whether the handle is non-empty.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    /// Whether the handle is empty (the language's `None`).
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Whether the handle is a non-owning alias.
    pub fn is_alias(&self) -> bool {
        matches!(self.0, Some(Link::Alias(_)))
    }

    /// Whether both handles refer to the same allocation.
    ///
    /// Two empty handles are not the same object.
    pub fn ptr_eq(&self, other: &ObjectHandle) -> bool {
        match (self.try_get(), other.try_get()) {
            (Some(a), Some(b)) => Rc::ptr_eq(&a, &b),
            _ => false,
        }
    }

    /// Kind name used in diagnostics.
    ///
    /// `None` for the empty handle, `<freed>` for a dangling alias.
    pub fn type_name(&self) -> &'static str {
        match self.resolve() {
            Ok(Some(object)) => object.kind_name(),
            Ok(None) => "None",
            Err(_) => "<freed>",
        }
    }

    /// The number behind the handle.
    ///
    /// Like the other `as_*` accessors this is a kind probe: any other kind,
    /// the empty handle and a dangling alias all answer `None`. Use
    /// [`ObjectHandle::resolve`] where a freed object must be an error.
    pub fn as_number(&self) -> Option<i32> {
        match self.try_get().as_deref() {
            Some(Object::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.try_get().as_deref() {
            Some(Object::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self.try_get().as_deref() {
            Some(Object::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<Rc<Class>> {
        match self.try_get().as_deref() {
            Some(Object::Class(class)) => Some(Rc::clone(class)),
            _ => None,
        }
    }

    pub fn is_instance(&self) -> bool {
        matches!(self.try_get().as_deref(), Some(Object::Instance(_)))
    }

    /// Write the value's rendering; the empty handle prints as `None`.
    pub fn print(&self, out: &mut dyn Write, ctx: &mut dyn Context) -> RuntimeResult<()> {
        match self.resolve()? {
            Some(object) => object.print(out, ctx),
            None => {
                out.write_all(b"None")?;
                Ok(())
            }
        }
    }

    /// Render the value to a string.
    pub fn render(&self, ctx: &mut dyn Context) -> RuntimeResult<String> {
        let mut buf = Vec::new();
        self.print(&mut buf, ctx)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the value's rendering to the context's own output.
    pub fn print_to_context(&self, ctx: &mut dyn Context) -> RuntimeResult<()> {
        let rendered = self.render(ctx)?;
        ctx.output().write_all(rendered.as_bytes())?;
        Ok(())
    }
}

impl From<Object> for ObjectHandle {
    fn from(object: Object) -> Self {
        Self::own(object)
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("None"),
            Some(Link::Owned(object)) => f.debug_tuple("Owned").field(object).finish(),
            Some(Link::Alias(object)) => match object.upgrade() {
                Some(object) => write!(f, "Alias({})", object.kind_name()),
                None => f.write_str("Alias(<freed>)"),
            },
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
