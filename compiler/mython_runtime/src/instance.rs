//! Class instances and method dispatch.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::io::Write;
use std::rc::{Rc, Weak};

use crate::class::Class;
use crate::context::Context;
use crate::errors::{RuntimeError, RuntimeResult};
use crate::object::{Closure, Object, ObjectHandle};
use crate::stack::ensure_sufficient_stack;

/// Name under which an instance sees itself.
pub const SELF: &str = "self";
/// Method used to render an instance.
pub const STR_METHOD: &str = "__str__";

/// An object of a user-defined class.
///
/// Fields persist across method calls; a call's locals live in a fresh
/// namespace that is dropped when the call returns.
pub struct ClassInstance {
    class: Rc<Class>,
    fields: RefCell<Closure>,
    /// The allocation holding this instance, only ever held weakly.
    this: Weak<Object>,
}

impl ClassInstance {
    /// Allocate an instance whose `self` field aliases the allocation.
    pub(crate) fn new_object(class: Rc<Class>) -> Rc<Object> {
        Rc::new_cyclic(|this| {
            let mut fields = Closure::default();
            fields.insert(SELF.to_string(), ObjectHandle::alias(this.clone()));
            Object::Instance(ClassInstance {
                class,
                fields: RefCell::new(fields),
                this: this.clone(),
            })
        })
    }

    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Read access to the fields.
    ///
    /// The borrow must be released before running a method of this instance,
    /// since method bodies may assign fields.
    pub fn fields(&self) -> Ref<'_, Closure> {
        self.fields.borrow()
    }

    /// Write access to the fields.
    pub fn fields_mut(&self) -> RefMut<'_, Closure> {
        self.fields.borrow_mut()
    }

    /// Non-owning handle to this instance.
    pub fn self_handle(&self) -> ObjectHandle {
        ObjectHandle::alias(self.this.clone())
    }

    /// Whether the class chain has `method` with exactly `arity` parameters.
    pub fn has_method(&self, method: &str, arity: usize) -> bool {
        self.class
            .get_method(method)
            .is_some_and(|m| m.arity() == arity)
    }

    /// Run `method` with `self` and the positional arguments bound in a
    /// fresh namespace.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(class = %self.class.name(), method = method, argc = args.len())
    )]
    pub fn call(
        &self,
        method: &str,
        args: &[ObjectHandle],
        ctx: &mut dyn Context,
    ) -> RuntimeResult<ObjectHandle> {
        let target = self
            .class
            .get_method(method)
            .filter(|m| m.arity() == args.len())
            .ok_or_else(|| RuntimeError::NoSuchMethod {
                class: self.class.name().to_string(),
                method: method.to_string(),
                arity: args.len(),
            })?;

        let mut locals = Closure::default();
        locals.insert(SELF.to_string(), self.self_handle());
        for (param, arg) in target.formal_params.iter().zip(args) {
            locals.insert(param.clone(), arg.clone());
        }

        ensure_sufficient_stack(|| target.body.execute(&mut locals, ctx))
    }

    /// Render through `__str__` if the class has a zero-argument one,
    /// otherwise as `<Name object at 0x...>`.
    pub fn print(&self, out: &mut dyn Write, ctx: &mut dyn Context) -> RuntimeResult<()> {
        if self.has_method(STR_METHOD, 0) {
            return self.call(STR_METHOD, &[], ctx)?.print(out, ctx);
        }
        write!(out, "<{} object at {:p}>", self.class.name(), self)?;
        Ok(())
    }
}

impl fmt::Debug for ClassInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = match self.fields.try_borrow() {
            Ok(fields) => fields.keys().cloned().collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        f.debug_struct("ClassInstance")
            .field("class", &self.class.name())
            .field("fields", &names)
            .finish()
    }
}
