//! Classes, methods and the executor contract.
//!
//! A class is immutable once built. Method lookup walks the single
//! inheritance chain: the class's own methods first, then its parent's, and
//! so on. Parents are shared through `Rc`; the chain points only upward, so
//! it can never form a cycle.

use std::fmt;
use std::rc::Rc;

use crate::context::Context;
use crate::errors::RuntimeResult;
use crate::object::{Closure, ObjectHandle};

/// A method body, run by the external executor.
///
/// `closure` holds `self` and the bound parameters; the body may add locals
/// to it. The returned handle is the method's result (`None` if it returns
/// nothing).
pub trait Executable {
    fn execute(&self, closure: &mut Closure, ctx: &mut dyn Context)
        -> RuntimeResult<ObjectHandle>;
}

impl<F> Executable for F
where
    F: Fn(&mut Closure, &mut dyn Context) -> RuntimeResult<ObjectHandle>,
{
    fn execute(
        &self,
        closure: &mut Closure,
        ctx: &mut dyn Context,
    ) -> RuntimeResult<ObjectHandle> {
        self(closure, ctx)
    }
}

/// A named method with positional parameters.
pub struct Method {
    pub name: String,
    pub formal_params: Vec<String>,
    pub body: Box<dyn Executable>,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        formal_params: Vec<String>,
        body: Box<dyn Executable>,
    ) -> Self {
        Method {
            name: name.into(),
            formal_params,
            body,
        }
    }

    /// Method whose body is a Rust closure.
    pub fn native<F>(name: &str, formal_params: &[&str], body: F) -> Self
    where
        F: Fn(&mut Closure, &mut dyn Context) -> RuntimeResult<ObjectHandle> + 'static,
    {
        Method {
            name: name.to_string(),
            formal_params: formal_params.iter().map(ToString::to_string).collect(),
            body: Box::new(body),
        }
    }

    /// Number of formal parameters (`self` not counted).
    #[inline]
    pub fn arity(&self) -> usize {
        self.formal_params.len()
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.formal_params.join(", "))
    }
}

/// A user-defined class.
pub struct Class {
    name: String,
    methods: Vec<Method>,
    parent: Option<Rc<Class>>,
}

impl Class {
    pub fn new(name: impl Into<String>, methods: Vec<Method>, parent: Option<Rc<Class>>) -> Self {
        Class {
            name: name.into(),
            methods,
            parent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Rc<Class>> {
        self.parent.as_ref()
    }

    /// Methods defined directly on this class.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Find a method by name along the inheritance chain.
    ///
    /// The nearest definition wins, so a subclass method shadows a parent
    /// method of the same name regardless of arity. `None` means no class
    /// in the chain defines it.
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        let mut class = self;
        loop {
            if let Some(method) = class.methods.iter().find(|m| m.name == name) {
                return Some(method);
            }
            class = class.parent.as_deref()?;
        }
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("methods", &self.methods)
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .finish()
    }
}
