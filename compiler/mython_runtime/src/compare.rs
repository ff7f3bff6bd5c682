//! Truthiness and the comparison protocol.
//!
//! `equal` and `less` are the primitives; the other four operators are
//! defined strictly in terms of them. Each primitive tries, in order:
//!
//! 1. the left operand's user override (`__eq__` / `__lt__`), if it is an
//!    instance that defines one taking one argument
//! 2. value comparison, when both operands are the same primitive kind
//!    (`Number`, `String` or `Bool`)
//! 3. for equality only: two `None`s are equal
//!
//! Anything else is a [`RuntimeError::CannotCompare`]. An operand that is
//! an alias of a freed object fails with [`RuntimeError::InvalidHandle`]
//! before any of these steps.

use std::cmp::Ordering;
use std::slice;

use crate::context::Context;
use crate::errors::{Relation, RuntimeError, RuntimeResult};
use crate::object::{Object, ObjectHandle};

/// Equality override.
pub const EQ_METHOD: &str = "__eq__";
/// Ordering override.
pub const LT_METHOD: &str = "__lt__";

/// The language's truthiness rule.
///
/// `None`, classes, instances, `0`, `""` and `False` are false; everything
/// else is true. A dangling alias is [`RuntimeError::InvalidHandle`].
pub fn is_true(handle: &ObjectHandle) -> RuntimeResult<bool> {
    let Some(object) = handle.resolve()? else {
        return Ok(false);
    };
    Ok(match &*object {
        Object::Class(_) | Object::Instance(_) => false,
        Object::Number(n) => *n != 0,
        Object::String(s) => !s.is_empty(),
        Object::Bool(b) => *b,
    })
}

pub fn equal(lhs: &ObjectHandle, rhs: &ObjectHandle, ctx: &mut dyn Context) -> RuntimeResult<bool> {
    let (left, right) = (lhs.resolve()?, rhs.resolve()?);
    if let Some(result) = user_override(left.as_deref(), rhs, EQ_METHOD, ctx)? {
        return Ok(result);
    }
    if let Some(ordering) = compare_primitives(left.as_deref(), right.as_deref()) {
        return Ok(ordering == Ordering::Equal);
    }
    if left.is_none() && right.is_none() {
        return Ok(true);
    }
    Err(cannot_compare(Relation::Equality, lhs, rhs))
}

pub fn less(lhs: &ObjectHandle, rhs: &ObjectHandle, ctx: &mut dyn Context) -> RuntimeResult<bool> {
    let (left, right) = (lhs.resolve()?, rhs.resolve()?);
    if let Some(result) = user_override(left.as_deref(), rhs, LT_METHOD, ctx)? {
        return Ok(result);
    }
    if let Some(ordering) = compare_primitives(left.as_deref(), right.as_deref()) {
        return Ok(ordering == Ordering::Less);
    }
    Err(cannot_compare(Relation::Ordering, lhs, rhs))
}

pub fn not_equal(
    lhs: &ObjectHandle,
    rhs: &ObjectHandle,
    ctx: &mut dyn Context,
) -> RuntimeResult<bool> {
    Ok(!equal(lhs, rhs, ctx)?)
}

pub fn less_or_equal(
    lhs: &ObjectHandle,
    rhs: &ObjectHandle,
    ctx: &mut dyn Context,
) -> RuntimeResult<bool> {
    Ok(less(lhs, rhs, ctx)? || equal(lhs, rhs, ctx)?)
}

pub fn greater(
    lhs: &ObjectHandle,
    rhs: &ObjectHandle,
    ctx: &mut dyn Context,
) -> RuntimeResult<bool> {
    Ok(!less_or_equal(lhs, rhs, ctx)?)
}

pub fn greater_or_equal(
    lhs: &ObjectHandle,
    rhs: &ObjectHandle,
    ctx: &mut dyn Context,
) -> RuntimeResult<bool> {
    Ok(!less(lhs, rhs, ctx)?)
}

/// Run the left operand's override, coercing its result through
/// [`is_true`]. `None` if the left operand has no such override.
fn user_override(
    lhs: Option<&Object>,
    rhs: &ObjectHandle,
    method: &str,
    ctx: &mut dyn Context,
) -> RuntimeResult<Option<bool>> {
    let Some(Object::Instance(instance)) = lhs else {
        return Ok(None);
    };
    if !instance.has_method(method, 1) {
        tracing::debug!(
            class = instance.class().name(),
            method,
            "no comparison override, falling back"
        );
        return Ok(None);
    }
    let result = instance.call(method, slice::from_ref(rhs), ctx)?;
    Ok(Some(is_true(&result)?))
}

/// Ordering of two values of the same primitive kind.
fn compare_primitives(lhs: Option<&Object>, rhs: Option<&Object>) -> Option<Ordering> {
    match (lhs?, rhs?) {
        (Object::Number(a), Object::Number(b)) => Some(a.cmp(b)),
        (Object::String(a), Object::String(b)) => Some(a.cmp(b)),
        (Object::Bool(a), Object::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn cannot_compare(relation: Relation, lhs: &ObjectHandle, rhs: &ObjectHandle) -> RuntimeError {
    RuntimeError::CannotCompare {
        relation,
        left: lhs.type_name(),
        right: rhs.type_name(),
    }
}
