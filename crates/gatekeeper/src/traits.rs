//! Core rule trait and field accessors

use crate::error::ValidationError;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A unit of validation logic bound to one field of `T`.
///
/// Implementations are immutable once built; evaluating a rule must not
/// mutate either the rule or the object.
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Check the object, returning the failure when the rule does not pass
    fn evaluate(&self, object: &T) -> Result<(), ValidationError>;

    /// The field name failures are reported under
    fn field(&self) -> &str;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;

    /// Get validation rule parameters/configuration as JSON
    fn parameters(&self) -> Option<Value> {
        None
    }
}

type ReadFn<T> = dyn for<'a> Fn(&'a T) -> Cow<'a, str> + Send + Sync;

fn erase<T, F>(read: F) -> Arc<ReadFn<T>>
where
    T: ?Sized,
    F: for<'a> Fn(&'a T) -> Cow<'a, str> + Send + Sync + 'static,
{
    Arc::new(read)
}

/// Extracts the text of one field from an object.
///
/// Accessors either borrow a field straight out of the object or derive an
/// owned value from it, which lets a rule target computed data under any
/// field name the caller picks.
pub struct FieldAccessor<T: ?Sized> {
    read: Arc<ReadFn<T>>,
}

impl<T: ?Sized + 'static> FieldAccessor<T> {
    /// Accessor borrowing a string field of the object
    pub fn new<F>(accessor: F) -> Self
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self {
            read: erase(move |object| Cow::Borrowed(accessor(object))),
        }
    }

    /// Accessor computing an owned value from the object
    pub fn derived<F>(accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            read: erase(move |object| Cow::Owned(accessor(object))),
        }
    }
}

impl<T: ?Sized> FieldAccessor<T> {
    /// Read the field from an object
    pub fn read<'a>(&self, object: &'a T) -> Cow<'a, str> {
        (self.read)(object)
    }
}

impl<T: ?Sized> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        Self {
            read: Arc::clone(&self.read),
        }
    }
}

impl<T: ?Sized> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor").finish_non_exhaustive()
    }
}
