use std::cell::RefCell;
use std::fs::File;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::model::ArgumentValue;

pub(crate) type ValueCell = Rc<RefCell<ArgumentValue>>;

/// Access to the eventual value of a declared argument.
///
/// Handles are returned at declaration time and read after parsing.
/// The type `T` is decided by the argument kind:
///
/// | kind | `T` |
/// |------|-----|
/// | flag | `bool` |
/// | counter | `i64` |
/// | string, selector | `Option<String>` |
/// | int | `Option<i64>` |
/// | float | `Option<f64>` |
/// | file | `Option<File>` |
/// | string list | `Vec<String>` |
/// | int list | `Vec<i64>` |
/// | float list | `Vec<f64>` |
/// | file list | `Vec<File>` |
pub struct Handle<T> {
    value: ValueCell,
    _phantom: PhantomData<T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(value: ValueCell) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle::new(self.value.clone())
    }
}

impl<T> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handle[{:?}]", self.value.borrow())
    }
}

impl<T: Extract> Handle<T> {
    /// Read a copy of the current value.
    pub fn get(&self) -> T {
        T::extract(&self.value.borrow())
    }
}

impl<T: Take> Handle<T> {
    /// Move the current value out, leaving the empty value behind.
    /// This is how file handles are handed over to the caller.
    pub fn take(&self) -> T {
        T::take(&mut self.value.borrow_mut())
    }
}

/// Behaviour to read a `T` out of an [`ArgumentValue`] by copy.
#[doc(hidden)]
pub trait Extract: Sized {
    fn extract(value: &ArgumentValue) -> Self;
}

/// Behaviour to move a `T` out of an [`ArgumentValue`].
#[doc(hidden)]
pub trait Take: Sized {
    fn take(value: &mut ArgumentValue) -> Self;
}

macro_rules! access {
    ($t:ty, $($variant:ident),+) => {
        impl Extract for $t {
            fn extract(value: &ArgumentValue) -> Self {
                match value {
                    $(ArgumentValue::$variant(inner) => inner.clone(),)+
                    _ => unreachable!("internal error - handle kind must match its argument"),
                }
            }
        }

        impl Take for $t {
            fn take(value: &mut ArgumentValue) -> Self {
                match value {
                    $(ArgumentValue::$variant(inner) => std::mem::take(inner),)+
                    _ => unreachable!("internal error - handle kind must match its argument"),
                }
            }
        }
    };
}

access!(bool, Flag);
access!(i64, Counter);
access!(Option<String>, String, Selector);
access!(Option<i64>, Int);
access!(Option<f64>, Float);
access!(Vec<String>, StringList);
access!(Vec<i64>, IntList);
access!(Vec<f64>, FloatList);

// Open files cannot be copied, only handed over.
impl Take for Option<File> {
    fn take(value: &mut ArgumentValue) -> Self {
        match value {
            ArgumentValue::File(inner) => inner.take(),
            _ => unreachable!("internal error - handle kind must match its argument"),
        }
    }
}

impl Take for Vec<File> {
    fn take(value: &mut ArgumentValue) -> Self {
        match value {
            ArgumentValue::FileList(inner) => std::mem::take(inner),
            _ => unreachable!("internal error - handle kind must match its argument"),
        }
    }
}
