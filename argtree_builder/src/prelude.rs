//! Traits which, typically, may be imported without concern: `use argtree::prelude::*`.

/// Behaviour to check the raw values of an argument occurrence before conversion.
// Needs to be imported in order to implement a custom, stateful `Validator`.
// Closures of the shape `Fn(&[String]) -> Result<(), String>` are validators already.
pub trait Validator {
    /// Accept or reject the raw values; the rejection message is reported verbatim.
    fn validate(&self, values: &[String]) -> Result<(), String>;
}

impl<F> Validator for F
where
    F: Fn(&[String]) -> Result<(), String>,
{
    fn validate(&self, values: &[String]) -> Result<(), String> {
        self(values)
    }
}
