//! Named groups of registered methods

use crate::MethodHandle;

/// An ordered, named grouping of methods.
///
/// A section without a name is the default section created when methods are
/// registered before any section.
#[derive(Debug)]
pub struct Section<M> {
    name: Option<String>,
    methods: Vec<MethodHandle<M>>,
}

impl<M> Section<M> {
    pub(crate) fn new(name: Option<String>) -> Self { Self { name, methods: Vec::new() } }

    pub(crate) fn push(&mut self, method: MethodHandle<M>) { self.methods.push(method); }

    /// Section name, `None` for the unnamed default section
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }

    /// Whether this is an unnamed section
    pub fn is_default(&self) -> bool { self.name.is_none() }

    /// Methods in registration order
    pub fn methods(&self) -> &[MethodHandle<M>] { &self.methods }

    /// Number of methods in the section
    pub fn len(&self) -> usize { self.methods.len() }

    /// Whether the section has no methods
    pub fn is_empty(&self) -> bool { self.methods.is_empty() }
}
