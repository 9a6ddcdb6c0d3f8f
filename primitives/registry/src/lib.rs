#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Method Registry — organizes the documented methods of one object.
//!
//! A [`MethodRegistry`] is bound to a parent object (a class, category or
//! protocol) and collects the method records parsed for it. Methods are kept
//! in three views at once: the named [`Section`]s they were declared under,
//! a flat list in registration order, and an index by selector. Registries
//! built from different sources for the same object can be combined with
//! [`MethodRegistry::merge_from`].
//!
//! Registries are append-only and single-threaded; build one per worker and
//! merge them afterwards if parsing is parallelized.

mod error;
mod handle;
mod merge;
mod section;

use std::collections::BTreeMap;

use ir::{MethodDef, MethodKind, MethodRecord, ParentObject};
use tracing::{debug, trace, warn};

pub use error::{RegistryError, RegistryResult};
pub use handle::MethodHandle;
pub use section::Section;

/// Sections, methods and the selector index for one parent object.
#[derive(Debug)]
pub struct MethodRegistry<M: MethodRecord = MethodDef> {
    parent: ParentObject,
    sections: Vec<Section<M>>,
    methods: Vec<MethodHandle<M>>,
    /// Section index of each entry in `methods`
    placements: Vec<usize>,
    /// Map from selector to position in `methods`
    methods_by_selector: BTreeMap<String, usize>,
    current_section: Option<usize>,
    implicit_default_section: bool,
}

impl<M: MethodRecord> MethodRegistry<M> {
    /// Create an empty registry bound to `parent`.
    ///
    /// Every registered method gets `parent` assigned. Fails with
    /// [`RegistryError::MissingParent`] if the parent has no name.
    pub fn new(parent: ParentObject) -> RegistryResult<Self> {
        if !parent.is_present() {
            return Err(RegistryError::MissingParent);
        }
        Ok(Self {
            parent,
            sections: Vec::new(),
            methods: Vec::new(),
            placements: Vec::new(),
            methods_by_selector: BTreeMap::new(),
            current_section: None,
            implicit_default_section: false,
        })
    }

    /// The parent object assigned to every registered method
    pub fn parent(&self) -> &ParentObject { &self.parent }

    /// Register a new section and make it current.
    ///
    /// An empty `name` creates an unnamed section. Reusing the name of an
    /// existing section logs a warning but the section is still added.
    pub fn register_section(&mut self, name: &str) -> &Section<M> {
        let name = Some(name.trim()).filter(|n| !n.is_empty()).map(str::to_string);

        if let Some(name) = name.as_deref() {
            if self.sections.iter().any(|s| s.name() == Some(name)) {
                warn!(
                    parent = %self.parent,
                    section = name,
                    "section is already registered, adding another section with the same name"
                );
            }
        }
        if self.implicit_default_section {
            warn!(
                parent = %self.parent,
                section = name.as_deref().unwrap_or_default(),
                "registering a section after methods were added to the default section"
            );
        }

        trace!(parent = %self.parent, section = ?name, "registering section");
        self.sections.push(Section::new(name));
        let index = self.sections.len() - 1;
        self.current_section = Some(index);
        &self.sections[index]
    }

    /// Register a section only if `name` is present and non-empty.
    pub fn register_section_if_valid(&mut self, name: Option<&str>) -> Option<&Section<M>> {
        match name {
            Some(name) if !name.trim().is_empty() => Some(self.register_section(name)),
            _ => None,
        }
    }

    /// All sections in registration order
    pub fn sections(&self) -> &[Section<M>] { &self.sections }

    /// Register `method` in the current section.
    ///
    /// Registering an instance that is already registered does nothing. A
    /// different instance with an already registered selector is rejected with
    /// [`RegistryError::DuplicateSelector`] and leaves the registry unchanged.
    /// If no section exists yet, an unnamed default section is created.
    /// Fails with [`RegistryError::RecordInUse`] if the caller still holds a
    /// borrow of the record.
    pub fn register_method(&mut self, method: MethodHandle<M>) -> RegistryResult<()> {
        if self.contains(&method) {
            return Ok(());
        }
        let selector = {
            let record = method.try_borrow().map_err(|_| self.record_in_use())?;
            record.selector().to_string()
        };
        self.check_selector(&selector)?;
        self.assign_parent(&method)?;
        let section = self.current_section_index();
        self.attach(section, selector, method);
        Ok(())
    }

    /// Method registered under `selector`, if any.
    pub fn method_by_selector(&self, selector: &str) -> Option<&MethodHandle<M>> {
        if selector.is_empty() {
            return None;
        }
        self.methods_by_selector.get(selector).map(|&position| &self.methods[position])
    }

    /// All methods in registration order
    pub fn methods(&self) -> &[MethodHandle<M>] { &self.methods }

    /// Whether this exact method instance is registered
    pub fn contains(&self, method: &MethodHandle<M>) -> bool {
        self.methods.iter().any(|m| m.ptr_eq(method))
    }

    /// Number of registered methods
    pub fn len(&self) -> usize { self.methods.len() }

    /// Whether no method is registered
    pub fn is_empty(&self) -> bool { self.methods.is_empty() }

    /// Registered class methods in registration order
    pub fn class_methods(&self) -> impl Iterator<Item = &MethodHandle<M>> {
        self.methods_of_kind(MethodKind::ClassMethod)
    }

    /// Registered instance methods in registration order
    pub fn instance_methods(&self) -> impl Iterator<Item = &MethodHandle<M>> {
        self.methods_of_kind(MethodKind::InstanceMethod)
    }

    /// Registered properties in registration order
    pub fn properties(&self) -> impl Iterator<Item = &MethodHandle<M>> {
        self.methods_of_kind(MethodKind::Property)
    }

    /// Whether any class method is registered
    pub fn has_class_methods(&self) -> bool { self.class_methods().next().is_some() }

    /// Whether any instance method is registered
    pub fn has_instance_methods(&self) -> bool { self.instance_methods().next().is_some() }

    /// Whether any property is registered
    pub fn has_properties(&self) -> bool { self.properties().next().is_some() }

    fn methods_of_kind(&self, kind: MethodKind) -> impl Iterator<Item = &MethodHandle<M>> {
        self.methods.iter().filter(move |m| m.borrow().kind() == kind)
    }

    fn check_selector(&self, selector: &str) -> RegistryResult<()> {
        if selector.is_empty() {
            return Err(RegistryError::EmptySelector { parent: self.parent.to_string() });
        }
        if self.methods_by_selector.contains_key(selector) {
            return Err(RegistryError::DuplicateSelector {
                selector: selector.to_string(),
                parent: self.parent.to_string(),
            });
        }
        Ok(())
    }

    fn record_in_use(&self) -> RegistryError {
        RegistryError::RecordInUse { parent: self.parent.to_string() }
    }

    fn assign_parent(&self, method: &MethodHandle<M>) -> RegistryResult<()> {
        let mut record = method.try_borrow_mut().map_err(|_| self.record_in_use())?;
        record.set_parent(self.parent.clone());
        Ok(())
    }

    /// Current section, creating the unnamed default section when none exists.
    fn current_section_index(&mut self) -> usize {
        if let Some(index) = self.current_section {
            return index;
        }
        debug!(parent = %self.parent, "creating default section");
        self.sections.push(Section::new(None));
        self.implicit_default_section = true;
        let index = self.sections.len() - 1;
        self.current_section = Some(index);
        index
    }

    fn find_section(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name() == Some(name))
    }

    /// Add a validated method, whose parent is already set, to `section` and
    /// every index.
    fn attach(&mut self, section: usize, selector: String, method: MethodHandle<M>) {
        trace!(parent = %self.parent, selector = %selector, section, "registering method");

        self.sections[section].push(method.clone());
        self.methods_by_selector.insert(selector, self.methods.len());
        self.methods.push(method);
        self.placements.push(section);
    }
}

/// Read-only interface to a `MethodRegistry`.
///
/// Provides lookups for consumers such as renderers without exposing
/// registration.
pub trait MethodRegistryReader {
    /// Record type held by the registry
    type Method: MethodRecord;

    /// Selectors of all methods in registration order
    fn list_selectors(&self) -> Vec<String>;

    /// Get a method by selector.
    ///
    /// Returns `None` if no method with the given selector exists.
    fn get_method(&self, selector: &str) -> Option<&MethodHandle<Self::Method>>;

    /// Total number of registered methods
    fn method_count(&self) -> usize;

    /// Total number of sections
    fn section_count(&self) -> usize;
}

impl<M: MethodRecord> MethodRegistryReader for MethodRegistry<M> {
    type Method = M;

    fn list_selectors(&self) -> Vec<String> { self.methods.iter().map(|m| m.selector()).collect() }

    fn get_method(&self, selector: &str) -> Option<&MethodHandle<M>> {
        self.method_by_selector(selector)
    }

    fn method_count(&self) -> usize { self.methods.len() }

    fn section_count(&self) -> usize { self.sections.len() }
}
