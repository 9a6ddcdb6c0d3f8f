//! Methodbook method IR
//!
//! This module defines the records that describe one documented method,
//! property or function of a containing object, and the parent objects those
//! records belong to.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Contract the registry relies on for the records it organizes.
///
/// Anything that has a selector, can be attached to a parent object and can
/// absorb the contents of another record with the same selector can be
/// registered.
pub trait MethodRecord: Clone {
    /// Unique identifier of the record within one registry.
    ///
    /// Must not change once the record is registered; the registry indexes
    /// records by selector.
    fn selector(&self) -> &str;

    /// Whether the record is a class method, instance method or property.
    fn kind(&self) -> MethodKind;

    /// The object this record is documented under, once registered.
    fn parent(&self) -> Option<&ParentObject>;

    /// Attach the record to `parent`. Called by the registry on registration.
    fn set_parent(&mut self, parent: ParentObject);

    /// Merge the data of `source` into `self`.
    ///
    /// `source` describes the same selector; implementations fill in what the
    /// receiver lacks instead of replacing it.
    fn merge_from(&mut self, source: &Self);
}

/// Kind of documented object that owns a set of methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentKind {
    /// A class
    Class,
    /// A named category on a class
    Category,
    /// A class extension (anonymous category)
    Extension,
    /// A protocol
    Protocol,
}

/// The containing object every method in a registry is associated with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentObject {
    /// Parent kind
    pub kind: ParentKind,
    /// Parent name (e.g. "NSString", "NSString(Additions)")
    pub name: String,
}

impl ParentObject {
    /// Create a parent object
    pub fn new(kind: ParentKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }

    /// Create a class parent
    pub fn class(name: impl Into<String>) -> Self { Self::new(ParentKind::Class, name) }

    /// Create a category parent
    pub fn category(name: impl Into<String>) -> Self { Self::new(ParentKind::Category, name) }

    /// Create a protocol parent
    pub fn protocol(name: impl Into<String>) -> Self { Self::new(ParentKind::Protocol, name) }

    /// A parent without a name does not identify anything.
    pub fn is_present(&self) -> bool { !self.name.trim().is_empty() }
}

impl fmt::Display for ParentObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ParentKind::Class => "class",
            ParentKind::Category => "category",
            ParentKind::Extension => "extension",
            ParentKind::Protocol => "protocol",
        };
        write!(f, "{} {}", kind, self.name)
    }
}

/// Method kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    /// Class method (`+`)
    ClassMethod,
    /// Instance method (`-`)
    InstanceMethod,
    /// Property
    Property,
}

/// Method argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodArgument {
    /// Argument variable name
    pub name: String,
    /// Declared argument type
    pub type_name: String,
}

/// Location a record was declared or documented at
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Source file path
    pub file: String,
    /// 1-based line number
    pub line: usize,
}

impl SourceInfo {
    /// Create a source location
    pub fn new(file: impl Into<String>, line: usize) -> Self { Self { file: file.into(), line } }
}

/// Documented method, property or function
///
/// The selector cannot be changed once the record exists:
///
/// ```compile_fail
/// let mut method = methodbook_ir::MethodDef::instance("foo");
/// method.selector = "renamed".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Selector, e.g. "initWithName:value:" or a property name.
    ///
    /// Fixed at construction: the registry indexes records by selector.
    selector: String,
    /// Method kind
    pub kind: MethodKind,
    /// Declared result type (property type for properties)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,
    /// Method arguments in declaration order
    #[serde(default)]
    pub arguments: Vec<MethodArgument>,
    /// Property attributes (e.g. "readonly", "copy")
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Documentation comment text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Every location this record was seen at
    #[serde(default)]
    pub source_infos: BTreeSet<SourceInfo>,
    /// Containing object, assigned by the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentObject>,
}

impl MethodDef {
    /// Create an empty record of the given kind
    pub fn new(kind: MethodKind, selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            kind,
            result_type: None,
            arguments: Vec::new(),
            attributes: Vec::new(),
            comment: None,
            source_infos: BTreeSet::new(),
            parent: None,
        }
    }

    /// Selector this record is identified by
    pub fn selector(&self) -> &str { &self.selector }

    /// Create an instance method
    pub fn instance(selector: impl Into<String>) -> Self {
        Self::new(MethodKind::InstanceMethod, selector)
    }

    /// Create a class method
    pub fn class(selector: impl Into<String>) -> Self {
        Self::new(MethodKind::ClassMethod, selector)
    }

    /// Create a property
    pub fn property(name: impl Into<String>) -> Self { Self::new(MethodKind::Property, name) }

    /// Set the result type
    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = Some(result_type.into());
        self
    }

    /// Append an argument
    pub fn with_argument(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.arguments.push(MethodArgument { name: name.into(), type_name: type_name.into() });
        self
    }

    /// Append a property attribute
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Set the documentation comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Record a source location
    pub fn with_source_info(mut self, file: impl Into<String>, line: usize) -> Self {
        self.source_infos.insert(SourceInfo::new(file, line));
        self
    }

    /// Whether a non-blank documentation comment is attached
    pub fn has_comment(&self) -> bool {
        self.comment.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

impl MethodRecord for MethodDef {
    fn selector(&self) -> &str { &self.selector }

    fn kind(&self) -> MethodKind { self.kind }

    fn parent(&self) -> Option<&ParentObject> { self.parent.as_ref() }

    fn set_parent(&mut self, parent: ParentObject) { self.parent = Some(parent); }

    fn merge_from(&mut self, source: &Self) {
        if !self.has_comment() && source.has_comment() {
            self.comment = source.comment.clone();
        }
        if self.result_type.is_none() {
            self.result_type = source.result_type.clone();
        }
        if self.arguments.is_empty() {
            self.arguments = source.arguments.clone();
        }
        if self.attributes.is_empty() {
            self.attributes = source.attributes.clone();
        }
        self.source_infos.extend(source.source_infos.iter().cloned());
    }
}
