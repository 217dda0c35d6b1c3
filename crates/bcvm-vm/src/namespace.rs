//! Variable scopes.
//!
//! All namespaces live in a single [`Namespaces`] arena and refer to their
//! enclosing scope by id. Index 0 is the global namespace. Top-level frames
//! use the global id directly, so their locals *are* the globals.
//!
//! Reads walk from a scope up through its parents. Writes always land in the
//! scope they target, shadowing any binding of the same name further up.
//! Releasing a scope frees only that scope.

use std::fmt;

use indexmap::IndexMap;

use crate::error::VmError;
use crate::value::Value;

/// Index of a namespace in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(u32);

impl NamespaceId {
    fn new(index: usize) -> Self {
        NamespaceId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Id of the global namespace.
pub const GLOBAL_NS: NamespaceId = NamespaceId(0);

/// One scope: insertion-ordered bindings plus an optional parent.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    bindings: IndexMap<String, Value>,
    parent: Option<NamespaceId>,
}

impl Namespace {
    pub fn new(parent: Option<NamespaceId>) -> Self {
        Self {
            bindings: IndexMap::new(),
            parent,
        }
    }

    pub fn parent(&self) -> Option<NamespaceId> {
        self.parent
    }

    /// Look up a name in this scope only.
    pub fn get_local(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bind a name in this scope, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Arena of all live namespaces.
///
/// Scopes are released one at a time, in any order. A released id stays
/// dead: lookups through it fail with [`VmError::ReleasedNamespace`].
#[derive(Debug)]
pub struct Namespaces {
    global: Namespace,
    /// Slot `i` holds the scope with id `i + 1`.
    locals: Vec<Option<Namespace>>,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespaces {
    /// Create an arena holding only the (empty) global namespace.
    pub fn new() -> Self {
        Self {
            global: Namespace::new(None),
            locals: Vec::new(),
        }
    }

    /// Create a new scope whose reads fall back to `parent`.
    pub fn push(&mut self, parent: Option<NamespaceId>) -> NamespaceId {
        self.locals.push(Some(Namespace::new(parent)));
        NamespaceId::new(self.locals.len())
    }

    /// Drop a single scope. Scopes created after it are untouched, and the
    /// global namespace is never released.
    pub fn release(&mut self, id: NamespaceId) {
        if id == GLOBAL_NS {
            return;
        }
        if let Some(slot) = self.locals.get_mut(id.index() - 1) {
            *slot = None;
        }
        while matches!(self.locals.last(), Some(None)) {
            self.locals.pop();
        }
    }

    /// Number of live scopes, globals included.
    pub fn len(&self) -> usize {
        1 + self.locals.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The scope behind `id`, or `None` once it has been released.
    pub fn scope(&self, id: NamespaceId) -> Option<&Namespace> {
        if id == GLOBAL_NS {
            return Some(&self.global);
        }
        self.locals.get(id.index() - 1)?.as_ref()
    }

    pub fn scope_mut(&mut self, id: NamespaceId) -> Option<&mut Namespace> {
        if id == GLOBAL_NS {
            return Some(&mut self.global);
        }
        self.locals.get_mut(id.index() - 1)?.as_mut()
    }

    pub fn global(&self) -> &Namespace {
        &self.global
    }

    pub fn global_mut(&mut self) -> &mut Namespace {
        &mut self.global
    }

    /// Resolve a name starting at `id` and walking up through parents.
    pub fn get(&self, id: NamespaceId, name: &str) -> Result<&Value, VmError> {
        let mut current = Some(id);
        while let Some(id) = current {
            let scope = self.scope(id).ok_or(VmError::ReleasedNamespace(id))?;
            if let Some(value) = scope.get_local(name) {
                return Ok(value);
            }
            current = scope.parent;
        }
        Err(VmError::VariableNotFound(name.to_string()))
    }

    /// Bind a name in scope `id` itself.
    pub fn set(
        &mut self,
        id: NamespaceId,
        name: impl Into<String>,
        value: Value,
    ) -> Result<(), VmError> {
        let scope = self.scope_mut(id).ok_or(VmError::ReleasedNamespace(id))?;
        scope.set(name, value);
        Ok(())
    }

    /// True if `get` would succeed.
    pub fn exists(&self, id: NamespaceId, name: &str) -> bool {
        self.get(id, name).is_ok()
    }
}
