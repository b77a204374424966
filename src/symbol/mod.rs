//! The two-level symbol table: a shared class scope (`static`/`field`)
//! and a per-subroutine scope (`argument`/`local`) stacked on top of it.
//!
//! Jack only ever has exactly two scope levels, so this models them as
//! two concrete types rather than a generic `Vec<Scope>` stack. See
//! `DESIGN.md` for why a generalization to N levels was rejected.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// A symbol's storage class. Maps directly onto the VM segment used for
/// its `push`/`pop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Static,
    Field,
    Argument,
    Local,
}

impl Kind {
    /// The VM segment name this kind pushes/pops from.
    pub fn segment(&self) -> &'static str {
        match self {
            Kind::Static => "static",
            Kind::Field => "this",
            Kind::Argument => "argument",
            Kind::Local => "local",
        }
    }
}

/// A declared name: its Jack type, its storage kind, and its index
/// within that kind's scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub type_name: String,
    pub kind: Kind,
    pub index: u16,
}

/// The class-level scope: every `static` and `field` variable declared
/// directly in a `class` node, plus which subroutine names are
/// `method`s (needed to resolve unqualified calls to the
/// method-vs-function calling convention).
#[derive(Debug, Default)]
pub struct ClassScope {
    symbols: HashMap<String, Symbol>,
    counts: HashMap<Kind, u16>,
    method_names: HashSet<String>,
}

impl ClassScope {
    pub fn new() -> Self {
        ClassScope::default()
    }

    /// Declares `name` with the given type and kind, assigning it the
    /// next dense index for that kind. Later declarations of the same
    /// name shadow earlier ones in lookup but do not reuse the index.
    pub fn declare(&mut self, name: impl Into<String>, type_name: impl Into<String>, kind: Kind) {
        let index = *self.counts.get(&kind).unwrap_or(&0);
        self.counts.insert(kind, index + 1);
        self.symbols.insert(
            name.into(),
            Symbol {
                type_name: type_name.into(),
                kind,
                index,
            },
        );
    }

    /// Records that `name` is a `method` subroutine of this class.
    pub fn declare_method(&mut self, name: impl Into<String>) {
        self.method_names.insert(name.into());
    }

    pub fn is_method(&self, name: &str) -> bool {
        self.method_names.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// The number of declared symbols of the given kind.
    pub fn count(&self, kind: Kind) -> u16 {
        *self.counts.get(&kind).unwrap_or(&0)
    }
}

/// The subroutine-level scope: `argument` and `local` variables, with a
/// shared read-only class scope stacked underneath. Built fresh per
/// `subroutineDec` and discarded once that subroutine's VM code is
/// emitted.
#[derive(Debug)]
pub struct SubroutineScope {
    symbols: HashMap<String, Symbol>,
    counts: HashMap<Kind, u16>,
    class_scope: Rc<ClassScope>,
}

impl SubroutineScope {
    pub fn new(class_scope: Rc<ClassScope>) -> Self {
        SubroutineScope {
            symbols: HashMap::new(),
            counts: HashMap::new(),
            class_scope,
        }
    }

    pub fn declare(&mut self, name: impl Into<String>, type_name: impl Into<String>, kind: Kind) {
        let index = *self.counts.get(&kind).unwrap_or(&0);
        self.counts.insert(kind, index + 1);
        self.symbols.insert(
            name.into(),
            Symbol {
                type_name: type_name.into(),
                kind,
                index,
            },
        );
    }

    /// Looks up `name`, innermost scope first.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name).or_else(|| self.class_scope.get(name))
    }

    pub fn count(&self, kind: Kind) -> u16 {
        *self.counts.get(&kind).unwrap_or(&0)
    }

    pub fn class_scope(&self) -> &ClassScope {
        &self.class_scope
    }
}
