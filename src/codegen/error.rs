//! Code generation error type.

/// An error that occurred while walking a `class` node to emit VM text.
#[derive(Debug)]
pub struct CodegenError {
    pub message: String,
}

impl CodegenError {
    pub(super) fn not_a_class(found: &str) -> Self {
        CodegenError {
            message: format!("compile expects a 'class' node, found '{}'", found),
        }
    }

    pub(super) fn undefined_variable(name: &str) -> Self {
        CodegenError {
            message: format!("variable '{}' is not defined", name),
        }
    }

    /// A malformed tree shape that should be unreachable if the tree
    /// came from this crate's own parser; kept so codegen never panics
    /// on a hand-built or corrupted tree.
    pub(super) fn malformed_tree(message: impl Into<String>) -> Self {
        CodegenError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodegenError {}
