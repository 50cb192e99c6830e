use crate::ast::Argument;
use crate::ast::Directive;

/// Appends an argument list `(a: 1, b: 2)` to `sink`, or nothing when
/// `arguments` is empty.
pub(crate) fn append_arguments(arguments: &[Argument], sink: &mut String) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 {
            sink.push_str(", ");
        }
        argument.append_source(sink);
    }
    sink.push(')');
}

/// Appends ` @dir1 @dir2(x: 1)` to `sink`, one space-prefixed directive at a
/// time, or nothing when `directives` is empty.
pub(crate) fn append_directives(directives: &[Directive], sink: &mut String) {
    for directive in directives {
        sink.push(' ');
        directive.append_source(sink);
    }
}

/// Trait implemented by all AST node types. Provides source
/// reconstruction methods.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities (error formatters, linters, etc.).
///
/// Nodes carry no source positions, so reconstruction is always synthetic:
/// the tree is walked and keywords, names, values, and punctuation are
/// emitted with standard spacing. The output is semantically equivalent to
/// the original text (parsing it back yields an equal tree) but not
/// formatting-identical.
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(&self, sink: &mut String);

    /// Return this node as a source string.
    ///
    /// Convenience wrapper around [`append_source`](AstNode::append_source).
    fn to_source(&self) -> String {
        let mut s = String::new();
        self.append_source(&mut s);
        s
    }
}
