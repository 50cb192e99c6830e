use std::fmt::Write;

/// Builds a query whose selection sets nest `depth` levels deep.
///
/// Each level selects an `id` leaf and a `child` field holding the
/// next level; the innermost set ends with a `label` leaf.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut source = String::with_capacity(depth * 24);
    source.push_str("query Nested {\n");
    for level in 1..=depth {
        let indent = "  ".repeat(level);
        writeln!(source, "{indent}child {{").unwrap();
        writeln!(source, "{indent}  id").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 1);
    writeln!(source, "{inner_indent}label").unwrap();
    for level in (1..=depth).rev() {
        let indent = "  ".repeat(level);
        writeln!(source, "{indent}}}").unwrap();
    }
    source.push_str("}\n");
    source
}

/// Builds a document holding `count` named query operations.
///
/// Each operation declares one variable, passes it as an argument,
/// and selects a handful of fields including an aliased one, so the
/// generated document exercises most of the executable grammar.
pub fn many_operations(count: usize) -> String {
    let mut source = String::with_capacity(count * 96);
    for index in 0..count {
        writeln!(source, "query Lookup{index}($id: ID!) {{").unwrap();
        writeln!(source, "  record(id: $id) {{").unwrap();
        writeln!(source, "    id").unwrap();
        writeln!(source, "    title").unwrap();
        writeln!(source, "    alias{index}: summary").unwrap();
        writeln!(source, "  }}").unwrap();
        writeln!(source, "}}\n").unwrap();
    }
    source
}
