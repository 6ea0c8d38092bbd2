//! Transitive reference walking for import-list generation.
//!
//! Each generated file needs the names it references, in the order the
//! walk first reaches them, with duplicates preserved so the emission
//! layer can decide how to dedupe per template.

use tracing::debug;

/// A resolved class definition and the names its body references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionClass {
    /// Definition name as it appears in the document.
    pub name: String,
    /// Referenced definition names, in declaration order.
    pub imports: Vec<String>,
}

/// A resolved enum definition. Enums reference nothing further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionEnum {
    /// Definition name as it appears in the document.
    pub name: String,
}

/// Collects the transitive references reachable from `seeds`, depth-first
/// and pre-order: a class name is appended before its own imports are
/// walked, an enum name is appended as a leaf, and a name matching no
/// definition is dropped.
///
/// Re-visiting a class through a different branch appends it again; only a
/// class already being expanded on the current walk path is appended
/// without expanding, so cyclic import graphs terminate while acyclic
/// graphs keep their full duplicate-preserving order.
pub fn find_deep_refs(
    seeds: &[String],
    classes: &[DefinitionClass],
    enums: &[DefinitionEnum],
) -> Vec<String> {
    let mut ordered = Vec::new();
    let mut active = Vec::new();
    for name in seeds {
        walk(name, classes, enums, &mut active, &mut ordered);
    }
    ordered
}

fn walk<'a>(
    name: &str,
    classes: &'a [DefinitionClass],
    enums: &[DefinitionEnum],
    active: &mut Vec<&'a str>,
    ordered: &mut Vec<String>,
) {
    if let Some(class) = classes.iter().find(|c| c.name == name) {
        ordered.push(class.name.clone());
        // A class already on the walk path would recurse forever.
        if active.iter().any(|n| *n == name) {
            return;
        }
        active.push(class.name.as_str());
        for import in &class.imports {
            walk(import, classes, enums, active, ordered);
        }
        active.pop();
    } else if let Some(enum_def) = enums.iter().find(|e| e.name == name) {
        ordered.push(enum_def.name.clone());
    } else {
        debug!(reference = name, "Dropping reference with no matching definition.");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::{DefinitionClass, DefinitionEnum, find_deep_refs};

    fn class(name: &str, imports: &[&str]) -> DefinitionClass {
        DefinitionClass {
            name: name.to_string(),
            imports: imports.iter().map(|i| (*i).to_string()).collect(),
        }
    }

    fn enum_def(name: &str) -> DefinitionEnum {
        DefinitionEnum {
            name: name.to_string(),
        }
    }

    fn seeds(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_class_then_its_imports() {
        let classes = [class("A", &["B"])];
        let enums = [enum_def("B")];
        assert_eq!(
            find_deep_refs(&seeds(&["A"]), &classes, &enums),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_unknown_names_are_dropped() {
        assert_eq!(find_deep_refs(&seeds(&["X"]), &[], &[]), Vec::<String>::new());

        let classes = [class("A", &["Missing", "B"])];
        let enums = [enum_def("B")];
        assert_eq!(
            find_deep_refs(&seeds(&["A"]), &classes, &enums),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_enums_are_leaves() {
        // B is an enum even though C would be reachable if it were a class.
        let classes = [class("A", &["B"]), class("C", &[])];
        let enums = [enum_def("B")];
        assert_eq!(
            find_deep_refs(&seeds(&["A", "C"]), &classes, &enums),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_classes_shadow_enums_with_the_same_name() {
        let classes = [class("A", &["B"]), class("B", &[])];
        let enums = [enum_def("B")];
        assert_eq!(
            find_deep_refs(&seeds(&["A"]), &classes, &enums),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_diamond_imports_keep_duplicates() {
        let classes = [
            class("A", &["B", "C"]),
            class("B", &["D"]),
            class("C", &["D"]),
            class("D", &[]),
        ];
        assert_eq!(
            find_deep_refs(&seeds(&["A"]), &classes, &[]),
            vec!["A", "B", "D", "C", "D"]
        );
    }

    #[test]
    fn test_cycle_terminates_with_one_extra_mention() {
        let classes = [class("A", &["B"]), class("B", &["A"])];
        assert_eq!(
            find_deep_refs(&seeds(&["A"]), &classes, &[]),
            vec!["A", "B", "A"]
        );
    }

    #[test]
    fn test_self_import_terminates() {
        let classes = [class("A", &["A"])];
        assert_eq!(
            find_deep_refs(&seeds(&["A"]), &classes, &[]),
            vec!["A", "A"]
        );
    }

    #[test]
    fn test_seed_order_is_preserved() {
        let classes = [class("B", &[]), class("A", &[])];
        assert_eq!(
            find_deep_refs(&seeds(&["A", "B", "A"]), &classes, &[]),
            vec!["A", "B", "A"]
        );
    }
}
