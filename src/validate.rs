use serde::{Deserialize, Serialize};

use crate::identifier::is_legal_identifier;
use crate::ir::{DocumentNode, IntermediateNode, NamespaceDeclaration};
use crate::visitor::{walk_class, walk_namespace, IntermediateNodeVisitor};

// ═══════════════════════════════════════════════════════════════════════════════
// INVARIANT CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const INV_UNCLASSIFIED: &str = "CLS001";
pub const INV_NAMESPACE_COUNT: &str = "CLS002";
pub const INV_CLASS_COUNT: &str = "CLS003";
pub const INV_ENTRY_POINT_COUNT: &str = "CLS004";
pub const INV_ILLEGAL_CLASS_NAME: &str = "CLS005";

fn get_guarantee(code: &str) -> &'static str {
    match code {
        INV_UNCLASSIFIED => "A classified document carries a non-empty document kind.",
        INV_NAMESPACE_COUNT => "A classified document has exactly one namespace declaration.",
        INV_CLASS_COUNT => "The namespace declares exactly one generated class.",
        INV_ENTRY_POINT_COUNT => "The generated class declares exactly one entry-point method.",
        INV_ILLEGAL_CLASS_NAME => {
            "Class names use only ASCII letters, digits and underscores and never start with a digit."
        }
        _ => "Unknown invariant.",
    }
}

/// A broken structural invariant on a classified tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierDiagnostic {
    pub code: String,
    pub message: String,
    pub guarantee: String,
}

impl ClassifierDiagnostic {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            guarantee: get_guarantee(code).to_string(),
        }
    }
}

/// Check the scaffold of a classified document.
///
/// Returns an empty list when the tree is well formed.
pub fn validate_classified(document: &DocumentNode) -> Vec<ClassifierDiagnostic> {
    let mut diagnostics = Vec::new();

    if !document.is_classified() {
        diagnostics.push(ClassifierDiagnostic::new(
            INV_UNCLASSIFIED,
            "Document kind is not set",
        ));
        return diagnostics;
    }

    let namespaces: Vec<&NamespaceDeclaration> = document
        .children
        .iter()
        .filter_map(|child| match child {
            IntermediateNode::Namespace(ns) => Some(ns),
            _ => None,
        })
        .collect();

    if namespaces.len() != 1 {
        diagnostics.push(ClassifierDiagnostic::new(
            INV_NAMESPACE_COUNT,
            &format!("Expected 1 namespace declaration, found {}", namespaces.len()),
        ));
        return diagnostics;
    }

    let mut counter = ScaffoldCounter::default();
    counter.visit_namespace(namespaces[0]);

    if counter.classes.len() != 1 {
        diagnostics.push(ClassifierDiagnostic::new(
            INV_CLASS_COUNT,
            &format!("Expected 1 class declaration, found {}", counter.classes.len()),
        ));
    }

    if counter.methods != 1 {
        diagnostics.push(ClassifierDiagnostic::new(
            INV_ENTRY_POINT_COUNT,
            &format!("Expected 1 method declaration, found {}", counter.methods),
        ));
    }

    for class_name in &counter.classes {
        if !is_legal_identifier(class_name) {
            diagnostics.push(ClassifierDiagnostic::new(
                INV_ILLEGAL_CLASS_NAME,
                &format!("Class name '{}' is not a legal identifier", class_name),
            ));
        }
    }

    diagnostics
}

#[derive(Default)]
struct ScaffoldCounter {
    classes: Vec<String>,
    methods: usize,
}

impl IntermediateNodeVisitor for ScaffoldCounter {
    fn visit_namespace(&mut self, namespace: &NamespaceDeclaration) {
        walk_namespace(self, namespace);
    }

    fn visit_class(&mut self, class: &crate::ir::ClassDeclaration) {
        self.classes.push(class.class_name.clone());
        walk_class(self, class);
    }

    fn visit_method(&mut self, _method: &crate::ir::MethodDeclaration) {
        self.methods += 1;
    }
}
