use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// CODE DOCUMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Read-only view of the source template handed to classifier passes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeDocument {
    pub source_text: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub relative_path: Option<String>,
}

impl CodeDocument {
    pub fn new(source_text: &str) -> Self {
        Self {
            source_text: source_text.to_string(),
            file_path: None,
            relative_path: None,
        }
    }

    pub fn with_paths(
        source_text: &str,
        file_path: Option<&str>,
        relative_path: Option<&str>,
    ) -> Self {
        Self {
            source_text: source_text.to_string(),
            file_path: file_path.map(str::to_string),
            relative_path: relative_path.map(str::to_string),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// IR TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// Root of the intermediate tree for one view.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    /// Classification tag. Unset or empty means the document is unclassified.
    #[serde(default)]
    pub document_kind: Option<String>,
    #[serde(default)]
    pub children: Vec<IntermediateNode>,
    #[serde(default)]
    pub source_file_path: Option<String>,
    #[serde(default)]
    pub relative_path: Option<String>,
}

impl DocumentNode {
    /// Empty, unclassified root carrying the path metadata of `code_document`.
    pub fn for_code_document(code_document: &CodeDocument) -> Self {
        Self {
            document_kind: None,
            children: Vec::new(),
            source_file_path: code_document.file_path.clone(),
            relative_path: code_document.relative_path.clone(),
        }
    }

    pub fn is_classified(&self) -> bool {
        self.document_kind
            .as_deref()
            .map_or(false, |kind| !kind.is_empty())
    }

    /// Top-level directive nodes with the given name.
    pub fn directives<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DirectiveNode> {
        self.children.iter().filter_map(move |child| match child {
            IntermediateNode::Directive(d) if d.name == name => Some(d),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum IntermediateNode {
    Namespace(NamespaceDeclaration),
    Class(ClassDeclaration),
    Method(MethodDeclaration),
    Html(HtmlContent),
    Expression(ExpressionNode),
    Directive(DirectiveNode),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDeclaration {
    pub name: String,
    #[serde(default)]
    pub children: Vec<IntermediateNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    pub class_name: String,
    pub modifiers: Vec<String>,
    pub base_type: BaseType,
    #[serde(default)]
    pub children: Vec<IntermediateNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    pub method_name: String,
    pub return_type: String,
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub children: Vec<IntermediateNode>,
}

/// Literal markup emitted by lowering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HtmlContent {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionNode {
    pub code: String,
}

/// A directive such as `@page` or `@model`, with its raw tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveNode {
    pub name: String,
    #[serde(default)]
    pub tokens: Vec<String>,
}

/// Base type of a generated class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BaseType {
    Plain {
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    WithTypeArgument {
        name: String,
        type_argument: String,
    },
}

impl BaseType {
    pub fn name(&self) -> &str {
        match self {
            BaseType::Plain { name } | BaseType::WithTypeArgument { name, .. } => name,
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseType::Plain { name } => write!(f, "{}", name),
            BaseType::WithTypeArgument {
                name,
                type_argument,
            } => write!(f, "{}<{}>", name, type_argument),
        }
    }
}
