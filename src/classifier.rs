//! # Document Classifier Passes
//!
//! A classifier pass stamps an unclassified [`DocumentNode`] with its document
//! kind and appends the generated-class scaffold:
//!
//! ```text
//! Document (kind)
//! └── Namespace (root namespace)
//!     └── Class (synthesized name, base type)
//!         └── Method (ExecuteAsync)
//! ```
//!
//! ## Key Invariants
//!
//! 1. **First Pass Wins**: a document whose kind is non-empty is never touched again.
//!    The guard lives on the document, so any number of passes can be chained.
//! 2. **Append Only**: nodes produced by lowering stay where they are; the scaffold
//!    is appended after them.
//! 3. **Total**: classification cannot fail. Missing paths fall back to a content checksum.

use tracing::{debug, trace};

use crate::identifier;
use crate::ir::{
    BaseType, ClassDeclaration, CodeDocument, DocumentNode, IntermediateNode, MethodDeclaration,
    NamespaceDeclaration,
};
use crate::options::ClassifierOptions;

pub const MVC_VIEW_DOCUMENT_KIND: &str = "mvc.1.0.view";
pub const RAZOR_PAGE_DOCUMENT_KIND: &str = "mvc.1.0.razor-page";

pub const VIEW_BASE_TYPE: &str = "global::Microsoft.AspNetCore.Mvc.Razor.RazorPage";
pub const PAGE_BASE_TYPE: &str = "global::Microsoft.AspNetCore.Mvc.RazorPages.Page";
pub const MODEL_TYPE_PARAMETER: &str = "TModel";

pub const ENTRY_POINT_METHOD: &str = "ExecuteAsync";
pub const ENTRY_POINT_RETURN_TYPE: &str = "global::System.Threading.Tasks.Task";

/// Directive that marks a template as a routable page.
pub const PAGE_DIRECTIVE: &str = "page";

/// Contract shared by every classifier pass.
///
/// Implementers describe their variant (kind, match rule, base type); the
/// provided [`classify`](DocumentClassifierPass::classify) applies the guard and
/// builds the tree.
pub trait DocumentClassifierPass: Send + Sync {
    fn document_kind(&self) -> &str;

    fn options(&self) -> &ClassifierOptions;

    fn base_type(&self) -> BaseType;

    fn is_match(&self, _code_document: &CodeDocument, _document: &DocumentNode) -> bool {
        true
    }

    fn create_class(&self, code_document: &CodeDocument) -> ClassDeclaration {
        let class_name = identifier::synthesize(
            code_document.relative_path.as_deref(),
            code_document.file_path.as_deref(),
            &code_document.source_text,
        );

        ClassDeclaration {
            class_name,
            modifiers: vec!["public".to_string()],
            base_type: self.base_type(),
            children: Vec::new(),
        }
    }

    fn create_entry_point(&self) -> MethodDeclaration {
        MethodDeclaration {
            method_name: ENTRY_POINT_METHOD.to_string(),
            return_type: ENTRY_POINT_RETURN_TYPE.to_string(),
            modifiers: vec![
                "public".to_string(),
                "async".to_string(),
                "override".to_string(),
            ],
            children: Vec::new(),
        }
    }

    /// Classify `document` if nobody has yet. Returns whether this pass claimed it.
    fn classify(&self, code_document: &CodeDocument, document: &mut DocumentNode) -> bool {
        if document.is_classified() {
            trace!(
                kind = document.document_kind.as_deref().unwrap_or_default(),
                "document already classified, skipping {}",
                self.document_kind()
            );
            return false;
        }

        if !self.is_match(code_document, document) {
            trace!("{} does not match document", self.document_kind());
            return false;
        }

        document.document_kind = Some(self.document_kind().to_string());

        let mut class = self.create_class(code_document);
        class
            .children
            .push(IntermediateNode::Method(self.create_entry_point()));

        debug!(
            kind = self.document_kind(),
            class = %class.class_name,
            base = %class.base_type,
            "classified document"
        );

        document
            .children
            .push(IntermediateNode::Namespace(NamespaceDeclaration {
                name: self.options().root_namespace.clone(),
                children: vec![IntermediateNode::Class(class)],
            }));

        true
    }
}

/// Classifies any template as an MVC view deriving from `RazorPage<TModel>`.
#[derive(Debug, Clone, Default)]
pub struct MvcViewDocumentClassifierPass {
    options: ClassifierOptions,
}

impl MvcViewDocumentClassifierPass {
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }
}

impl DocumentClassifierPass for MvcViewDocumentClassifierPass {
    fn document_kind(&self) -> &str {
        MVC_VIEW_DOCUMENT_KIND
    }

    fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    fn base_type(&self) -> BaseType {
        BaseType::WithTypeArgument {
            name: VIEW_BASE_TYPE.to_string(),
            type_argument: MODEL_TYPE_PARAMETER.to_string(),
        }
    }
}

/// Classifies templates carrying a top-level `@page` directive as Razor pages.
#[derive(Debug, Clone, Default)]
pub struct RazorPageDocumentClassifierPass {
    options: ClassifierOptions,
}

impl RazorPageDocumentClassifierPass {
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }
}

impl DocumentClassifierPass for RazorPageDocumentClassifierPass {
    fn document_kind(&self) -> &str {
        RAZOR_PAGE_DOCUMENT_KIND
    }

    fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    fn base_type(&self) -> BaseType {
        BaseType::Plain {
            name: PAGE_BASE_TYPE.to_string(),
        }
    }

    fn is_match(&self, _code_document: &CodeDocument, document: &DocumentNode) -> bool {
        document.directives(PAGE_DIRECTIVE).next().is_some()
    }
}
