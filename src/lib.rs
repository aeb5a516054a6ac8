//! # View Document Classifier
//!
//! Classifier passes for a template-to-code compiler. A pass receives the IR tree
//! lowered from one view, tags it with a document kind and appends the scaffold
//! the renderer needs to emit a page class.
//!
//! ## Invariants
//!
//! 1. **Idempotency**: a document with a non-empty kind is never modified by a classifier.
//! 2. **Legal Class Names**: synthesized class names match `^[A-Za-z_][A-Za-z0-9_]*$`.
//! 3. **Path Precedence**: relative path, then file path, then a checksum of the content.
//! 4. **Append Only**: lowered body nodes are kept in place; the scaffold is appended.
//!
//! Passes hold only immutable options, so independent documents can be classified
//! in parallel (see [`ClassifierPipeline::run_batch`]).

mod bridge;
mod classifier;
mod error;
mod identifier;
mod ir;
mod options;
mod pipeline;
mod validate;
mod visitor;

#[cfg(test)]
mod classifier_tests;

#[cfg(feature = "napi")]
pub use bridge::classify_document_native;
pub use bridge::{classify_document_json, classify_request, ClassifyRequest, ClassifyResponse};

pub use classifier::{
    DocumentClassifierPass, MvcViewDocumentClassifierPass, RazorPageDocumentClassifierPass,
    ENTRY_POINT_METHOD, ENTRY_POINT_RETURN_TYPE, MODEL_TYPE_PARAMETER, MVC_VIEW_DOCUMENT_KIND,
    PAGE_BASE_TYPE, PAGE_DIRECTIVE, RAZOR_PAGE_DOCUMENT_KIND, VIEW_BASE_TYPE,
};
pub use error::ClassifierError;
pub use identifier::{is_legal_identifier, sanitize, source_checksum, synthesize};
pub use ir::*;
pub use options::{ClassifierOptions, DEFAULT_ROOT_NAMESPACE};
pub use pipeline::ClassifierPipeline;
pub use validate::{validate_classified, ClassifierDiagnostic};
pub use visitor::{
    walk_children, walk_class, walk_document, walk_method, walk_namespace, walk_node,
    DeclarationCollector, IntermediateNodeVisitor,
};
