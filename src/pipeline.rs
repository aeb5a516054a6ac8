use rayon::prelude::*;
use tracing::debug;

use crate::classifier::{
    DocumentClassifierPass, MvcViewDocumentClassifierPass, RazorPageDocumentClassifierPass,
};
use crate::ir::{CodeDocument, DocumentNode};
use crate::options::ClassifierOptions;

/// Ordered list of classifier passes. The first pass to claim a document wins.
pub struct ClassifierPipeline {
    passes: Vec<Box<dyn DocumentClassifierPass>>,
}

impl Default for ClassifierPipeline {
    fn default() -> Self {
        Self::with_options(ClassifierOptions::default())
    }
}

impl ClassifierPipeline {
    pub fn empty() -> Self {
        Self { passes: Vec::new() }
    }

    /// Razor pages are tried before the catch-all view pass.
    pub fn with_options(options: ClassifierOptions) -> Self {
        Self::empty()
            .with_pass(RazorPageDocumentClassifierPass::new(options.clone()))
            .with_pass(MvcViewDocumentClassifierPass::new(options))
    }

    pub fn with_pass<P: DocumentClassifierPass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.document_kind()).collect()
    }

    /// Offer `document` to each pass in order and return its resulting kind.
    pub fn run(&self, code_document: &CodeDocument, document: &mut DocumentNode) -> Option<String> {
        for pass in &self.passes {
            if document.is_classified() {
                break;
            }
            if pass.classify(code_document, document) {
                break;
            }
        }

        if !document.is_classified() {
            debug!("no classifier pass matched document");
        }
        document.document_kind.clone().filter(|kind| !kind.is_empty())
    }

    /// Classify independent documents in parallel. Each item owns its own tree.
    pub fn run_batch(&self, documents: &mut [(CodeDocument, DocumentNode)]) -> Vec<Option<String>> {
        documents
            .par_iter_mut()
            .map(|(code_document, document)| self.run(code_document, document))
            .collect()
    }
}
