//! JSON entry point for hosts that drive the compiler out of process.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;
use crate::ir::{CodeDocument, DocumentNode};
use crate::options::ClassifierOptions;
use crate::pipeline::ClassifierPipeline;
use crate::validate::{validate_classified, ClassifierDiagnostic};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub code_document: CodeDocument,
    /// Lowered tree. A fresh root is created from the code document when absent.
    #[serde(default)]
    pub document: Option<DocumentNode>,
    #[serde(default)]
    pub options: ClassifierOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub document: DocumentNode,
    pub document_kind: Option<String>,
    pub diagnostics: Vec<ClassifierDiagnostic>,
}

pub fn classify_request(request: ClassifyRequest) -> ClassifyResponse {
    let ClassifyRequest {
        code_document,
        document,
        options,
    } = request;

    let mut document =
        document.unwrap_or_else(|| DocumentNode::for_code_document(&code_document));
    let pipeline = ClassifierPipeline::with_options(options);
    let document_kind = pipeline.run(&code_document, &mut document);

    // Trees classified by someone else are not ours to vouch for.
    let diagnostics = match document_kind.as_deref() {
        Some(kind) if pipeline.kinds().contains(&kind) => validate_classified(&document),
        _ => Vec::new(),
    };

    ClassifyResponse {
        document,
        document_kind,
        diagnostics,
    }
}

pub fn classify_document_json(input_json: &str) -> Result<String, ClassifierError> {
    let request: ClassifyRequest =
        serde_json::from_str(input_json).map_err(ClassifierError::InvalidInput)?;
    let response = classify_request(request);
    serde_json::to_string(&response).map_err(ClassifierError::Serialize)
}

#[cfg(feature = "napi")]
#[napi]
pub fn classify_document_native(input_json: String) -> napi::Result<String> {
    classify_document_json(&input_json)
        .map_err(|e| napi::Error::new(napi::Status::InvalidArg, e.to_string()))
}
