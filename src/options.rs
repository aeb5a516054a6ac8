use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

pub const DEFAULT_ROOT_NAMESPACE: &str = "AspNetCore";

/// Construction-time settings shared by the classifier passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierOptions {
    /// Name of the namespace wrapping every generated class.
    pub root_namespace: String,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
        }
    }
}

impl ClassifierOptions {
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        serde_json::from_str(json).map_err(ClassifierError::InvalidOptions)
    }

    pub fn with_root_namespace(mut self, root_namespace: &str) -> Self {
        self.root_namespace = root_namespace.to_string();
        self
    }
}
