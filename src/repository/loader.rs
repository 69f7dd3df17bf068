// file: src/repository/loader.rs
// description: issue dataset loading from a json file or a directory of json files
// reference: https://docs.rs/walkdir

use crate::error::{AnalysisError, Result};
use crate::models::Issue;
use crate::utils::Validator;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Deserialize)]
#[serde(untagged)]
enum IssueFile {
    Many(Vec<Issue>),
    One(Box<Issue>),
}

impl IssueFile {
    fn into_issues(self) -> Vec<Issue> {
        match self {
            IssueFile::Many(issues) => issues,
            IssueFile::One(issue) => vec![*issue],
        }
    }
}

pub struct IssueLoader {
    root: PathBuf,
}

impl IssueLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads every issue in traversal order. Directory entries are visited
    /// sorted by path so repeated runs see the same order.
    pub async fn load(&self) -> Result<Vec<Issue>> {
        Validator::validate_input_path(&self.root)?;

        if self.root.is_file() {
            let issues = self.load_file(&self.root).await?;
            info!("Loaded {} issues from {}", issues.len(), self.root.display());
            return Ok(issues);
        }

        let mut issues = Vec::new();
        for path in self.scan_directory() {
            match self.load_file(&path).await {
                Ok(mut batch) => {
                    debug!("Loaded {} issues from {}", batch.len(), path.display());
                    issues.append(&mut batch);
                }
                Err(e) => warn!("Skipping unreadable issue file: {}", e),
            }
        }

        info!("Loaded {} issues from {}", issues.len(), self.root.display());
        Ok(issues)
    }

    fn scan_directory(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| Validator::validate_json_extension(path).is_ok())
            .collect()
    }

    async fn load_file(&self, path: &Path) -> Result<Vec<Issue>> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| AnalysisError::FileOperation {
                    path: path.to_path_buf(),
                    source,
                })?;

        let parsed: IssueFile =
            serde_json::from_str(&content).map_err(|e| AnalysisError::Load {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(parsed.into_issues())
    }
}
