//! Palette Projects
//!
//! A caller-owned collection of named projects, each grouping palettes
//! under tags. The store keeps everything in memory and hands back plain
//! references; persisting the collection is the caller's concern. Ids
//! are derived from the project name plus a store-local counter, so the
//! same creation sequence always produces the same ids.

use std::cmp::Reverse;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::palette::Palette;

/// A named group of palettes with search tags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub palettes: Vec<Palette>,
    pub tags: Vec<String>,
    /// Epoch milliseconds, supplied by the caller
    pub created_at: i64,
    /// Bumped on every mutation
    pub updated_at: i64,
    /// Share visibility; always starts private
    pub public: bool,
}

/// In-memory project collection
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    next_id: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a project and return a reference to the stored record
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        now_ms: i64,
    ) -> &Project {
        let name = name.into();
        self.next_id += 1;
        let project = Project {
            id: slug_id(&name, "project", self.next_id),
            name,
            description: description.into(),
            palettes: Vec::new(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            created_at: now_ms,
            updated_at: now_ms,
            public: false,
        };
        let idx = self.projects.len();
        self.projects.push(project);
        &self.projects[idx]
    }

    /// Look up one project by id
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All projects, most recently updated first
    ///
    /// Ties keep creation order.
    pub fn projects(&self) -> Vec<&Project> {
        let mut all: Vec<&Project> = self.projects.iter().collect();
        all.sort_by_key(|p| Reverse(p.updated_at));
        all
    }

    /// Case-insensitive substring search over name and description,
    /// intersected with an any-of tag filter when tags are given
    ///
    /// An empty query matches every project; tag comparison is exact.
    pub fn search(&self, query: &str, tags: &[&str]) -> Vec<&Project> {
        let query = query.to_lowercase();
        self.projects()
            .into_iter()
            .filter(|p| {
                let matches_query = query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query);
                let matches_tags = tags.is_empty()
                    || tags.iter().any(|tag| p.tags.iter().any(|t| t == tag));
                matches_query && matches_tags
            })
            .collect()
    }

    /// Append a palette to a project and bump its updated timestamp
    pub fn add_palette(
        &mut self,
        project_id: &str,
        palette: Palette,
        now_ms: i64,
    ) -> Result<&Project> {
        let project = self.entry(project_id)?;
        project.palettes.push(palette);
        project.updated_at = now_ms;
        Ok(project)
    }

    /// Drop every palette with the given name from a project
    ///
    /// Removing a name that is not present still bumps the timestamp.
    pub fn remove_palette(
        &mut self,
        project_id: &str,
        palette_name: &str,
        now_ms: i64,
    ) -> Result<&Project> {
        let project = self.entry(project_id)?;
        project.palettes.retain(|p| p.name != palette_name);
        project.updated_at = now_ms;
        Ok(project)
    }

    /// Union new tags into a project, preserving insertion order
    pub fn add_tags(&mut self, project_id: &str, tags: &[&str], now_ms: i64) -> Result<&Project> {
        let project = self.entry(project_id)?;
        for tag in tags {
            if !project.tags.iter().any(|t| t == tag) {
                project.tags.push((*tag).to_string());
            }
        }
        project.updated_at = now_ms;
        Ok(project)
    }

    fn entry(&mut self, id: &str) -> Result<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))
    }
}

/// `{slugged-name}-{counter}`, falling back to a fixed word when the
/// name has no sluggable content
pub(crate) fn slug_id(name: &str, fallback: &str, counter: u64) -> String {
    let slugged = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slugged.is_empty() {
        format!("{fallback}-{counter}")
    } else {
        format!("{slugged}-{counter}")
    }
}
