use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CATALOG_FILE: &str = "projects.json";

static BUNDLED: LazyLock<Catalog> = LazyLock::new(|| {
    let file = Content::get(CATALOG_FILE).expect("project catalog should be embedded");
    let json = std::str::from_utf8(&file.data).expect("project catalog should be UTF-8");
    Catalog::from_json(json).expect("bundled project catalog should load")
});

#[derive(Embed)]
#[folder = "content"]
struct Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl ProjectId {
    /// Parses a route parameter or element id. Whitespace is tolerated,
    /// anything else that isn't a plain integer is not an id.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().map(Self)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub demos: Vec<String>,
}

impl ProjectLinks {
    /// The GitHub link, unless it's a `#` placeholder.
    pub fn github(&self) -> Option<&str> {
        self.github
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty() && *l != "#")
    }

    pub fn live(&self) -> Option<&str> {
        self.live
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty() && *l != "#")
    }

    pub fn is_empty(&self) -> bool {
        self.github().is_none() && self.live().is_none() && self.demos.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub video_posters: Vec<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technical_highlights: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl ProjectRecord {
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("couldn't parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project id {0} is used more than once")]
    DuplicateId(ProjectId),
}

/// Read-only list of portfolio projects, in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
    index: HashMap<ProjectId, usize>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(projects.len());
        for (i, p) in projects.iter().enumerate() {
            if index.insert(p.id, i).is_some() {
                return Err(CatalogError::DuplicateId(p.id));
            }
        }
        log::debug!("project catalog loaded with {} entries", projects.len());
        Ok(Self { projects, index })
    }

    /// The catalog compiled into the binary. Loaded on first use.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    pub fn find_by_id(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.index.get(&id).map(|&i| &self.projects[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
