//! # Part Catalog
//!
//! The named jig variants a run produces. The built-in catalog holds the
//! standard jig and a big-hole variant; a JSON file can replace it:
//!
//! ```json
//! {
//!   "parts": [
//!     { "name": "clip_jig_2x10", "spec": { "pin_count_x": 10, "pin_count_y": 2 } }
//!   ]
//! }
//! ```
//!
//! Spec fields left out keep their defaults.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use config::constants::{BIG_PIN_HOLE_SIZE, CLIP_JIG_BIG_HOLES_PART_NAME, CLIP_JIG_PART_NAME};
use config::Resolution;
use jig_mesh::Mesh;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::builder::make_clip_jig;
use crate::error::JigError;
use crate::spec::ClipJigSpec;

/// A spec with the name its files are exported under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPart {
    pub name: String,
    #[serde(default)]
    pub spec: ClipJigSpec,
}

/// A built part ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPart {
    pub name: String,
    pub mesh: Mesh,
}

/// Ordered list of uniquely named parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    parts: Vec<NamedPart>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty, path-like or repeated names.
    pub fn new(parts: Vec<NamedPart>) -> Result<Self, JigError> {
        let mut seen = HashSet::new();
        for part in &parts {
            if part.name.trim().is_empty() {
                return Err(JigError::catalog("part name must not be empty"));
            }
            if part.name.contains(['/', '\\']) {
                return Err(JigError::catalog(format!(
                    "part name must not contain a path separator: {}",
                    part.name
                )));
            }
            if !seen.insert(part.name.as_str()) {
                return Err(JigError::catalog(format!("duplicate part name: {}", part.name)));
            }
        }
        Ok(Self { parts })
    }

    /// The standard jig and its big-hole variant.
    pub fn builtin() -> Self {
        let spec = ClipJigSpec::default();
        Self {
            parts: vec![
                NamedPart {
                    name: CLIP_JIG_PART_NAME.to_owned(),
                    spec,
                },
                NamedPart {
                    name: CLIP_JIG_BIG_HOLES_PART_NAME.to_owned(),
                    spec: spec.with_pin_hole_size(BIG_PIN_HOLE_SIZE),
                },
            ],
        }
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, JigError> {
        #[derive(Deserialize)]
        struct Raw {
            parts: Vec<NamedPart>,
        }

        let raw: Raw = serde_json::from_str(json)?;
        Self::new(raw.parts)
    }

    /// Reads a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, JigError> {
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        info!(path = %path.display(), parts = catalog.len(), "loaded part catalog");
        Ok(catalog)
    }

    /// Keeps only the parts named in `names`, in catalog order.
    ///
    /// An empty selection keeps everything.
    pub fn filter(self, names: &[String]) -> Result<Self, JigError> {
        if names.is_empty() {
            return Ok(self);
        }
        if let Some(unknown) = names.iter().find(|n| self.get(n).is_none()) {
            return Err(JigError::catalog(format!(
                "unknown part '{unknown}', available: {}",
                self.names().collect::<Vec<_>>().join(", ")
            )));
        }

        let parts = self
            .parts
            .into_iter()
            .filter(|p| names.contains(&p.name))
            .collect();
        Ok(Self { parts })
    }

    /// Builds every part. Parts are built in parallel; the result keeps
    /// catalog order.
    pub fn build(&self, resolution: &Resolution) -> Result<Vec<BuiltPart>, JigError> {
        self.parts
            .par_iter()
            .map(|part| -> Result<BuiltPart, JigError> {
                debug!(part = %part.name, spec = ?part.spec, "building part");
                let mesh = make_clip_jig(&part.spec, resolution)?;
                Ok(BuiltPart {
                    name: part.name.clone(),
                    mesh,
                })
            })
            .collect()
    }

    pub fn parts(&self) -> &[NamedPart] {
        &self.parts
    }

    pub fn get(&self, name: &str) -> Option<&NamedPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
