//! Constraint collection for a Node.js project
//!
//! This module provides:
//! - Workflow coordination: locate → read manifest → read lockfile → constraints
//! - Engines, dependency, devDependency and lockfile constraints in that order
//! - Error handling with partial continuation: one unreadable file never
//!   hides the constraints of the other

use crate::domain::{ConstraintSource, RawConstraint};
use crate::error::AnalysisError;
use crate::manifest::{project_files, Lockfile, PackageJson, LOCKFILE_FILENAME};
use crate::tables::RequirementTable;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Result of collecting constraints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Constraints in encounter order
    pub constraints: Vec<RawConstraint>,
    /// Problems that were skipped over
    pub warnings: Vec<String>,
}

impl Collection {
    /// Returns true if any constraint was found
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }
}

/// Collects raw constraints from a project directory
pub struct Collector<'a> {
    /// Package → minimum Node.js version rules
    requirements: &'a RequirementTable,
    /// Suppresses progress messages and warnings
    quiet: bool,
}

impl<'a> Collector<'a> {
    /// Create a collector using the given requirement table
    pub fn new(requirements: &'a RequirementTable, quiet: bool) -> Self {
        Self {
            requirements,
            quiet,
        }
    }

    /// Collect every constraint of the project at `root`.
    ///
    /// Fails only when there is neither a readable package.json nor a
    /// package-lock.json.
    pub fn collect(&self, root: &Path) -> Result<Collection, AnalysisError> {
        let files = project_files(root);
        let mut collection = Collection::default();

        if !self.quiet {
            info!("Analyzing project in {}...", files.root.display());
        }

        let manifest = if files.has_manifest() {
            match PackageJson::read(&files.manifest) {
                Ok(manifest) => Some(manifest),
                Err(e) => {
                    error!("Error reading package.json at {}: {}", files.manifest.display(), e);
                    collection.warnings.push(e.to_string());
                    None
                }
            }
        } else {
            None
        };

        if let Some(manifest) = &manifest {
            self.collect_manifest(manifest, &mut collection.constraints);
        }

        if files.has_lockfile() {
            if !self.quiet {
                info!("Found {}, analyzing dependency tree...", LOCKFILE_FILENAME);
            }
            match Lockfile::read(&files.lockfile) {
                Ok(lockfile) => {
                    match lockfile.format {
                        Some(format) => debug!(
                            packages = lockfile.packages.len(),
                            "{} uses the `{}` layout", LOCKFILE_FILENAME, format
                        ),
                        None => {
                            if !self.quiet {
                                warn!(
                                    "{} has neither `packages` nor `dependencies`",
                                    LOCKFILE_FILENAME
                                );
                            }
                        }
                    }
                    self.collect_lockfile(&lockfile, &mut collection.constraints)
                }
                Err(e) => {
                    if !self.quiet {
                        warn!("Could not parse {}: {}", LOCKFILE_FILENAME, e);
                    }
                    collection
                        .warnings
                        .push(format!("Could not parse {}: {}", LOCKFILE_FILENAME, e));
                }
            }
        } else if manifest.is_none() {
            return Err(AnalysisError::no_project_files(&files.root));
        }

        Ok(collection)
    }

    /// Constraints declared by or implied through package.json
    pub fn collect_manifest(&self, manifest: &PackageJson, output: &mut Vec<RawConstraint>) {
        if !self.quiet {
            info!("Project {} analyzing dependencies...", manifest.name);
        }

        if let Some(node) = &manifest.node_engine {
            if !self.quiet {
                info!("Found Node.js engine requirement: {}", node);
            }
            output.push(RawConstraint::engines(
                manifest.name.clone(),
                node.clone(),
                manifest.npm_requirement(),
            ));
        }

        self.collect_packages(
            manifest.dependencies.iter().map(|(n, v)| (n.as_str(), v.as_str())),
            ConstraintSource::Dependency,
            output,
        );
        self.collect_packages(
            manifest
                .dev_dependencies
                .iter()
                .map(|(n, v)| (n.as_str(), v.as_str())),
            ConstraintSource::DevDependency,
            output,
        );
    }

    /// Constraints implied by the packages pinned in package-lock.json
    pub fn collect_lockfile(&self, lockfile: &Lockfile, output: &mut Vec<RawConstraint>) {
        self.collect_packages(
            lockfile
                .packages
                .iter()
                .map(|p| (p.name.as_str(), p.version.as_str())),
            ConstraintSource::Lockfile,
            output,
        );
    }

    fn collect_packages<'p>(
        &self,
        packages: impl Iterator<Item = (&'p str, &'p str)>,
        source: ConstraintSource,
        output: &mut Vec<RawConstraint>,
    ) {
        let label = match source {
            ConstraintSource::DevDependency => "DevDependency",
            _ => "Dependency",
        };

        for (name, version) in packages {
            if !self.requirements.knows(name) {
                continue;
            }
            let Some(node) = self.requirements.node_requirement_for(name, version) else {
                debug!(
                    package = %name,
                    version = %version,
                    "no Node.js rule covers this version"
                );
                continue;
            };
            if !self.quiet {
                info!("{} {}@{} requires Node.js {}", label, name, version, node);
            }
            output.push(RawConstraint::package(name, node.to_string(), source));
        }
    }
}
