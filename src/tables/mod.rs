//! Static version knowledge
//!
//! Both tables are built once at startup and handed to the collector and the
//! reconciler by reference, so callers can substitute their own data.

mod node_npm;
mod requirements;

pub use node_npm::NodeNpmTable;
pub use requirements::RequirementTable;

/// The lookup tables used by one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    /// Node.js → bundled npm version
    pub node_npm: NodeNpmTable,
    /// Package → minimum Node.js version
    pub requirements: RequirementTable,
}

impl Tables {
    /// Create tables from explicit parts
    pub fn new(node_npm: NodeNpmTable, requirements: RequirementTable) -> Self {
        Self {
            node_npm,
            requirements,
        }
    }

    /// The tables shipped with verlimit
    pub fn builtin() -> Self {
        Self::new(NodeNpmTable::builtin(), RequirementTable::builtin())
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::builtin()
    }
}
