//! Hierarchy files: a TOML description of a command structure.
//!
//! ```toml
//! rank = "division"
//! name = "1st"
//!
//! [[units]]
//! rank = "brigade"
//! name = "A"
//! ```
//!
//! `units` nest to any depth. The tree is assembled through the same
//! [`OrgNode::add`] calls code would use.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{brigade, division, enlisted, platoon, squad, DomainError, OrgNode, Rank};

/// One entry of a hierarchy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub rank: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<UnitSpec>,
}

impl UnitSpec {
    /// Build the described subtree.
    pub fn build(&self) -> Result<OrgNode, DomainError> {
        let rank: Rank = self.rank.parse()?;
        let mut node = OrgNode::new(rank, self.name.as_str());
        if node.is_leaf() && !self.units.is_empty() {
            warn!(
                name = %self.name,
                ignored = self.units.len(),
                "enlisted entries take no units, ignoring them"
            );
        }
        let children = self
            .units
            .iter()
            .map(UnitSpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        node.add(children);
        Ok(node)
    }
}

impl From<&OrgNode> for UnitSpec {
    fn from(node: &OrgNode) -> Self {
        Self {
            rank: node.rank().key().to_string(),
            name: node.name().to_string(),
            units: node.children().iter().map(UnitSpec::from).collect(),
        }
    }
}

/// Parse hierarchy file content. `path` is only used for error messages.
#[instrument(level = "debug", skip(content))]
pub fn parse_hierarchy(content: &str, path: &Path) -> ApplicationResult<OrgNode> {
    let spec: UnitSpec = toml::from_str(content).map_err(|e| ApplicationError::InvalidHierarchy {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(spec.build()?)
}

/// Serialize a hierarchy back into the file format.
pub fn to_hierarchy_toml(node: &OrgNode) -> ApplicationResult<String> {
    toml::to_string_pretty(&UnitSpec::from(node)).map_err(|e| ApplicationError::OperationFailed {
        context: "serialize hierarchy".to_string(),
        source: Box::new(e),
    })
}

/// The built-in hierarchy: 1st Division, one unit per level, two soldiers.
pub fn example_division() -> OrgNode {
    division("1st").with([brigade("A").with([platoon("1").with([
        squad("alpha").with([enlisted("Smith"), enlisted("Jones")]),
    ])])])
}
