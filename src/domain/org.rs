//! Composite command hierarchy.
//!
//! Units (division down to squad) own their subordinates; enlisted soldiers
//! are the leaves. An order given to any node travels down the whole subtree
//! and each unit reports how many direct subordinates it briefed once they
//! all have been briefed.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::notifier::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Division,
    Brigade,
    Platoon,
    Squad,
    Enlisted,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::Division,
        Rank::Brigade,
        Rank::Platoon,
        Rank::Squad,
        Rank::Enlisted,
    ];

    /// Lower-case key used in hierarchy files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Rank::Division => "division",
            Rank::Brigade => "brigade",
            Rank::Platoon => "platoon",
            Rank::Squad => "squad",
            Rank::Enlisted => "enlisted",
        }
    }

    /// What a unit of this rank calls its direct subordinates in its
    /// briefing summary. `None` for enlisted soldiers, who have none.
    pub fn subordinates(self) -> Option<&'static str> {
        match self {
            Rank::Division => Some("Brigades"),
            Rank::Brigade => Some("Platoons"),
            Rank::Platoon => Some("Squads"),
            Rank::Squad => Some("Enlistees"),
            Rank::Enlisted => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::Division => "Division",
            Rank::Brigade => "Brigade",
            Rank::Platoon => "Platoon",
            Rank::Squad => "Squad",
            Rank::Enlisted => "Enlisted",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Rank::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownRank(s.to_string()))
    }
}

/// A container node: any rank above enlisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    rank: Rank,
    name: String,
    children: Vec<OrgNode>,
}

/// A leaf node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enlisted {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgNode {
    Unit(Unit),
    Enlisted(Enlisted),
}

pub fn division(name: impl Into<String>) -> OrgNode {
    OrgNode::new(Rank::Division, name)
}

pub fn brigade(name: impl Into<String>) -> OrgNode {
    OrgNode::new(Rank::Brigade, name)
}

pub fn platoon(name: impl Into<String>) -> OrgNode {
    OrgNode::new(Rank::Platoon, name)
}

pub fn squad(name: impl Into<String>) -> OrgNode {
    OrgNode::new(Rank::Squad, name)
}

pub fn enlisted(name: impl Into<String>) -> OrgNode {
    OrgNode::new(Rank::Enlisted, name)
}

impl OrgNode {
    /// Create an empty unit, or a leaf for [`Rank::Enlisted`].
    pub fn new(rank: Rank, name: impl Into<String>) -> Self {
        let name = name.into();
        match rank {
            Rank::Enlisted => OrgNode::Enlisted(Enlisted { name }),
            _ => OrgNode::Unit(Unit {
                rank,
                name,
                children: Vec::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OrgNode::Unit(unit) => &unit.name,
            OrgNode::Enlisted(soldier) => &soldier.name,
        }
    }

    pub fn rank(&self) -> Rank {
        match self {
            OrgNode::Unit(unit) => unit.rank,
            OrgNode::Enlisted(_) => Rank::Enlisted,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, OrgNode::Enlisted(_))
    }

    /// Direct subordinates in insertion order. Always empty for a leaf.
    pub fn children(&self) -> &[OrgNode] {
        match self {
            OrgNode::Unit(unit) => &unit.children,
            OrgNode::Enlisted(_) => &[],
        }
    }

    /// Append subordinates, keeping the order they are given in.
    ///
    /// Enlisted soldiers have no subordinates: adding to a leaf discards the
    /// nodes so that units and soldiers can be assembled through the same
    /// call. The discard is logged.
    pub fn add<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = OrgNode>,
    {
        match self {
            OrgNode::Unit(unit) => {
                let before = unit.children.len();
                unit.children.extend(children);
                debug!(
                    rank = %unit.rank,
                    name = %unit.name,
                    added = unit.children.len() - before,
                    "added subordinates"
                );
            }
            OrgNode::Enlisted(soldier) => {
                let discarded = children.into_iter().count();
                if discarded > 0 {
                    debug!(name = %soldier.name, discarded, "enlisted soldiers take no subordinates");
                }
            }
        }
    }

    /// Builder form of [`OrgNode::add`].
    pub fn with<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = OrgNode>,
    {
        self.add(children);
        self
    }

    /// Pass `order` down the subtree.
    ///
    /// Soldiers repeat the order verbatim. Units brief every subordinate in
    /// insertion order and only then report `Briefing <n> <subordinates>`.
    #[instrument(level = "trace", skip(self, sink), fields(rank = %self.rank(), name = %self.name()))]
    pub fn brief(&self, order: &str, sink: &mut dyn Notifier) {
        match self {
            OrgNode::Enlisted(_) => sink.notify(order),
            OrgNode::Unit(unit) => {
                for child in &unit.children {
                    child.brief(order, sink);
                }
                let subordinates = unit.rank.subordinates().unwrap_or_default();
                sink.notify(&format!(
                    "Briefing {} {}",
                    unit.children.len(),
                    subordinates
                ));
            }
        }
    }

    /// Number of leaves in the subtree. A unit without soldiers has none.
    pub fn leaf_count(&self) -> usize {
        match self {
            OrgNode::Enlisted(_) => 1,
            OrgNode::Unit(unit) => unit.children.iter().map(OrgNode::leaf_count).sum(),
        }
    }

    /// Number of levels in the subtree, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(OrgNode::depth)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for OrgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank(), self.name())
    }
}
