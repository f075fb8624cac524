use termtree::Tree;
use tracing::instrument;

use crate::domain::org::OrgNode;

/// Render a hierarchy for display, one `"<Rank> <name>"` label per node.
#[instrument(level = "debug", skip(node), fields(root = %node))]
pub fn to_tree(node: &OrgNode) -> Tree<String> {
    fn build(node: &OrgNode) -> Tree<String> {
        let leaves: Vec<_> = node.children().iter().map(build).collect();
        Tree::new(node.to_string()).with_leaves(leaves)
    }
    build(node)
}
