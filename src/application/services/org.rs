//! Briefing service
//!
//! Loads a command hierarchy and passes orders through it.

use std::path::Path;
use std::sync::Arc;

use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::application::hierarchy::{example_division, parse_hierarchy};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{to_tree, Notifier, OrgNode};
use crate::infrastructure::traits::FileSystem;

/// Summary of a finished briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefingReport {
    /// Soldiers that received the order
    pub soldiers: usize,
    /// Notifications emitted, soldiers and unit summaries together
    pub notifications: usize,
}

/// Counts what passes through to the wrapped sink.
struct Counting<'a> {
    inner: &'a mut dyn Notifier,
    count: usize,
}

impl Notifier for Counting<'_> {
    fn notify(&mut self, message: &str) {
        self.count += 1;
        self.inner.notify(message);
    }
}

pub struct OrgService {
    fs: Arc<dyn FileSystem>,
}

impl OrgService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load a hierarchy file, or the built-in division when `path` is `None`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: Option<&Path>) -> ApplicationResult<OrgNode> {
        let Some(path) = path else {
            debug!("no hierarchy file given, using built-in division");
            return Ok(example_division());
        };
        if !self.fs.exists(path) {
            return Err(ApplicationError::HierarchyNotFound(path.to_path_buf()));
        }
        let content = self.fs.read_to_string(path).map_err(|source| {
            ApplicationError::HierarchyUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        parse_hierarchy(&content, path)
    }

    /// Give `order` to `root` and everything below it.
    #[instrument(level = "debug", skip(self, root, sink), fields(root = %root))]
    pub fn brief(&self, root: &OrgNode, order: &str, sink: &mut dyn Notifier) -> BriefingReport {
        let mut counting = Counting {
            inner: sink,
            count: 0,
        };
        root.brief(order, &mut counting);
        let report = BriefingReport {
            soldiers: root.leaf_count(),
            notifications: counting.count,
        };
        info!(
            soldiers = report.soldiers,
            notifications = report.notifications,
            "briefing complete"
        );
        report
    }

    pub fn render(&self, root: &OrgNode) -> Tree<String> {
        to_tree(root)
    }
}
