//! Dependency tree construction and path queries.
//!
//! The external parser hands every token a dependency label, an index, and a
//! parent index. This module turns that flat list into a rooted tree once per
//! sentence; the tree is read-only afterwards.
//!
//! Two exclusions apply during construction:
//!
//! - tokens with an empty or absent label never participate in queries;
//! - tokens labeled `"dep"` are unattached leftovers from the parser and are
//!   dropped the same way.
//!
//! Parser indices are opaque keys (they need not be contiguous or start at
//! zero), so nodes are located through an index map rather than positionally.

use std::collections::HashMap;

use crate::{MatchError, Sentence, TokenId};

const ROOT_LABEL: &str = "ROOT";
const UNATTACHED_LABEL: &str = "dep";

type NodeId = usize;

#[derive(Debug)]
struct TreeNode {
    token: TokenId,
    /// Children grouped by dependency label, each list in token order.
    children: HashMap<String, Vec<NodeId>>,
}

/// A rooted dependency tree over one sentence. Owns its nodes; tokens stay
/// owned by the sentence and are referenced by [`TokenId`].
#[derive(Debug)]
pub(crate) struct DependencyTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl DependencyTree {
    /// Build the tree for `sentence`.
    ///
    /// Exactly one token must carry the `ROOT` label: zero roots or several
    /// roots are fatal for this sentence (callers catch the error at the
    /// rule boundary). A surviving node whose `parentIndex` resolves to no
    /// surviving node is malformed parser output and also fails the build.
    pub fn build(sentence: &Sentence) -> Result<DependencyTree, MatchError> {
        let attached: Vec<(TokenId, &crate::DependencyInfo)> = sentence
            .iter()
            .filter_map(|(id, token)| token.dependency.as_ref().map(|info| (id, info)))
            .filter(|(_, info)| !info.dependency.is_empty() && info.dependency != UNATTACHED_LABEL)
            .collect();

        let root_count = attached.iter().filter(|(_, info)| info.dependency == ROOT_LABEL).count();
        match root_count {
            0 => return Err(MatchError::NoRootFound),
            1 => {}
            n => return Err(MatchError::MultipleRoots(n)),
        }

        let mut nodes = Vec::with_capacity(attached.len());
        let mut index_to_node: HashMap<i32, NodeId> = HashMap::with_capacity(attached.len());
        let mut root = 0;

        for (token, info) in &attached {
            let node = nodes.len();
            nodes.push(TreeNode { token: *token, children: HashMap::new() });
            index_to_node.insert(info.index, node);
            if info.dependency == ROOT_LABEL {
                root = node;
            }
        }

        for (node, (_, info)) in attached.iter().enumerate() {
            if info.dependency == ROOT_LABEL {
                continue;
            }
            let parent = *index_to_node.get(&info.parent_index).ok_or(MatchError::MissingParent {
                index: info.index,
                parent_index: info.parent_index,
            })?;
            nodes[parent].children.entry(info.dependency.clone()).or_default().push(node);
        }

        Ok(DependencyTree { nodes, root })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root_token(&self) -> TokenId {
        self.nodes[self.root].token
    }

    /// Match a chain of dependency labels starting from *every* node of the
    /// tree and return all satisfying token paths.
    ///
    /// Each returned path has `labels.len() + 1` tokens: the anchor node
    /// followed by one child per label. An empty chain matches every node as
    /// a single-element path. A label with no children at some node simply
    /// contributes nothing; that is not an error.
    ///
    /// Paths come out in traversal order (anchor nodes in construction
    /// order, children in token order); callers needing a different order
    /// sort externally.
    pub fn query(&self, labels: &[String]) -> Vec<Vec<TokenId>> {
        let mut paths = Vec::new();
        let mut prefix = Vec::with_capacity(labels.len() + 1);
        for start in 0..self.nodes.len() {
            self.descend(start, labels, &mut prefix, &mut paths);
        }
        paths
    }

    fn descend(&self, node: NodeId, labels: &[String], prefix: &mut Vec<TokenId>, out: &mut Vec<Vec<TokenId>>) {
        prefix.push(self.nodes[node].token);
        match labels.split_first() {
            None => out.push(prefix.clone()),
            Some((label, rest)) => {
                if let Some(children) = self.nodes[node].children.get(label.as_str()) {
                    for &child in children {
                        self.descend(child, rest, prefix, out);
                    }
                }
            }
        }
        prefix.pop();
    }
}
