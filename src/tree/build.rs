use super::Node;

/// Build a depth-bounded hierarchy from slash-delimited paths.
///
/// Only the first `max_depth` segments of each path are inserted, so deeper
/// paths collapse onto their truncated prefix. Segments are taken verbatim:
/// a leading, trailing or doubled `/` produces an empty-string key. A
/// `max_depth` of zero visits no segments and returns an empty root.
pub fn build_hierarchy<I, S>(paths: I, max_depth: usize) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Node::new();

    for path in paths {
        let mut current = &mut root;
        for segment in path.as_ref().split('/').take(max_depth) {
            current = current.child_or_insert(segment);
        }
    }

    root
}
