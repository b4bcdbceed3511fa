//! Box-drawing text rendering of a [`Node`] hierarchy.

use crate::tree::Node;

const TEE: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const ELBOW: &str = "\u{2514}\u{2500}\u{2500} "; // └──
const PIPE: &str = "\u{2502}   "; // │
const BLANK: &str = "    ";

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Escape control characters in entry names.
    pub sanitize: bool,
}

/// Render `node` as a newline-terminated line per entry.
///
/// An empty node renders to the empty string.
pub fn render(node: &Node) -> String {
    render_with_prefix(node, "")
}

/// Render `node` with every line starting with `prefix`.
pub fn render_with_prefix(node: &Node, prefix: &str) -> String {
    let mut out = String::new();
    render_into(node, prefix, &RenderConfig::default(), &mut out);
    out
}

/// Render `node` from the root using `config`.
pub fn render_with(node: &Node, config: &RenderConfig) -> String {
    let mut out = String::new();
    render_into(node, "", config, &mut out);
    out
}

/// Depth-first, pre-order walk. Connector and continuation depend only on
/// the entry's position among its own siblings.
fn render_into(node: &Node, prefix: &str, config: &RenderConfig, out: &mut String) {
    let count = node.len();

    for (i, (name, child)) in node.iter().enumerate() {
        let is_last = i + 1 == count;

        out.push_str(prefix);
        out.push_str(if is_last { ELBOW } else { TEE });
        if config.sanitize {
            out.push_str(&sanitize_terminal_text(name));
        } else {
            out.push_str(name);
        }
        out.push('\n');

        if !child.is_leaf() {
            let continuation = if is_last { BLANK } else { PIPE };
            let child_prefix = format!("{prefix}{continuation}");
            render_into(child, &child_prefix, config, out);
        }
    }
}

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}
