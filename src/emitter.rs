//! Streaming construction of the bracketed tree rendering.

use crate::prefix::common_ancestor;
use std::io::{self, Write};

/// Incremental renderer turning an ordered path sequence into nested
/// bracketed text.
///
/// The emitter keeps only the previous path, the count of currently-open
/// (unclosed) tree levels, and a flag for whether the current output line is
/// still unterminated. For each new path it closes the levels being left,
/// opens the levels being entered, and leaves the newest node's line open so
/// that a later sibling, child, or [`finish`](TreeEmitter::finish) can decide
/// how to terminate it.
///
/// Paths must arrive in depth-first lexical order; this is not validated.
/// Out-of-order input yields structurally wrong but well-formed output and
/// never a panic.
#[derive(Debug)]
pub struct TreeEmitter {
    prev: String,
    open_levels: usize,
    line_open: bool,
    emitted: usize,
    max_depth: usize,
}

impl TreeEmitter {
    pub fn new() -> Self {
        Self {
            prev: String::new(),
            open_levels: 0,
            line_open: false,
            emitted: 0,
            max_depth: 0,
        }
    }

    /// Feeds one path, writing any level transitions and the node header for
    /// `path` to `out`. Empty paths are ignored. A single trailing slash is
    /// stripped so that `/x` and `/x/` denote the same node.
    ///
    /// # Errors
    ///
    /// Any write failure on `out` is returned as-is; the emitter is left in
    /// an unspecified state and must not be reused.
    pub fn push<W: Write>(&mut self, out: &mut W, path: &str) -> io::Result<()> {
        if path.is_empty() {
            return Ok(());
        }
        let path = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        // The root marker normalizes to the empty internal path but is
        // displayed as the single segment "/".
        let is_root = path == "/";

        let prefix = common_ancestor(path, &self.prev);

        // Close however many levels of the tree we are leaving. The first
        // closing bracket attaches to the still-open previous line; each
        // further ancestor level gets a dedent line of its own.
        let closing_slashes = {
            let closing = self.prev.strip_prefix(prefix).unwrap_or("");
            (!closing.is_empty()).then(|| closing.matches('/').count())
        };
        if let Some(slashes) = closing_slashes {
            out.write_all(b"]")?;
            self.open_levels = self.open_levels.saturating_sub(1);
            for _ in 1..slashes {
                self.break_line(out)?;
                write!(out, "{}]", indent(self.open_levels.saturating_sub(1)))?;
                self.line_open = true;
                self.open_levels = self.open_levels.saturating_sub(1);
            }
        }

        // Open however many levels of the tree we are entering.
        let mut opening = path.strip_prefix(prefix).unwrap_or(path);
        if opening.len() > 1 && opening.starts_with('/') {
            opening = &opening[1..];
        }

        if is_root {
            let mut full = String::new();
            self.open_node(out, "", &mut full)?;
        } else {
            let mut full = prefix.to_string();
            for segment in opening.split('/') {
                self.open_node(out, segment, &mut full)?;
            }
        }

        self.prev.clear();
        if !is_root {
            self.prev.push_str(path);
        }
        self.emitted += 1;
        Ok(())
    }

    /// Closes every still-open level. The innermost node is closed inline,
    /// the rest each on their own dedent line; output ends with a newline.
    /// With no paths emitted, nothing was opened and nothing is written.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.emitted == 0 {
            return Ok(());
        }
        out.write_all(b"]\n")?;
        self.line_open = false;
        self.open_levels = self.open_levels.saturating_sub(1);
        while self.open_levels >= 1 {
            self.open_levels -= 1;
            writeln!(out, "{}]", indent(self.open_levels))?;
        }
        Ok(())
    }

    /// Number of paths emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Deepest nesting level reached so far, in indent levels.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    // Writes the header for one new node, nested one level below every
    // still-open ancestor. A dangling line is terminated first.
    fn open_node<W: Write>(&mut self, out: &mut W, segment: &str, full: &mut String) -> io::Result<()> {
        full.push('/');
        full.push_str(segment);

        self.break_line(out)?;
        self.max_depth = self.max_depth.max(self.open_levels);

        // An empty segment name only shows up for the root node.
        let name = if segment.is_empty() { "/" } else { segment };
        write!(out, "{}[{}, name={}", indent(self.open_levels), name, full)?;
        self.open_levels += 1;
        self.line_open = true;
        Ok(())
    }

    fn break_line<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.line_open {
            out.write_all(b"\n")?;
            self.line_open = false;
        }
        Ok(())
    }
}

impl Default for TreeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn indent(levels: usize) -> String {
    "  ".repeat(levels)
}
