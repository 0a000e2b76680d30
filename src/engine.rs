use crate::emitter::TreeEmitter;
use crate::error::RenderError;
use crate::types::RenderSummary;
use std::io::{BufRead, Write};

/// Renders a stream of newline-separated paths from `input` into `output`.
///
/// Lines are consumed one at a time; empty lines are skipped without
/// touching the emitter state. The output sink is flushed after the final
/// levels are closed.
///
/// # Errors
///
/// The first read or write failure aborts rendering immediately with no
/// partial-result guarantee.
pub fn render<R, W>(input: R, mut output: W) -> Result<RenderSummary, RenderError>
where
    R: BufRead,
    W: Write,
{
    let mut emitter = TreeEmitter::new();
    let mut empty_lines = 0;
    for line in input.lines() {
        let line = line.map_err(RenderError::read)?;
        if line.is_empty() {
            empty_lines += 1;
            continue;
        }
        emitter.push(&mut output, &line).map_err(RenderError::write)?;
    }
    emitter.finish(&mut output).map_err(RenderError::write)?;
    output.flush().map_err(RenderError::write)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "rendered {} paths, {} empty lines skipped, max depth {}",
        emitter.emitted(),
        empty_lines,
        emitter.max_depth()
    );
    Ok(RenderSummary {
        paths: emitter.emitted(),
        empty_lines,
        max_depth: emitter.max_depth(),
    })
}

/// Renders an in-memory path sequence and returns the text.
///
/// Convenience wrapper around [`TreeEmitter`] for callers that already hold
/// the paths; empty entries are skipped like empty input lines.
pub fn render_to_string<I, S>(paths: I) -> Result<String, RenderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    let mut emitter = TreeEmitter::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_empty() {
            continue;
        }
        emitter.push(&mut out, path).map_err(RenderError::write)?;
    }
    emitter.finish(&mut out).map_err(RenderError::write)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
