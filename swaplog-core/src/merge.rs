//! Event log merger
//!
//! The canonical log is additive: sources are concatenated in the caller's
//! priority order (seed first, then sheet) with within-source order kept.
//! Nothing is deduplicated (two identical swap reports are two swap
//! reports) and nothing is re-validated here; the parsers already
//! guaranteed valid dates and normalized identifiers.

use crate::model::ComponentEvent;

/// Union multiple parsed sources into one ordered log
///
/// Pure: the output is exactly the input sources flattened in order. The
/// source position in the input sequence is the tie-break rank used later
/// by interval derivation (stable sort on date keeps this relative order).
pub fn merge(sources: Vec<Vec<ComponentEvent>>) -> Vec<ComponentEvent> {
    let total = sources.iter().map(Vec::len).sum();
    let mut log = Vec::with_capacity(total);
    for source in sources {
        log.extend(source);
    }
    log
}
