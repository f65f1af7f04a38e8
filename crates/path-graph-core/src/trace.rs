//! Decision log of a shortest-path run.
//!
//! The engine records one [`TraceEvent`] per decision while it runs. Events
//! stay structured inside the result; display strings are produced only
//! through `Display`, so tests can assert on structure instead of text.
//!
//! # Order
//!
//! One `Init`, then for every extraction one `Extract` followed by one
//! `RelaxAttempt` per outgoing arc, each attempt optionally followed by one
//! `RelaxUpdate`.

use std::fmt;

use serde::Serialize;

use crate::graph::NodeId;

/// Format a distance for trace and report lines.
///
/// Infinite distances print as `INF`; whole numbers keep one decimal
/// (`4.0`), other values print in full (`2.25`).
#[must_use]
pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        "INF".to_string()
    } else if distance.fract() == 0.0 {
        format!("{distance:.1}")
    } else {
        format!("{distance}")
    }
}

/// A single engine decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Distances initialized: source at zero, everything else infinite.
    Init { source: NodeId },

    /// Node removed from the frontier with its settled distance.
    Extract { node: NodeId, distance: f64 },

    /// Arc considered, logged before the improvement check.
    RelaxAttempt {
        from: NodeId,
        to: NodeId,
        weight: f64,
        candidate: f64,
        current: f64,
    },

    /// Relaxation improved the target's distance.
    RelaxUpdate {
        node: NodeId,
        distance: f64,
        predecessor: NodeId,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Init { source } => {
                write!(f, "Init: set distance({source})=0 and others=INF")
            }
            TraceEvent::Extract { node, distance } => {
                write!(f, "Extract min: {node} (dist={})", format_distance(*distance))
            }
            TraceEvent::RelaxAttempt {
                from,
                to,
                weight,
                candidate,
                current,
            } => write!(
                f,
                "Relax edge {from}->{to} (weight={}): alt={}, dist({to})={}",
                format_distance(*weight),
                format_distance(*candidate),
                format_distance(*current)
            ),
            TraceEvent::RelaxUpdate {
                node,
                distance,
                predecessor,
            } => write!(
                f,
                "  Updated: dist({node})={}, prev({node})={predecessor}",
                format_distance(*distance)
            ),
        }
    }
}

/// Ordered, append-only sequence of [`TraceEvent`]s.
///
/// Only the engine appends; once returned inside a result the trace is
/// read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// Events in chronological order.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Formatted display lines, one per event.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Nodes in extraction order.
    pub fn extraction_order(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Extract { node, .. } => Some(node.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{event}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
