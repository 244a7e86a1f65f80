// ============================================================================
// Conversion Hook Interface
// Defines the contract for instrumenting conversion steps
// ============================================================================

use crate::domain::{Group, OutputBuffer};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the event fires before or after a conversion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    Before,
    After,
}

/// What is being converted when the event fires: a group of one, two or
/// three digits, or the group's magnitude word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionKind {
    Unit,
    Ten,
    Hundred,
    Magnitude,
}

/// Read-only snapshot of the group being converted, handed to hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionEvent {
    /// Group value, always in [0, 999]
    pub value: u16,

    /// Remainder of the number being converted below this group's magnitude
    pub modulus: u64,

    /// Magnitude index of the group (0, 3, 6, 9 or 12)
    pub index: u8,
}

impl From<&Group> for ConversionEvent {
    fn from(group: &Group) -> Self {
        Self {
            value: group.value,
            modulus: group.modulus,
            index: group.index,
        }
    }
}

/// Hook trait for instrumenting the conversion of each group.
///
/// The engine invokes the hook at four fixed points per group, in this order
/// regardless of language: `Before(group-kind)`, group words,
/// `After(group-kind)`, `Before(Magnitude)`, magnitude word if any,
/// `After(Magnitude)`. Hooks may append arbitrary text to the buffer but
/// must not attempt to remove or reorder existing content (the buffer offers
/// no such operations).
pub trait ConversionHook: Send + Sync {
    fn on_conversion(
        &self,
        phase: Phase,
        kind: ConversionKind,
        event: &ConversionEvent,
        output: &mut OutputBuffer,
    );
}

/// Any matching closure works as a hook.
impl<F> ConversionHook for F
where
    F: Fn(Phase, ConversionKind, &ConversionEvent, &mut OutputBuffer) + Send + Sync,
{
    fn on_conversion(
        &self,
        phase: Phase,
        kind: ConversionKind,
        event: &ConversionEvent,
        output: &mut OutputBuffer,
    ) {
        self(phase, kind, event, output)
    }
}

/// No-op hook used when the caller supplies none
pub struct NoOpHook;

impl ConversionHook for NoOpHook {
    fn on_conversion(
        &self,
        _phase: Phase,
        _kind: ConversionKind,
        _event: &ConversionEvent,
        _output: &mut OutputBuffer,
    ) {
        // Do nothing
    }
}

/// Logging hook
pub struct LoggingHook;

impl ConversionHook for LoggingHook {
    fn on_conversion(
        &self,
        phase: Phase,
        kind: ConversionKind,
        event: &ConversionEvent,
        _output: &mut OutputBuffer,
    ) {
        tracing::debug!(
            ?phase,
            ?kind,
            value = event.value,
            modulus = event.modulus,
            index = event.index,
            "conversion event"
        );
    }
}
