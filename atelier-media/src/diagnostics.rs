use crate::ports::DiagnosticSink;

/// [`DiagnosticSink`] that forwards to the tracing stack at warn level.
///
/// Selection diagnostics are rare (a record with no usable image version) but
/// worth surfacing: they usually indicate a catalog data problem upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, message: &str) {
        tracing::warn!(target: "atelier_media", "{message}");
    }
}

/// [`DiagnosticSink`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn report(&self, _message: &str) {}
}
