//! Branch tracing behind the `tracing` feature.

/// Emits a trace event for a branch decision.
///
/// Compiles to nothing unless the `tracing` feature is enabled.
macro_rules! trace_branch {
    ($operator:expr, $truth:expr) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(operator = $operator, truth = %$truth, "branch selected");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (&$operator, &$truth);
        }
    }};
}

pub(crate) use trace_branch;
