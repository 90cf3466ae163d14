/// Why a geometric or statistical computation could not produce a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("points are collinear or coincident, no enclosing hull exists")]
    Degenerate,
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors returned by the analysis engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("insufficient data for {operation}: need at least {required}, got {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("{operation} failed")]
    Computation {
        operation: &'static str,
        #[source]
        source: GeometryError,
    },
}

impl AnalysisError {
    pub fn insufficient(operation: &'static str, required: usize, actual: usize) -> Self {
        AnalysisError::InsufficientData {
            operation,
            required,
            actual,
        }
    }

    pub fn computation(operation: &'static str, source: GeometryError) -> Self {
        AnalysisError::Computation { operation, source }
    }

    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, AnalysisError::InsufficientData { .. })
    }
}

/// Fails with `InsufficientData` unless `actual >= required`.
pub fn require_points(
    operation: &'static str,
    actual: usize,
    required: usize,
) -> Result<(), AnalysisError> {
    if actual < required {
        return Err(AnalysisError::insufficient(operation, required, actual));
    }
    Ok(())
}

pub fn require_probability(
    operation: &'static str,
    name: &'static str,
    value: f64,
) -> Result<(), AnalysisError> {
    if !(value > 0.0 && value < 1.0) {
        return Err(AnalysisError::computation(
            operation,
            GeometryError::InvalidParameter {
                name,
                value,
                reason: "must lie strictly between 0 and 1",
            },
        ));
    }
    Ok(())
}
