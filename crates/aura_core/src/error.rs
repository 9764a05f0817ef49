use std::fmt;

/// Errors from the basic numeric guards on project input
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectError {
    MissingName,
    ZeroDuration,
    NegativeValue { field: &'static str, value: f64 },
    OutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::MissingName => write!(f, "project must have a name"),
            ProjectError::ZeroDuration => write!(f, "project duration must be at least one month"),
            ProjectError::NegativeValue { field, value } => {
                write!(f, "{field} must be non-negative (got {value})")
            }
            ProjectError::OutOfRange { field, value } => {
                write!(f, "{field} must be between 0 and 1 (got {value})")
            }
        }
    }
}

impl std::error::Error for ProjectError {}

/// Errors from the stochastic layer (Monte Carlo, sensitivity)
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Project(ProjectError),
    /// A perturbation distribution could not be constructed
    InvalidDistribution { low: f64, high: f64 },
    /// Simulation was cancelled by user request
    Cancelled,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Project(e) => write!(f, "{e}"),
            SimulationError::InvalidDistribution { low, high } => {
                write!(f, "invalid perturbation range [{low}, {high}]")
            }
            SimulationError::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Project(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProjectError> for SimulationError {
    fn from(e: ProjectError) -> Self {
        SimulationError::Project(e)
    }
}
