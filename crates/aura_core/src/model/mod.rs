mod project;
mod results;

pub use project::{
    ADOPTION_RISK_WEIGHT, CostStructure, LatencyConfig, MaturityConfig, MaturityStage,
    OPTIMIZED_MULTIPLIER_CAP, OptionalityConfig, Project, REGULATORY_RISK_WEIGHT, RiskProfile,
    TECHNICAL_RISK_WEIGHT, Task, ThroughputConfig, VENDOR_RISK_WEIGHT,
};
pub use results::{
    DistributionSummary, FullResults, MonteCarloSummary, MonthlyProjection, OutcomeSample,
    PaybackSummary, ValueBreakdown,
};
