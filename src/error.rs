use thiserror::Error;

/// Request validation failures. Catalog problems never surface here; the
/// planner degrades the generated plan instead of failing.
#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    #[error("trip duration must be at least 1 day, got {0}")]
    InvalidDuration(u32),

    #[error("trip budget must be a finite, non-negative number, got {0}")]
    InvalidBudget(f32),
}
