use time::Date;

/// All errors the limitation engine can return. Validation happens once
/// at the top of the public entry point and fails fast on the first
/// violated invariant; "no matching rules" is a valid empty result,
/// never an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LimitationError {
    /// Judgment date is after "today".
    #[error("judgment date {0} cannot be in the future")]
    JudgmentDateInFuture(Date),

    /// Certified-copy application predates the judgment.
    #[error("certified copy application date {applied} cannot be before judgment date {judgment}")]
    CopyAppliedBeforeJudgment { applied: Date, judgment: Date },

    /// Certified-copy application date is after "today".
    #[error("certified copy application date {0} cannot be in the future")]
    CopyAppliedInFuture(Date),

    /// Certified copy marked ready before it was applied for.
    #[error("certified copy ready date {ready} cannot be before application date {applied}")]
    CopyReadyBeforeApplied { ready: Date, applied: Date },

    /// Certified copy received before it was applied for.
    #[error("certified copy received date {received} cannot be before application date {applied}")]
    CopyReceivedBeforeApplied { received: Date, applied: Date },

    /// Certified-copy received date is after "today".
    #[error("certified copy received date {0} cannot be in the future")]
    CopyReceivedInFuture(Date),

    /// A received date was supplied without the application date it
    /// depends on.
    #[error("certified copy received date requires an application date")]
    CopyReceivedWithoutApplied,

    /// Reversed range during exclusion-day computation. Same family as
    /// the validation errors, raised deeper in the call stack.
    #[error("certified copy applied date {applied} is after received date {received}")]
    InvalidRange { applied: Date, received: Date },
}
