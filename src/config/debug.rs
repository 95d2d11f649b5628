//! Debugging feature flags.

pub struct LogFlags {
    /// Every request issued or resolved by a view subscription.
    pub log_fetches: bool,

    /// Anything about handling the selected coin.
    pub log_selection: bool,

    /// Currency switches and the re-fetches they trigger.
    pub log_currency: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: true,
    log_selection: true,
    log_currency: true,
    log_performance: false,
};
