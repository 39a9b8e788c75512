use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }

    /// Level to log at when per-file timings were requested.
    ///
    /// Timings are logged at INFO, so quieter levels are raised to it. An
    /// explicit `silent` stays silent.
    pub fn with_timings(&self) -> Option<tracing::Level> {
        self.to_tracing_level()
            .map(|level| level.max(tracing::Level::INFO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use tracing::Level;

    #[rstest]
    #[case(LogLevel::Debug, Some(Level::DEBUG))]
    #[case(LogLevel::Info, Some(Level::INFO))]
    #[case(LogLevel::Warn, Some(Level::INFO))]
    #[case(LogLevel::Error, Some(Level::INFO))]
    #[case(LogLevel::Silent, None)]
    fn timings_raise_quiet_levels_to_info(#[case] level: LogLevel, #[case] expected: Option<Level>) {
        assert_eq!(level.with_timings(), expected);
    }
}
