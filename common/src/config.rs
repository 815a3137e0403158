#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Disables DNS lookups.
    ///
    /// Literal addresses are still accepted wherever a host is expected.
    pub no_dns: bool,
    /// Terminal noise level: 0 prints everything, 1 hides headers, 2 also hides summaries.
    pub quiet: u8,
}
