pub struct Config {
    /// Decoration level: 0 prints everything, 1 drops the banner and
    /// headers, 2 keeps only listings, results and errors.
    pub quiet: u8,

    /// Suppresses the startup banner without touching other decoration.
    pub no_banner: bool,

    /// Starts the session with an empty inventory instead of the
    /// demo stock.
    pub no_seed: bool,
}
