use logomotion_sourcemap::LineTerminator;

/// Coordinate space the stochastic detector reports its offsets in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OffsetMode {
    /// Offsets into the tokens concatenated without whitespace. Positions derived from
    /// these drift from the real text whenever tokens are separated by more than nothing.
    Concatenated,
    /// Offsets into the source text itself. These translate exactly.
    TextAware,
}

/// Structure containing all detector tunables.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Config {
    pub line_terminator: LineTerminator,

    /// A token is flagged if a draw from `1..=10` is strictly greater than this.
    pub flag_threshold: u8,
    pub offsets: OffsetMode,

    pub stochastic_message: String,
    pub pattern_message: String,
}

pub const STOCHASTIC_MESSAGE: &str = "errorroror";
pub const PATTERN_MESSAGE: &str = "errorror";
pub const DEFAULT_FLAG_THRESHOLD: u8 = 6;

impl Config {
    /// Returns the default configuration. Same as `Default::default`.
    ///
    /// Stochastic offsets are text-aware so that they can be translated to positions.
    pub fn new() -> Self {
        Config {
            line_terminator: LineTerminator::Lf,

            flag_threshold: DEFAULT_FLAG_THRESHOLD,
            offsets: OffsetMode::TextAware,

            stochastic_message: STOCHASTIC_MESSAGE.to_owned(),
            pattern_message: PATTERN_MESSAGE.to_owned(),
        }
    }

    /// Returns the default configuration for sources using `\r\n` line endings.
    pub fn crlf() -> Self {
        Config {
            line_terminator: LineTerminator::CrLf,
            ..Config::new()
        }
    }

    /// Returns the default configuration with the line terminator `source` uses.
    pub fn for_source(source: &str) -> Self {
        Config {
            line_terminator: LineTerminator::detect(source),
            ..Config::new()
        }
    }

    /// Returns a configuration reproducing the historical behavior of the mock compiler,
    /// including offsets over concatenated tokens.
    pub fn original() -> Self {
        Config {
            offsets: OffsetMode::Concatenated,
            ..Config::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
