use clap::ValueEnum;

/// Target configuration accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Configuration {
    /// Unoptimized engine and game code
    #[value(name = "debug")]
    Debug,

    /// Optimized engine, unoptimized game code
    #[value(name = "debug-game")]
    DebugGame,

    /// Optimized build with developer features
    #[value(name = "development")]
    Development,

    /// Release build
    #[value(name = "shipping")]
    Shipping,

    /// Shipping build with test hooks
    #[value(name = "test")]
    Test,
}

/// Target type accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TargetType {
    /// Standalone game
    #[value(name = "game")]
    Game,

    /// Game with the editor loaded
    #[value(name = "editor")]
    Editor,

    /// Game without server-only code
    #[value(name = "client")]
    Client,

    /// Game without client-only code
    #[value(name = "server")]
    Server,

    /// Standalone program
    #[value(name = "program")]
    Program,
}

impl From<Configuration> for modgate_descriptor::TargetConfiguration {
    fn from(value: Configuration) -> Self {
        match value {
            Configuration::Debug => Self::Debug,
            Configuration::DebugGame => Self::DebugGame,
            Configuration::Development => Self::Development,
            Configuration::Shipping => Self::Shipping,
            Configuration::Test => Self::Test,
        }
    }
}

impl From<TargetType> for modgate_descriptor::TargetType {
    fn from(value: TargetType) -> Self {
        match value {
            TargetType::Game => Self::Game,
            TargetType::Editor => Self::Editor,
            TargetType::Client => Self::Client,
            TargetType::Server => Self::Server,
            TargetType::Program => Self::Program,
        }
    }
}
