mod generate;
mod probe;

use {
    ::log::Level,
    clap::{Args, Parser, Subcommand, ValueEnum},
    clap_complete::Shell,
    glbind::{Api, logger::Logger},
    std::path::PathBuf,
};

/// Inspect the OpenGL entry points available on this machine.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Glbind {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// The log level.
    #[arg(value_enum, long, default_value_t)]
    pub log_level: CliLogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Load the GL library and print which name each command resolved to.
    Probe(ProbeArgs),
    /// Generate shell completion scripts for glbind.
    GenerateCompletion(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// The API whose library is loaded.
    #[arg(value_enum, long, default_value_t)]
    pub api: CliApi,
    /// Load this library instead of the platform default.
    ///
    /// Overrides GLBIND_LIBRARY.
    #[arg(long)]
    pub library: Option<PathBuf>,
    /// Only print commands that could not be resolved.
    #[arg(long)]
    pub missing: bool,
    /// Also probe the WGL extension commands.
    ///
    /// Most of them only resolve while a context is current.
    #[arg(long)]
    pub wgl: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash, Default)]
pub enum CliLogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Trace => Level::Trace,
            CliLogLevel::Debug => Level::Debug,
            CliLogLevel::Info => Level::Info,
            CliLogLevel::Warn => Level::Warn,
            CliLogLevel::Error => Level::Error,
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash, Eq, PartialEq, Default)]
pub enum CliApi {
    #[default]
    Gl,
    Gles,
}

impl From<CliApi> for Api {
    fn from(api: CliApi) -> Self {
        match api {
            CliApi::Gl => Api::Gl,
            CliApi::Gles => Api::Gles,
        }
    }
}

pub fn main() {
    let cli = Glbind::parse();
    Logger::install_stderr(cli.global.log_level.into());
    match cli.command {
        Cmd::Probe(a) => probe::main(a),
        Cmd::GenerateCompletion(g) => generate::main(g),
    }
}
