use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "glow",
    about = "Glow: generate single-file C/C++ OpenGL loader data from the Khronos registry",
    version
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an api/version/profile selection and emit loader template data
    Generate {
        /// Path to the registry JSON (`-` reads stdin)
        #[arg(long, default_value = "-")]
        registry: String,

        /// API variant: gl, gles1, or gles2
        #[arg(short = 'A', long, default_value = "gl")]
        api: String,

        /// Version ceiling as major.minor (1.0 ... 4.6)
        #[arg(short = 'S', long, default_value = "4.5")]
        spec: String,

        /// Profile: core or compatibility (gles uses common)
        #[arg(short = 'P', long, default_value = "core")]
        profile: String,

        /// Emit pre/post call debug hooks in the generated loader
        #[arg(short = 'D', long, default_value_t = true, action = ArgAction::Set)]
        debug: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
