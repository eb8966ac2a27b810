use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "decorator-demo")]
#[command(about = "Decorator pattern demonstration: wraps a component in stacked decorators")]
pub struct CliConfig {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
