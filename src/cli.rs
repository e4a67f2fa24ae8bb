use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "manuscript",
    version,
    about = "Manuscript segmentation and text-metrics tooling"
)]
pub struct Cli {
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Split(SplitArgs),
    Analyze(AnalyzeArgs),
    Vocabulary(VocabularyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MetricsMode {
    Basic,
    Enhanced,
}

impl MetricsMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = MetricsMode::Enhanced)]
    pub metrics: MetricsMode,

    #[arg(long, default_value = "outputs")]
    pub output_dir: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct VocabularyArgs {
    #[arg(long)]
    pub output: Option<PathBuf>,
}
