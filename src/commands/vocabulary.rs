use anyhow::Result;
use manuscript_analyzer::Vocabulary;
use tracing::info;

use crate::cli::VocabularyArgs;
use crate::util::{render_json_pretty, write_json_pretty};

pub fn run(args: VocabularyArgs) -> Result<()> {
    let vocabulary = Vocabulary::default();

    match args.output {
        Some(path) => {
            write_json_pretty(&path, &vocabulary)?;
            info!(path = %path.display(), "wrote default vocabulary");
        }
        None => {
            print!("{}", render_json_pretty(&vocabulary)?);
        }
    }

    Ok(())
}
