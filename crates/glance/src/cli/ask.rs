//! The `glance ask` command: one question, one answer.

use clap::Args;
use glance_core::{Config, Glance, Session};

use super::{print_explanation, spinner};

/// Arguments for the `ask` command.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// URL of the image to ask about
    #[arg(short, long)]
    pub image: String,

    /// The question to ask
    pub question: String,

    /// Emit the result as JSON on stdout instead of formatted text
    #[arg(long)]
    pub json: bool,
}

/// Execute the ask command.
pub async fn execute(args: AskArgs, config: Config) -> anyhow::Result<()> {
    let glance = Glance::new(config)?;
    let mut session = Session::new();

    let bar = spinner("Looking at the image...");
    let result = glance.explain(&args.image, &args.question, &mut session).await;
    bar.finish_and_clear();

    let explanation = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&explanation)?);
        return Ok(());
    }

    print_explanation(&explanation);
    Ok(())
}
