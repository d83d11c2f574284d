//! The `glance chat` command: an interactive question session about one
//! image, with follow-up questions sharing a transcript.

use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use glance_core::{image_name_from_url, Config, Glance, Session};

use super::{print_explanation, spinner};

/// Arguments for the `chat` command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// URL of the image to discuss (prompted for when omitted)
    #[arg(short, long)]
    pub image: Option<String>,
}

/// Execute the chat command.
pub async fn execute(args: ChatArgs, config: Config) -> anyhow::Result<()> {
    let glance = Glance::new(config)?;
    let theme = ColorfulTheme::default();

    let image_url = match args.image {
        Some(url) => url,
        None => Input::with_theme(&theme)
            .with_prompt("Image URL")
            .interact_text()?,
    };

    let name = image_name_from_url(&image_url);
    if name.is_empty() {
        println!("{}", style("Starting a session about the image.").bold());
    } else {
        println!("{}", style(format!("Starting a session about {name}.")).bold());
    }
    println!("{}", style("An empty question ends the session.").dim());

    // One transcript for the whole run; follow-up questions see earlier
    // exchanges, and nothing survives process exit.
    let mut session = Session::new();

    loop {
        let question: String = Input::with_theme(&theme)
            .with_prompt("Question")
            .allow_empty(true)
            .interact_text()?;
        let question = question.trim().to_string();
        if question.is_empty() {
            break;
        }

        let bar = spinner("Thinking...");
        let result = glance.explain(&image_url, &question, &mut session).await;
        bar.finish_and_clear();

        match result {
            Ok(explanation) => {
                print_explanation(&explanation);
                println!();
            }
            Err(e) => {
                tracing::error!("Failed to answer question: {e}");
                eprintln!("{}", style(format!("Error: {e}")).red());
            }
        }
    }

    if !session.is_empty() {
        println!(
            "{}",
            style(format!("Session ended after {} question(s).", session.len())).dim()
        );
    }
    Ok(())
}
