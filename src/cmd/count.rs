use header_count::{ActionOutcome, FixedPrompt, HeadingLevel, LevelPrompt, Result, TerminalPrompt};

use super::context::Context;

pub fn run(
    ctx: &Context,
    file: Option<String>,
    level: Option<u8>,
    yes: bool,
    remember: bool,
) -> Result<()> {
    // clap already restricted the value to 1..=6
    let level = level.map(HeadingLevel::try_from).transpose()?;

    let prompt: Box<dyn LevelPrompt> = if level.is_some() || yes {
        Box::new(FixedPrompt::new(level, remember))
    } else {
        Box::new(TerminalPrompt::stdio(remember))
    };

    let mut plugin = ctx.load_plugin(file, prompt)?;
    let outcome = plugin.count_headers();
    plugin.on_unload();
    print_outcome(ctx, outcome?);
    Ok(())
}

/// Print an action's result on stdout
pub fn print_outcome(ctx: &Context, outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Counted { level, count } => {
            if ctx.json {
                println!("{}", serde_json::json!({ "level": level, "count": count }));
            } else {
                println!("{}", count);
            }
        }
        ActionOutcome::Summarized { summary, .. } => {
            if ctx.json {
                println!("{}", serde_json::json!(summary));
            } else {
                println!("{}", summary);
            }
        }
        ActionOutcome::Dismissed => {}
    }
}
