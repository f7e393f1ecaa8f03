use header_count::{FixedPrompt, Result};

use super::context::Context;

pub fn run(ctx: &Context, file: Option<String>) -> Result<()> {
    // the summary never prompts
    let mut plugin = ctx.load_plugin(file, Box::new(FixedPrompt::new(None, false)))?;
    let outcome = plugin.header_summary();
    plugin.on_unload();
    super::count::print_outcome(ctx, outcome?);
    Ok(())
}
