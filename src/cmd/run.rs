//! Command-palette style invocation by id

use header_count::{Result, TerminalPrompt};

use super::context::Context;

pub fn run(ctx: &Context, id: &str, file: Option<String>) -> Result<()> {
    let mut plugin = ctx.load_plugin(file, Box::new(TerminalPrompt::stdio(false)))?;
    let outcome = plugin.execute(id);
    plugin.on_unload();
    super::count::print_outcome(ctx, outcome?);
    Ok(())
}
