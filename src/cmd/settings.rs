//! Settings panel: the default level

use header_count::{FixedPrompt, HeadingLevel, Result};

use super::context::Context;

pub fn run(ctx: &Context, default_level: Option<String>) -> Result<()> {
    let mut plugin = ctx.load_plugin(None, Box::new(FixedPrompt::new(None, false)))?;

    if let Some(input) = default_level {
        let result = plugin.set_default_level_input(&input);
        plugin.on_unload();
        result?;
        eprintln!("Default level set to {}", plugin.default_level());
        if ctx.json {
            println!("{}", render(ctx, plugin.default_level()));
        }
        return Ok(());
    }

    println!("{}", render(ctx, plugin.default_level()));
    plugin.on_unload();
    Ok(())
}

/// Current default level as printed on stdout
fn render(ctx: &Context, level: HeadingLevel) -> String {
    if ctx.json {
        serde_json::json!({ "defaultLevel": level }).to_string()
    } else {
        format!("Default level: {}", level)
    }
}
