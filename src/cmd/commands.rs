use header_count::{FixedPrompt, Result};

use super::context::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let mut plugin = ctx.load_plugin(None, Box::new(FixedPrompt::new(None, false)))?;

    if ctx.json {
        let commands: Vec<_> = plugin
            .commands()
            .iter()
            .map(|c| serde_json::json!({ "id": c.id, "name": c.name, "icon": c.ribbon_icon }))
            .collect();
        println!("{}", serde_json::Value::Array(commands));
    } else {
        for command in plugin.commands() {
            match command.ribbon_icon {
                Some(icon) => println!("{}\t{}\t[{}]", command.id, command.name, icon),
                None => println!("{}\t{}", command.id, command.name),
            }
        }
    }

    plugin.on_unload();
    Ok(())
}
