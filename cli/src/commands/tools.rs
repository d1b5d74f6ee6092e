//! Tools listing command

use anyhow::Result;
use colored::Colorize;
use reagent_core::tools::ToolRegistry;

/// Print the registered tools and their prompt descriptions
pub fn tools_command() -> Result<()> {
    let registry = ToolRegistry::default();

    println!("{}", "Available tools:".bold());
    for name in registry.list_tools() {
        if let Some(tool) = registry.create_tool(name) {
            println!("\n  {}", name.cyan().bold());
            for line in tool.description().lines() {
                println!("    {}", line.trim());
            }
        }
    }

    Ok(())
}
