//! Prints the ReAct system prompt the agent sends to the model.
//!
//! The prompt is assembled from the registered tools, so this is the easiest
//! way to see exactly what a given tool selection exposes to the model.

use reagent_core::agent::build_system_prompt;
use reagent_core::tools::ToolRegistry;

fn main() {
    let executor = ToolRegistry::default().create_executor_with_all();
    println!("{}", build_system_prompt(&executor));
}
