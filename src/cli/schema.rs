//! JSON schema command

use greedy_rules::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: config, reader, rules");
            Ok(())
        }
        "config" => print_schema::<InductionConfig>(),
        "reader" => print_schema::<ReaderOptions>(),
        "rules" => print_schema::<RuleTable>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
