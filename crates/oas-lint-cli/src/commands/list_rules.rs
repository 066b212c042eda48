//! List rules command implementation.

use oas_lint_rules::default_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules (in execution order):\n");
    println!("{:<26} {:<32} Description", "Name", "Codes");
    println!("{}", "-".repeat(100));

    for rule in default_rules() {
        let codes: Vec<&str> = rule.codes().iter().map(|c| c.as_str()).collect();
        for (i, code) in codes.iter().enumerate() {
            if i == 0 {
                println!("{:<26} {:<32} {}", rule.name(), code, rule.description());
            } else {
                println!("{:<26} {:<32}", "", code);
            }
        }
    }

    println!("\nUse --rules to run a subset, by rule name or violation code, e.g.:");
    println!("  oas-lint check openapi.yaml --rules operation-description,post-created-response");
    println!("  oas-lint check openapi.yaml --rules ENUM_NOT_UPPER_SNAKE_CASE");
}
