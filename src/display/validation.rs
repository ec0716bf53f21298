//! Validation report formatting

use crate::validation::ValidationErrors;
use crate::wizard::Step;

/// Format per-step validation results, one block per step
pub fn format_validation_report(results: &[(Step, ValidationErrors)]) -> String {
    let mut output = String::new();

    for (step, errors) in results {
        if errors.is_empty() {
            output.push_str(&format!("✓ {}\n", step));
            continue;
        }

        output.push_str(&format!("✗ {}\n", step));
        for (field, error) in errors.iter() {
            output.push_str(&format!(
                "    {:<16} {:<14} {}\n",
                field.key(),
                error.kind.to_string(),
                error.message
            ));
        }
    }

    let failed = results.iter().filter(|(_, e)| !e.is_empty()).count();
    if failed == 0 {
        output.push_str("\nDraft is valid.\n");
    } else {
        output.push_str(&format!("\n{} step(s) failed validation.\n", failed));
    }

    output
}
