use colored::Colorize;
use sanitize_core::{CleanReport, CleanStats, GeneratorsOutcome, TrashOutcome};

pub fn banner() {
    println!("{}", "\n=== Sanitize I ===\n".magenta().bold());
}

pub fn processing(organisation_name: &str) {
    println!(
        "{}",
        format!("\nProcessing save: {}", organisation_name.bold()).cyan()
    );
    println!("{}", "\nCleaning Process Started".blue().underline());
}

pub fn clean_report(report: &CleanReport, dry_run: bool) {
    let verb = if dry_run { "Would clean" } else { "Cleaned" };
    match &report.trash {
        TrashOutcome::Cleaned(n) => println!(
            "{}",
            format!("✓ {} {} items from Trash.json", verb, n.to_string().bold()).green()
        ),
        TrashOutcome::Empty => println!("{}", "- No items found in Trash.json".bright_black()),
        TrashOutcome::Missing => println!("{}", "⚠ Trash.json not found".yellow()),
        TrashOutcome::Failed(e) => {
            eprintln!("{}", format!("✗ Error cleaning Trash.json: {}", e).red())
        }
    }
    match &report.generators {
        GeneratorsOutcome::Processed { cleaned, .. } if *cleaned > 0 => println!(
            "{}",
            format!("✓ {} {} generator files", verb, cleaned.to_string().bold()).green()
        ),
        GeneratorsOutcome::Processed { .. } => {
            println!("{}", "- No items found in generator files".bright_black())
        }
        GeneratorsOutcome::Missing => println!("{}", "⚠ Generators directory not found".yellow()),
        GeneratorsOutcome::Failed(e) => {
            eprintln!("{}", format!("✗ Error cleaning generators: {}", e).red())
        }
    }
}

pub fn summary(stats: CleanStats, dry_run: bool) {
    let heading = if dry_run {
        "\n=== Dry Run Complete ==="
    } else {
        "\n=== Cleaning Complete ==="
    };
    println!("{}", heading.green().bold());
    println!(
        "{}",
        format!(
            "Summary: {} {} trash items and {} generators",
            if dry_run { "Would clean" } else { "Cleaned" },
            stats.trash_items_count.to_string().green().bold(),
            stats.generators_count.to_string().green().bold()
        )
        .white()
    );
}
