//! Items command - list the checklist

use ai_verify::checklist::{max_checklist_score, ChecklistItem};

pub fn run(show_actions: bool) -> anyhow::Result<()> {
    println!("📋 Checklist Items");
    println!("──────────────────");

    for item in ChecklistItem::ALL {
        println!("[{}] {:<28} {}", item.weight(), item.id(), item.label());
        if show_actions {
            if let Some(action) = item.action() {
                println!("     ↳ {}", action);
            }
        }
    }

    println!(
        "\nTotal: {} items, {} points if none are ticked",
        ChecklistItem::COUNT,
        max_checklist_score()
    );
    println!("Bands: Green ≤ 8, Amber 9-15, Red ≥ 16");
    Ok(())
}
