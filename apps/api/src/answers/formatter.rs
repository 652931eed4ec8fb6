//! Answer Formatter: renders a catalog fact-sheet into the fixed seven-section
//! exam template. Pure and byte-stable: same entry, same bytes.

use std::fmt::Write;

use crate::topics::catalog::TopicEntry;

const DEFAULT_MNEMONIC: &str = "Remember the key points below";
const DEFAULT_MEMORY_TIP: &str = "Review these points regularly";
const DEFAULT_EXAM_TIP: &str = "Practice writing this answer in 10 minutes";

/// Renders `entry` as a markdown answer.
pub fn format_answer(entry: &TopicEntry) -> String {
    let mut answer = String::new();

    push_section(&mut answer, "📝 **DEFINITION**", entry.definition);
    answer.push('\n');
    push_section(
        &mut answer,
        "🧠 **MEMORY TIP (Mnemonic)**",
        entry.mnemonic.unwrap_or(DEFAULT_MNEMONIC),
    );
    answer.push('\n');

    if let Some((kind, items)) = entry.key_points() {
        push_numbered(&mut answer, &format!("🔑 **{}**", kind.label()), items);
    }

    answer.push('\n');
    push_section(
        &mut answer,
        "💡 **MEMORY TRICK**",
        entry.memory_tip.unwrap_or(DEFAULT_MEMORY_TIP),
    );

    answer.push('\n');
    push_numbered(&mut answer, "✅ **ADVANTAGES**", &entry.advantages);

    answer.push('\n');
    push_numbered(&mut answer, "🌍 **REAL-WORLD APPLICATIONS**", &entry.applications);

    answer.push('\n');
    answer.push_str("💡 **VTU EXAM TIP**\n");
    answer.push_str(entry.exam_tip.unwrap_or(DEFAULT_EXAM_TIP));

    answer
}

fn push_section(out: &mut String, header: &str, body: &str) {
    out.push_str(header);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
}

/// Header line followed by a 1-based numbered list, one item per line.
fn push_numbered(out: &mut String, header: &str, items: &[&str]) {
    out.push_str(header);
    out.push('\n');
    for (i, item) in items.iter().enumerate() {
        // writing into a String cannot fail
        let _ = writeln!(out, "{}. {}", i + 1, item);
    }
}
