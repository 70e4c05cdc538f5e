use terminal_size::{terminal_size, Width};
use crate::structs::code_stats::CodeStats;
use crate::structs::history_entry::HistoryEntry;
use crate::structs::language_label::LanguageLabel;

const FALLBACK_WIDTH: usize = 60;
const MAX_WIDTH: usize = 100;

pub struct ResultLogger {}

impl ResultLogger {

    pub fn divider_width() -> usize {
        terminal_size()
            .map(|(Width(width), _)| usize::from(width))
            .unwrap_or(FALLBACK_WIDTH)
            .min(MAX_WIDTH)
    }

    fn divider() -> String {
        "━".repeat(Self::divider_width())
    }

    /// Markdown goes to stdout so it can be piped; framing goes to stderr.
    pub fn print_analysis(title: &str, markdown: &str) {
        eprintln!("\n🔍 {}", title);
        eprintln!("{}", Self::divider());
        println!("{}", markdown);
        eprintln!("{}", Self::divider());
    }

    pub fn print_stats(stats: &CodeStats, language: &LanguageLabel) {
        println!("\n📊 Code Insights");
        println!("{}", Self::divider());
        println!("   Lines:      {}", stats.lines);
        println!("   Characters: {}", stats.chars);
        println!("   Functions:  {}", stats.functions);
        println!("   Complexity: {}", stats.complexity);
        println!("   Language:   {}", language);
    }

    pub fn print_history(entries: &[&HistoryEntry]) {
        println!("\n📜 History");
        if entries.is_empty() {
            println!("   No analysis yet.");
            return;
        }

        for (i, entry) in entries.iter().enumerate() {
            let marker = if entry.succeeded { "✅" } else { "❌" };
            println!("{}. {} {} ({})", i + 1, marker, entry.title(), entry.created_at.format("%H:%M:%S"));
            println!("   {}", entry.preview().replace('\n', " "));
        }
    }
}
