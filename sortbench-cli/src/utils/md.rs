use std::io::IsTerminal;

use sortbench::SuiteEntry;

pub struct MarkdownPrinter {
    content: String,
}

impl MarkdownPrinter {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn is_tty(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    pub fn dump(&self) {
        if self.is_tty() {
            let mut skin = termimad::MadSkin::default();
            for i in 0..8 {
                skin.headers[i].align = termimad::Alignment::Left;
                skin.headers[i].add_attr(termimad::crossterm::style::Attribute::Bold);
                skin.headers[i].set_fg(termimad::crossterm::style::Color::Blue);
            }
            skin.headers[0].set_bg(termimad::crossterm::style::Color::Blue);
            skin.headers[0].add_attr(termimad::crossterm::style::Attribute::NoUnderline);
            skin.print_text(&self.content);
        } else {
            println!("{}", self.content);
        }
    }

    pub fn add(&mut self, s: impl AsRef<str>) {
        self.content.push_str(s.as_ref());
    }

    pub fn add_results(&mut self, entries: &[SuiteEntry]) {
        self.content.push_str(&results_to_markdown(entries));
    }
}

/// Renders one row per algorithm; failed entries show their error instead of a time.
fn results_to_markdown(entries: &[SuiteEntry]) -> String {
    let mut md = "| Algorithm | Time (s) |\n|:-|-:|\n".to_owned();
    for entry in entries {
        let time = match &entry.result {
            Ok(result) => format!("{:.3}", result.normalized()),
            Err(e) => format!("failed: {}", e),
        };
        md += &format!("| {} | {} |\n", entry.algorithm, time);
    }
    md
}
