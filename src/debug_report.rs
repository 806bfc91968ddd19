use concord::{CheckDetails, RuleMatch, RuleOutcome};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(details: &CheckDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Checking: \"{}\"", details.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    for outcome in &details.outcomes {
        print_outcome(outcome, &palette);
    }

    println!("\n{}", palette.paint("━━━ Matches ━━━", ansi::GRAY));
    if details.matches.is_empty() {
        println!("{}", palette.dim("  No rule fired"));
        println!("\n{}", palette.dim("  Tip: Set CONCORD_DEBUG_RULES=1 to see per-path evaluation details"));
    } else {
        for (idx, hit) in details.matches.iter().enumerate() {
            print_match(idx, hit, details, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.elapsed), ansi::GREEN));
    println!();
}

fn print_outcome(outcome: &RuleOutcome, palette: &ansi::Palette) {
    let verdict = if let Some(error) = &outcome.error {
        palette.paint(format!("✗ {error}"), ansi::RED)
    } else if outcome.corrections > 0 {
        palette.paint(format!("✓ {} corrections", outcome.corrections), ansi::GREEN)
    } else {
        palette.dim("✓ clean".to_string())
    };

    println!("  {} {}", palette.paint(&outcome.rule_id, ansi::BLUE), verdict);
    println!(
        "      {} {}  {} {}  {} {}  {}",
        palette.dim("nodes:"),
        outcome.tree_nodes,
        palette.dim("paths:"),
        outcome.paths,
        palette.dim("invalid:"),
        outcome.invalid_paths,
        palette.dim(format!("{:?}", outcome.duration)),
    );
}

fn print_match(idx: usize, hit: &RuleMatch, details: &CheckDetails, palette: &ansi::Palette) {
    let body = details.text.get(hit.start..hit.end).unwrap_or("");
    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{idx}]"), ansi::GRAY),
        palette.bold(palette.paint(body, ansi::GREEN)),
        palette.dim("│"),
        palette.paint(format!("span {}..{}", hit.start, hit.end), ansi::YELLOW),
    );
    println!(
        "      {} {}  {} {}",
        palette.dim("rule:"),
        palette.paint(&hit.rule_id, ansi::CYAN),
        palette.dim("│ tag:"),
        palette.paint(&hit.new_pos_tag, ansi::BLUE),
    );
    if !hit.message.is_empty() {
        println!("      {} {}", palette.dim("message:"), hit.message);
    }
    if hit.suggestions.is_empty() {
        println!("      {}", palette.dim("no suggested forms (dictionary miss)"));
    } else {
        println!(
            "      {} {}",
            palette.dim("suggest:"),
            palette.paint(hit.suggestions.join(", "), ansi::GREEN)
        );
    }
}
