//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::ScoreCalculator;
use crate::{AnalysisFailure, AnalysisOutcome, Grade, PolicyAnalysis, MAX_SCORE};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis outcome
    pub fn report(&self, outcome: &AnalysisOutcome) {
        match outcome {
            AnalysisOutcome::Success(analysis) => {
                self.print_header(analysis);
                self.print_score(analysis);
                self.print_criteria(analysis);
                self.print_suggestions(analysis);
                println!();
            }
            AnalysisOutcome::Failure(failure) => self.print_failure(failure),
        }
    }

    /// Report multiple outcomes with summary
    pub fn report_many(&self, outcomes: &[AnalysisOutcome], stats: &AggregateStats) {
        for outcome in outcomes {
            self.report(outcome);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, outcome: &AnalysisOutcome) {
        match outcome {
            AnalysisOutcome::Success(analysis) => {
                let grade_colored = self.colorize_grade(&analysis.score.grade);
                println!("{}: {} ({})", analysis.url, analysis.score.value, grade_colored);
            }
            AnalysisOutcome::Failure(failure) => {
                println!("{}: {}", failure.url, failure.error.red());
            }
        }
    }

    fn print_header(&self, analysis: &PolicyAnalysis) {
        println!();
        println!(
            "{}",
            format!("🔒 Privacy Policy Analysis: {}", analysis.url).bold()
        );
        if let Some(ref title) = analysis.title {
            println!("   Title: {}", title);
        }
        println!();
    }

    fn print_score(&self, analysis: &PolicyAnalysis) {
        let grade_str = self.colorize_grade(&analysis.score.grade);
        let score_bar = self.create_score_bar(analysis.score.value);

        println!("   Score: {} {}", score_bar, grade_str.bold());
        println!(
            "   {}",
            ScoreCalculator::grade_description(analysis.score.grade).dimmed()
        );
        println!();
    }

    fn print_criteria(&self, analysis: &PolicyAnalysis) {
        println!("   {}", "Criteria:".bold());

        for (criterion, passed) in analysis.criteria.entries() {
            let icon = if passed { "✓".green() } else { "✗".red() };
            if self.verbose {
                println!(
                    "   {} {} {}",
                    icon,
                    criterion.label(),
                    format!("[{}]", criterion).dimmed()
                );
            } else {
                println!("   {} {}", icon, criterion.label());
            }
        }
        println!();
    }

    fn print_suggestions(&self, analysis: &PolicyAnalysis) {
        if analysis.suggestions.is_empty() {
            return;
        }

        println!("   {}", "Suggestions:".bold());
        for suggestion in &analysis.suggestions {
            println!("   {} {}", "→".cyan(), suggestion);
        }
    }

    fn print_failure(&self, failure: &AnalysisFailure) {
        println!();
        println!(
            "{} {}: {}",
            "✗".red().bold(),
            failure.url,
            failure.error.red()
        );
        println!();
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   URLs analyzed:   {}",
            stats.urls_analyzed.to_string().bold()
        );
        println!("   Fetch failures:  {}", stats.fetch_failures);
        match stats.average_score {
            Some(score) => println!(
                "   Average score:   {} ({})",
                score.value.to_string().bold(),
                self.colorize_grade(&score.grade)
            ),
            None => println!("   Average score:   {}", "n/a".dimmed()),
        }
        println!("   Suggestions:     {}", stats.total_suggestions);
        println!();
    }

    fn colorize_grade(&self, grade: &Grade) -> colored::ColoredString {
        let s = grade.to_string();
        match grade {
            Grade::A => s.green().bold(),
            Grade::B => s.green(),
            Grade::C => s.yellow(),
            Grade::D => s.red(),
            Grade::F => s.red().bold(),
        }
    }

    fn create_score_bar(&self, value: u8) -> String {
        let filled = (value.min(MAX_SCORE) as usize * 20) / MAX_SCORE as usize;
        let empty = 20 - filled;

        let bar = format!(
            "[{}{}] {:>2}/{}",
            "█".repeat(filled),
            "░".repeat(empty),
            value,
            MAX_SCORE
        );

        if self.use_colors {
            let percent = (value.min(MAX_SCORE) as usize * 100) / MAX_SCORE as usize;
            if percent >= 80 {
                bar.green().to_string()
            } else if percent >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
