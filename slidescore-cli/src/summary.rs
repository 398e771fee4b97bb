//! Terminal output for batch runs.

use std::env;
use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;
use slidescore_batch::{BatchReport, SlideReport};
use slidescore_core::{FindingCategory, QualityGrade};

/// Findings shown per category in verbose mode.
const BRIEF_FINDINGS: usize = 3;

/// Slides listed in the best and worst rankings.
const RANKED_SLIDES: usize = 5;

const RULE_WIDTH: usize = 80;

/// Colors only when stdout is a terminal and `NO_COLOR` is unset.
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            enabled: io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
        }
    }

    fn grade(&self, grade: QualityGrade) -> String {
        let label = grade.label().to_uppercase();
        if !self.enabled {
            return label;
        }
        match grade {
            QualityGrade::Excellent => label.green().bold().to_string(),
            QualityGrade::Good => label.green().to_string(),
            QualityGrade::Fair => label.yellow().to_string(),
            QualityGrade::Poor => label.bright_red().to_string(),
            QualityGrade::Critical => label.red().bold().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn failure(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Progress block for one slide.
pub fn print_slide_line(
    palette: &Palette,
    position: usize,
    total: usize,
    slide: &SlideReport,
    verbose: bool,
) {
    println!("[{position}/{total}] {}", palette.heading(&slide.name));

    let Some(analysis) = slide.analysis() else {
        let message = slide.error().unwrap_or_default();
        println!("   {}", palette.failure(&format!("Error: {message}")));
        return;
    };

    let result = &analysis.result;
    println!(
        "   Score: {:.2} / 10.00 ({})",
        analysis.score,
        palette.grade(QualityGrade::of(analysis.score))
    );
    println!(
        "   Errors: {} total ({} overlap, {} container, {} viewport)",
        result.total(),
        result.overlap.len(),
        result.container_overflow.len(),
        result.viewport_overflow.len()
    );

    if verbose {
        for category in FindingCategory::ALL {
            let count = result.count(category);
            if count == 0 {
                continue;
            }
            println!("      {category}:");
            for finding in result.findings_in(category).take(BRIEF_FINDINGS) {
                println!("        • {finding}");
            }
            if count > BRIEF_FINDINGS {
                println!("        ... and {} more", count - BRIEF_FINDINGS);
            }
        }
    }
}

/// Distribution, rankings and error totals.
pub fn print_batch_summary(palette: &Palette, report: &BatchReport) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}");
    println!("{}", palette.heading("BATCH SCORING SUMMARY"));
    println!("{rule}");

    println!("\nTotal Slides: {}", report.total_slides);
    println!("Average Score: {:.2} / 10.00", report.average_score);
    let failures = report.failures().count();
    if failures > 0 {
        println!("{}", palette.failure(&format!("Failed Slides: {failures}")));
    }

    println!("\nQuality Distribution:");
    for grade in QualityGrade::ALL {
        let bound = if grade == QualityGrade::Critical {
            "(<2.5)".to_string()
        } else {
            format!("(≥{:.1})", grade.lower_bound())
        };
        let label = format!("{} {bound}", grade.label().to_uppercase());
        println!(
            "   {:<18} {:3} slides",
            label,
            report.summary.count(grade)
        );
    }

    println!("\nTop {RANKED_SLIDES} Best Slides:");
    for (idx, slide) in report.best(RANKED_SLIDES).iter().enumerate() {
        println!("   {}. {:30} - {:.2} / 10.00", idx + 1, slide.name, slide.score());
    }
    println!("\nTop {RANKED_SLIDES} Worst Slides:");
    for (idx, slide) in report.worst(RANKED_SLIDES).iter().enumerate() {
        println!("   {}. {:30} - {:.2} / 10.00", idx + 1, slide.name, slide.score());
    }

    let totals = report.error_totals();
    println!("\nTotal Errors Detected: {}", totals.total());
    println!("   - Text overlaps:          {}", totals.overlap);
    println!("   - Container overflows:    {}", totals.container_overflow);
    println!("   - Viewport overflows:     {}", totals.viewport_overflow);
    println!("\n{rule}");
}
