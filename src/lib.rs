//! seo_audit library: on-page SEO analysis for blog post content.
//!
//! This library scores a blog post snapshot against a fixed set of on-page
//! SEO checks (title and description length, focus keyword usage, content
//! length, featured image), computes readability and structure metrics, and
//! produces the preview data (search snippet, social cards, meta tags,
//! JSON-LD) the publishing surface renders.
//!
//! The engine is a pure function of the snapshot: no I/O, no shared state,
//! identical results on identical input. The CLI around it batch-processes
//! snapshots from a JSONL file.
//!
//! # Example
//!
//! ```
//! use seo_audit::{analyze, PostSnapshot};
//!
//! let snapshot = PostSnapshot {
//!     title: "A practical guide to prompt engineering at work".to_string(),
//!     content: "<p>Some body text. With sentences!</p>".to_string(),
//!     slug: "prompt-engineering-guide".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = analyze(&snapshot);
//! assert!(result.score <= 100);
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod audit;
pub mod checks;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fix;
pub mod initialization;
pub mod input;
pub mod models;
pub mod normalize;
pub mod preview;
pub mod schema;
pub mod structure;
pub mod utils;

// Re-export public API
pub use analysis::{analyze, report, ContentReport};
pub use config::{Action, Config, ExportFormat, LogFormat, LogLevel};
pub use models::{AnalysisResult, Finding, FindingKind, PostSnapshot, SiteContext};
pub use run::{run_audit, AuditReport};

// Internal run module (contains the main batch-processing logic)
mod run {
    use anyhow::{Context, Result};
    use colored::Colorize;
    use std::io::Write;

    use crate::analysis::{report, ContentReport};
    use crate::audit::{print_audit_report, AuditStats};
    use crate::checks::reading_time_display;
    use crate::config::{Action, Config, ExportFormat};
    use crate::export::{build_export_row, export_csv, export_jsonl};
    use crate::fix::apply_fixes;
    use crate::input::read_snapshots;
    use crate::models::{FindingKind, PostSnapshot, SiteContext};

    /// Score below which a post lands on the needs-attention list.
    const ATTENTION_SCORE: u32 = 50;
    /// Maximum posts shown on the needs-attention list.
    const ATTENTION_LIMIT: usize = 10;

    /// Results of one audit run.
    ///
    /// Contains summary statistics about the processed batch.
    #[derive(Debug, Clone)]
    pub struct AuditReport {
        /// Number of posts analyzed (after score filtering)
        pub posts_analyzed: usize,
        /// Mean score across analyzed posts
        pub average_score: f64,
        /// Total warning and error findings across analyzed posts
        pub total_issues: usize,
    }

    /// Runs a batch analysis with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads post
    /// snapshots from the input file, analyzes each one, and performs the
    /// configured action (detailed report, audit summary, export, or fix
    /// suggestions).
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened or the output
    /// file cannot be written. Analysis itself never fails: malformed
    /// content degrades to the weakest applicable findings.
    pub fn run_audit(config: Config) -> Result<AuditReport> {
        let site = SiteContext::new(
            &config.base_url,
            &config.site_name,
            Some(config.twitter_site.as_str()),
        );

        let snapshots =
            read_snapshots(&config.file).context("Failed to read post snapshots")?;
        log::info!("Analyzing {} posts", snapshots.len());

        let analyzed: Vec<(PostSnapshot, ContentReport)> = snapshots
            .into_iter()
            .map(|snapshot| {
                let content_report = report(&snapshot, &site);
                (snapshot, content_report)
            })
            .collect();

        // Score range filters apply to the per-post surfaces; the audit
        // summary always covers the whole batch
        let in_range = |content_report: &ContentReport| {
            (config.min_score..=config.max_score).contains(&content_report.analysis.score)
        };

        match config.action {
            Action::Analyze => {
                for (snapshot, content_report) in
                    analyzed.iter().filter(|(_, r)| in_range(r))
                {
                    print_post_analysis(snapshot, content_report);
                }
            }
            Action::Audit => {
                let mut stats = AuditStats::new();
                for (_, content_report) in &analyzed {
                    stats.record(&content_report.analysis);
                }
                let mut attention: Vec<(String, u32)> = analyzed
                    .iter()
                    .filter(|(_, r)| r.analysis.score < ATTENTION_SCORE)
                    .map(|(s, r)| (s.slug.clone(), r.analysis.score))
                    .collect();
                attention.sort_by_key(|(_, score)| *score);
                attention.truncate(ATTENTION_LIMIT);
                print_audit_report(&stats, &attention);
            }
            Action::Export => {
                let rows: Vec<_> = analyzed
                    .iter()
                    .filter(|(_, r)| in_range(r))
                    .map(|(s, r)| build_export_row(s, r, &site))
                    .collect();
                let written = match config.format {
                    ExportFormat::Csv => export_csv(&rows, config.output.as_ref())?,
                    ExportFormat::Jsonl => export_jsonl(&rows, config.output.as_ref())?,
                };
                log::info!("Exported {} rows", written);
            }
            Action::Fix => {
                write_fixes(&analyzed, config.output.as_ref())?;
            }
        }

        let counted: Vec<&ContentReport> = analyzed
            .iter()
            .map(|(_, r)| r)
            .filter(|r| in_range(r))
            .collect();
        let posts_analyzed = counted.len();
        let average_score = if posts_analyzed == 0 {
            0.0
        } else {
            counted.iter().map(|r| f64::from(r.analysis.score)).sum::<f64>()
                / posts_analyzed as f64
        };
        let total_issues = counted
            .iter()
            .flat_map(|r| &r.analysis.findings)
            .filter(|f| f.kind != FindingKind::Good)
            .count();

        Ok(AuditReport {
            posts_analyzed,
            average_score,
            total_issues,
        })
    }

    /// Prints the detailed analysis of one post.
    fn print_post_analysis(snapshot: &PostSnapshot, content_report: &ContentReport) {
        let analysis = &content_report.analysis;

        println!();
        println!("--- {} ---", snapshot.title.bold());
        println!("SEO Score: {}/100", analysis.score);
        println!("Word Count: {}", content_report.basic.word_count);
        println!(
            "Reading Time: {}",
            reading_time_display(content_report.basic.word_count)
        );
        if let Some(keyword) = snapshot.keyword() {
            println!("Focus Keyword: {}", keyword);
            println!(
                "Keyword Density: {:.2}% ({} uses)",
                analysis.keyword.density_percent, analysis.keyword.occurrences
            );
        }
        println!(
            "Readability: {} (Flesch: {:.1})",
            analysis.readability.level,
            analysis.readability.display_score()
        );

        let issues: Vec<&str> = analysis
            .findings
            .iter()
            .filter(|f| f.kind != FindingKind::Good)
            .map(|f| f.message.as_str())
            .collect();
        if !issues.is_empty() {
            println!("{}", "Issues:".red());
            for issue in issues {
                println!("  - {}", issue);
            }
        }

        if !content_report.recommendations.is_empty() {
            println!("{}", "Recommendations:".yellow());
            for recommendation in &content_report.recommendations {
                println!("  - {}", recommendation);
            }
        }

        let good: Vec<&str> = analysis
            .findings
            .iter()
            .filter(|f| f.kind == FindingKind::Good)
            .map(|f| f.message.as_str())
            .collect();
        if !good.is_empty() {
            println!("{}", "Good Practices:".green());
            for practice in good {
                println!("  - {}", practice);
            }
        }
    }

    /// Prints fix suggestions and optionally writes fixed snapshots as
    /// JSONL.
    fn write_fixes(
        analyzed: &[(PostSnapshot, ContentReport)],
        output: Option<&std::path::PathBuf>,
    ) -> Result<()> {
        let mut fixed_snapshots = Vec::with_capacity(analyzed.len());
        let mut fixed_posts = 0usize;

        for (snapshot, _) in analyzed {
            let (updated, fixes) = apply_fixes(snapshot);
            if fixes.is_empty() {
                log::debug!("No fixes for '{}'", snapshot.slug);
            } else {
                fixed_posts += 1;
                for fix in &fixes {
                    println!("{}: {}", snapshot.slug, fix.note.green());
                }
            }
            fixed_snapshots.push(updated);
        }
        println!("Fixes suggested for {} posts", fixed_posts);

        if let Some(output_path) = output {
            let file = std::fs::File::create(output_path).context(format!(
                "Failed to create output file: {}",
                output_path.display()
            ))?;
            let mut writer = std::io::BufWriter::new(file);
            for snapshot in &fixed_snapshots {
                let line = serde_json::to_string(snapshot)
                    .context("Failed to serialize fixed snapshot")?;
                writeln!(writer, "{}", line)?;
            }
            writer.flush()?;
            log::info!(
                "Wrote {} fixed snapshots to {}",
                fixed_snapshots.len(),
                output_path.display()
            );
        }

        Ok(())
    }
}
