// src/report.rs
//! # Report composition
//! Two renderings of the same kept entries: a narrative block with one
//! paragraph per subject that has news, and a detail block with one section
//! per configured subject, in configured order, whether or not it has news.
//!
//! No I/O; the result is a plain string ready for delivery.

use crate::ingest::normalize::clean_text;
use crate::ingest::types::SubjectEntry;

pub const NO_NEWS_LINE: &str = "No major news found.";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// At most one per subject with news, in first-seen order.
    pub summary_paragraphs: Vec<String>,
    /// Exactly one per configured subject.
    pub detail_sections: Vec<String>,
    /// Fallback sentence when `summary_paragraphs` is empty.
    no_updates: String,
}

impl Report {
    pub fn compose<S: AsRef<str>>(subjects: &[S], kept: &[SubjectEntry]) -> Self {
        let summary_paragraphs = group_titles(kept)
            .into_iter()
            .filter_map(|(subject, titles)| summary_paragraph(subject, &titles))
            .collect();

        let detail_sections = subjects
            .iter()
            .map(|s| {
                let s = s.as_ref();
                let own: Vec<&SubjectEntry> = kept.iter().filter(|k| k.subject == s).collect();
                detail_section(s, &own)
            })
            .collect();

        Self {
            summary_paragraphs,
            detail_sections,
            no_updates: no_updates_sentence(subjects),
        }
    }

    /// Narrative paragraphs separated by a blank line, or the no-updates sentence.
    pub fn summary_block(&self) -> String {
        if self.summary_paragraphs.is_empty() {
            self.no_updates.clone()
        } else {
            self.summary_paragraphs.join("\n\n")
        }
    }

    /// Flat body: summary block, two blank lines, then the detail sections.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n\n{}",
            self.summary_block(),
            self.detail_sections.join("\n")
        )
    }
}

/// Group titles by subject, keeping the order subjects were first seen in.
fn group_titles(kept: &[SubjectEntry]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for k in kept {
        match groups.iter_mut().find(|(s, _)| *s == k.subject) {
            Some((_, titles)) => titles.push(k.entry.title.as_str()),
            None => groups.push((k.subject.as_str(), vec![k.entry.title.as_str()])),
        }
    }
    groups
}

/// `None` when there are no titles.
pub fn summary_paragraph<T: AsRef<str>>(subject: &str, titles: &[T]) -> Option<String> {
    match titles {
        [] => None,
        [only] => Some(format!(
            "For {subject}, the main development this week was: {}.",
            only.as_ref()
        )),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|t| t.as_ref()).collect();
            Some(format!(
                "For {subject}, key developments included: {}; and {}.",
                head.join("; "),
                last.as_ref()
            ))
        }
    }
}

/// "No major updates were detected for A, B, or C this week."
pub fn no_updates_sentence<S: AsRef<str>>(subjects: &[S]) -> String {
    format!(
        "No major updates were detected for {} this week.",
        join_with_or(subjects)
    )
}

fn join_with_or<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => "any tracked subject".to_string(),
        [one] => one.as_ref().to_string(),
        [a, b] => format!("{} or {}", a.as_ref(), b.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|t| t.as_ref()).collect();
            format!("{}, or {}", head.join(", "), last.as_ref())
        }
    }
}

pub fn detail_section(subject: &str, entries: &[&SubjectEntry]) -> String {
    let mut out = format!("\n\n=== {} ===\n", subject.to_uppercase());
    if entries.is_empty() {
        out.push_str(NO_NEWS_LINE);
        return out;
    }
    for k in entries {
        let e = &k.entry;
        out.push_str(&format!("\n--- {} ---\n", e.title));
        out.push_str(&format!(
            "Published: {}\n",
            k.published_at.format(TIMESTAMP_FORMAT)
        ));
        out.push_str(&format!("Source: {}\n", e.link));
        out.push_str(&format!("{}\n", clean_text(&e.summary)));
    }
    out
}
