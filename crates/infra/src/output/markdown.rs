// crates/infra/src/output/markdown.rs
use std::io::Write;

use text_metrics_domain::{
    analytics::{Metrics, ReadingSpeed},
    model::{DocumentReport, Summary},
};
use text_metrics_shared_kernel::Result;

use super::{DisplayLimits, format_ease, format_score};

pub(super) fn write(reports: &[DocumentReport], limits: &DisplayLimits, out: &mut dyn Write) -> Result<()> {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "## {}\n", escape(&report.source))?;
        write_document(&report.metrics, limits, out)?;
    }
    if reports.len() > 1 {
        let summary = Summary::from_reports(reports);
        writeln!(out, "\n### Total\n")?;
        writeln!(out, "| DOCUMENTS | WORDS | CHARACTERS | SENTENCES |\n|---:|---:|---:|---:|")?;
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            summary.documents, summary.words, summary.characters, summary.sentences
        )?;
    }
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('|', "\\|")
}

fn write_document(m: &Metrics, limits: &DisplayLimits, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "| METRIC | VALUE |\n|:---|---:|")?;
    let mut rows = vec![
        ("Words", m.words.to_string()),
        ("Characters", m.characters.to_string()),
        ("Characters (no spaces)", m.characters_no_spaces.to_string()),
        ("Sentences", m.sentences.to_string()),
        ("Paragraphs", m.paragraphs.to_string()),
        ("Lines", m.lines.to_string()),
        ("Unique words", m.unique_words.to_string()),
        ("Syllables", m.syllables.to_string()),
        ("Avg. word length", format_score(m.average_word_length)),
        ("Avg. sentence length", format_score(m.average_sentence_length)),
        ("Avg. words / paragraph", format_score(m.average_words_per_paragraph)),
        ("Longest word", escape(&m.longest_word)),
        ("Shortest word", escape(&m.shortest_word)),
        ("Flesch reading ease", format_ease(m.reading_ease)),
        ("Reading level", m.reading_level.to_string()),
        ("Language", m.language.to_string()),
        ("Sentiment", format!("{} ({})", m.sentiment.label, format_score(m.sentiment.score))),
    ];
    rows.extend(ReadingSpeed::ALL.iter().map(|&speed| (speed.label(), m.time.get(speed).to_string())));
    for (name, value) in rows {
        writeln!(out, "| {name} | {value} |")?;
    }

    write_frequencies(out, "Top words", m.top_words.iter().map(|w| (escape(&w.word), w.count)))?;
    write_frequencies(
        out,
        "Duplicates",
        limits.duplicates(&m.duplicate_words).iter().map(|w| (escape(&w.word), w.count)),
    )?;
    write_frequencies(
        out,
        "Characters",
        limits.characters(&m.character_frequency).iter().map(|c| (c.character.to_string(), c.count)),
    )
}

fn write_frequencies(
    out: &mut dyn Write,
    title: &str,
    items: impl Iterator<Item = (String, usize)>,
) -> Result<()> {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return Ok(());
    }
    writeln!(out, "\n### {title}\n")?;
    writeln!(out, "| ITEM | COUNT |\n|:---|---:|")?;
    for (item, count) in items {
        writeln!(out, "| {item} | {count} |")?;
    }
    Ok(())
}
