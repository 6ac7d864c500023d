// crates/infra/src/output/table.rs
use std::io::Write;

use comfy_table::{CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use text_metrics_domain::{
    analytics::{Metrics, ReadingSpeed},
    model::{DocumentReport, Summary},
};
use text_metrics_shared_kernel::Result;

use super::{DisplayLimits, VERSION, format_ease, format_score};

pub(super) fn write(reports: &[DocumentReport], limits: &DisplayLimits, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "text_metrics v{VERSION}")?;
    for report in reports {
        writeln!(out)?;
        writeln!(out, "== {} ==", report.source)?;
        write_document(&report.metrics, limits, out)?;
    }
    if reports.len() > 1 {
        let summary = Summary::from_reports(reports);
        writeln!(out)?;
        writeln!(
            out,
            "TOTAL ({} documents): {} words, {} characters, {} sentences",
            summary.documents, summary.words, summary.characters, summary.sentences
        )?;
    }
    Ok(())
}

fn new_table(header: [&str; 2]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic).set_header(header);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn section(out: &mut dyn Write, title: &str, table: &Table) -> Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{table}")?;
    Ok(())
}

fn write_document(m: &Metrics, limits: &DisplayLimits, out: &mut dyn Write) -> Result<()> {
    let mut counts = new_table(["Metric", "Value"]);
    for (name, value) in [
        ("Words", m.words.to_string()),
        ("Characters", m.characters.to_string()),
        ("Characters (no spaces)", m.characters_no_spaces.to_string()),
        ("Sentences", m.sentences.to_string()),
        ("Paragraphs", m.paragraphs.to_string()),
        ("Lines", m.lines.to_string()),
        ("Unique words", m.unique_words.to_string()),
        ("Avg. word length", format_score(m.average_word_length)),
        ("Avg. sentence length", format_score(m.average_sentence_length)),
        ("Avg. words / paragraph", format_score(m.average_words_per_paragraph)),
        ("Longest word", m.longest_word.clone()),
        ("Shortest word", m.shortest_word.clone()),
    ] {
        counts.add_row(vec![name.to_string(), value]);
    }
    section(out, "Counts", &counts)?;

    let mut time = new_table(["Mode", "Estimate"]);
    for speed in ReadingSpeed::ALL {
        time.add_row(vec![speed.label().to_string(), m.time.get(speed).to_string()]);
    }
    section(out, "Time", &time)?;

    let mut readability = new_table(["Metric", "Value"]);
    readability
        .add_row(vec!["Syllables".to_string(), m.syllables.to_string()])
        .add_row(vec!["Flesch reading ease".to_string(), format_ease(m.reading_ease)])
        .add_row(vec!["Reading level".to_string(), m.reading_level.to_string()]);
    section(out, "Readability", &readability)?;

    let mut classification = new_table(["Metric", "Value"]);
    classification
        .add_row(vec!["Language".to_string(), m.language.to_string()])
        .add_row(vec![
            "Sentiment".to_string(),
            format!("{} ({})", m.sentiment.label, format_score(m.sentiment.score)),
        ]);
    section(out, "Classification", &classification)?;

    let frequency_sections = [
        ("Top words", frequency_rows(m.top_words.iter().map(|w| (w.word.clone(), w.count)))),
        (
            "Duplicates",
            frequency_rows(limits.duplicates(&m.duplicate_words).iter().map(|w| (w.word.clone(), w.count))),
        ),
        (
            "Characters",
            frequency_rows(
                limits.characters(&m.character_frequency).iter().map(|c| (c.character.to_string(), c.count)),
            ),
        ),
    ];
    for (title, rows) in frequency_sections {
        if rows.is_empty() {
            writeln!(out, "{title}: -")?;
            continue;
        }
        let mut table = new_table(["Item", "Count"]);
        for row in rows {
            table.add_row(row);
        }
        section(out, title, &table)?;
    }
    Ok(())
}

fn frequency_rows(items: impl Iterator<Item = (String, usize)>) -> Vec<Vec<String>> {
    items.map(|(item, count)| vec![item, count.to_string()]).collect()
}
