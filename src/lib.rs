mod config;
pub use config::DEFAULT_TAG_CLOUD_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    count_word_frequencies, Error, FrequencyCounter, SeparatorSet, Selection, TagCloudConfig,
    TagCloudRenderer, TagCloudSummary, Token, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{FontSize, RankedWord, Word, WordFrequency, WordFrequencyMap, WordRef};
pub use utils::{rank_order, sort_results, write_frequencies_csv};

use log::info;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use utils::open_source_reader;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Renders the top `max_tags` words of `lines` as an HTML tag cloud titled
/// after `source_name`.
pub fn generate_tag_cloud<I, S>(lines: I, source_name: &str, max_tags: usize) -> Result<String, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    generate_tag_cloud_with_custom_config(DEFAULT_TAG_CLOUD_CONFIG, lines, source_name, max_tags)
}

pub fn generate_tag_cloud_with_custom_config<I, S>(
    tag_cloud_config: &TagCloudConfig,
    lines: I,
    source_name: &str,
    max_tags: usize,
) -> Result<String, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let renderer = TagCloudRenderer::new(tag_cloud_config)?;

    let frequencies = count_word_frequencies(lines);
    let selection = Selection::select_top(&frequencies, max_tags);

    renderer.render_to_string(&selection, source_name)
}

/// Reads `source`, counts its words and writes the tag cloud to `destination`.
///
/// When `frequencies_csv` is given, the complete ranked frequency list is
/// written there as well.
pub fn generate_tag_cloud_file(
    source: &Path,
    destination: &Path,
    max_tags: usize,
    frequencies_csv: Option<&Path>,
) -> Result<TagCloudSummary, Error> {
    generate_tag_cloud_file_with_custom_config(
        DEFAULT_TAG_CLOUD_CONFIG,
        source,
        destination,
        max_tags,
        frequencies_csv,
    )
}

pub fn generate_tag_cloud_file_with_custom_config(
    tag_cloud_config: &TagCloudConfig,
    source: &Path,
    destination: &Path,
    max_tags: usize,
    frequencies_csv: Option<&Path>,
) -> Result<TagCloudSummary, Error> {
    let renderer = TagCloudRenderer::new(tag_cloud_config)?;

    let reader = open_source_reader(source)?;
    let mut output = BufWriter::new(create_output(destination)?);

    let mut counter = FrequencyCounter::default();
    let mut total_lines = 0;

    // The reader is consumed here and released as soon as counting ends.
    for line in reader.lines() {
        let line = line.map_err(|err| Error::ReadFailure {
            path: source.to_path_buf(),
            source: err,
        })?;

        counter.accumulate(&line);
        total_lines += 1;
    }

    let frequencies = counter.into_frequencies();
    info!(
        "Read {} lines with {} distinct words from {}",
        total_lines,
        frequencies.len(),
        source.display()
    );

    let ranked = sort_results(&frequencies);

    if let Some(csv_path) = frequencies_csv {
        let csv_file = BufWriter::new(create_output(csv_path)?);
        write_frequencies_csv(&ranked, csv_file)?;
        info!("Wrote {} word frequencies to {}", ranked.len(), csv_path.display());
    }

    let selection = Selection::from_ranked(ranked, max_tags);
    renderer.render(&selection, &source.display().to_string(), &mut output)?;

    output.flush().map_err(Error::WriteFailure)?;

    info!(
        "Wrote tag cloud of {} words to {}",
        selection.len(),
        destination.display()
    );

    Ok(TagCloudSummary {
        total_lines,
        distinct_words: frequencies.len(),
        selected_words: selection.len(),
        min_count: selection.min_count(),
        max_count: selection.max_count(),
    })
}

fn create_output(path: &Path) -> Result<File, Error> {
    File::create(path).map_err(|source| Error::OpenOutputFailure {
        path: path.to_path_buf(),
        source,
    })
}
