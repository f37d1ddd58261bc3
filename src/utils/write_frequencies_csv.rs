use crate::models::Error;
use crate::types::RankedWord;
use std::io::Write;

/// Writes ranked `(word, count)` pairs as CSV with a `word,count` header.
pub fn write_frequencies_csv<W: Write>(ranked: &[RankedWord], output: W) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["word", "count"])?;
    for (word, count) in ranked {
        writer.write_record([word.as_str(), count.to_string().as_str()])?;
    }

    writer.flush()?;

    Ok(())
}
