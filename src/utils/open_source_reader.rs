use crate::models::Error;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens `path` for line-oriented reading.
///
/// Files with a `.gz` extension are decompressed on the fly.
pub fn open_source_reader(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file = File::open(path).map_err(|source| Error::OpenInputFailure {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzip_path(path) {
        debug!("Reading {} as gzip", path.display());
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("gz"))
}
