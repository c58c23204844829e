//! Streams read names out of sequencing files.
//!
//! Hints live in read names, so this is the only part of a record that is
//! kept. Plain text and FASTQ inputs may be gzip-compressed (`.gz`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::parsing::sam::ParseError;

/// Read names in file order
pub type ReadNames = Box<dyn Iterator<Item = Result<Vec<u8>, ParseError>>>;

/// Container the read names are stored in
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReadsFormat {
    Fastq,
    Sam,
    Bam,
    /// One read name per line
    Text,
}

impl ReadsFormat {
    /// Guess the format from the file extension, looking through a `.gz` suffix.
    /// `-` (stdin) and unknown extensions are plain text.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(name.as_str());

        match name.rsplit_once('.').map(|(_, ext)| ext) {
            Some("fq" | "fastq") => Self::Fastq,
            Some("sam") => Self::Sam,
            Some("bam") => Self::Bam,
            _ => Self::Text,
        }
    }
}

/// Open `path` and stream its read names.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, or
/// `ParseError::Noodles` if a SAM/BAM header cannot be read.
pub fn read_names(path: &Path, format: ReadsFormat) -> Result<ReadNames, ParseError> {
    match format {
        ReadsFormat::Fastq => fastq_names(open_text(path)?),
        ReadsFormat::Sam => sam_names(open_text(path)?),
        ReadsFormat::Bam => bam_names(path),
        ReadsFormat::Text => Ok(text_names(open_text(path)?)),
    }
}

fn open_text(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(std::io::stdin().lock()));
    }

    let file = File::open(path)?;
    let compressed = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if compressed {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stop after the first error so a broken record is reported once
fn fuse_on_error<F>(mut next: F) -> ReadNames
where
    F: FnMut() -> Option<Result<Vec<u8>, ParseError>> + 'static,
{
    let mut failed = false;
    Box::new(std::iter::from_fn(move || {
        if failed {
            return None;
        }
        let item = next();
        failed = matches!(item, Some(Err(_)));
        item
    }))
}

fn text_names(reader: Box<dyn BufRead>) -> ReadNames {
    let mut lines = reader.split(b'\n');
    fuse_on_error(move || loop {
        match lines.next()? {
            Ok(mut line) => {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                if !line.is_empty() {
                    return Some(Ok(line));
                }
            }
            Err(e) => return Some(Err(ParseError::Io(e))),
        }
    })
}

fn fastq_names(reader: Box<dyn BufRead>) -> Result<ReadNames, ParseError> {
    use noodles::fastq;

    let mut reader = fastq::io::Reader::new(reader);
    let mut record = fastq::Record::default();

    Ok(fuse_on_error(move || match reader.read_record(&mut record) {
        Ok(0) => None,
        Ok(_) => Some(Ok(record.name().to_vec())),
        Err(e) => Some(Err(ParseError::Noodles(format!(
            "Failed to read FASTQ record: {e}"
        )))),
    }))
}

fn sam_names(reader: Box<dyn BufRead>) -> Result<ReadNames, ParseError> {
    use noodles::sam;

    let mut reader = sam::io::Reader::new(reader);
    reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;
    let mut record = sam::Record::default();

    Ok(fuse_on_error(move || match reader.read_record(&mut record) {
        Ok(0) => None,
        Ok(_) => Some(Ok(record.name().map(|n| n.to_vec()).unwrap_or_default())),
        Err(e) => Some(Err(ParseError::Noodles(format!(
            "Failed to read SAM record: {e}"
        )))),
    }))
}

fn bam_names(path: &Path) -> Result<ReadNames, ParseError> {
    use noodles::bam;

    let mut reader = File::open(path).map(bam::io::Reader::new)?;
    reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;
    let mut record = bam::Record::default();

    Ok(fuse_on_error(move || match reader.read_record(&mut record) {
        Ok(0) => None,
        Ok(_) => Some(Ok(record.name().map(|n| n.to_vec()).unwrap_or_default())),
        Err(e) => Some(Err(ParseError::Noodles(format!(
            "Failed to read BAM record: {e}"
        )))),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_detect_format() {
        assert_eq!(ReadsFormat::detect(Path::new("reads.fq")), ReadsFormat::Fastq);
        assert_eq!(
            ReadsFormat::detect(Path::new("reads.FASTQ.gz")),
            ReadsFormat::Fastq
        );
        assert_eq!(ReadsFormat::detect(Path::new("aln.sam")), ReadsFormat::Sam);
        assert_eq!(ReadsFormat::detect(Path::new("aln.bam")), ReadsFormat::Bam);
        assert_eq!(ReadsFormat::detect(Path::new("names.txt")), ReadsFormat::Text);
        assert_eq!(ReadsFormat::detect(&PathBuf::from("-")), ReadsFormat::Text);
    }

    #[test]
    fn test_text_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        std::fs::write(&path, "r1!h!!chr1!1!+!2!3\r\n\nr2\n").unwrap();

        let names: Vec<Vec<u8>> = read_names(&path, ReadsFormat::Text)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(names, vec![b"r1!h!!chr1!1!+!2!3".to_vec(), b"r2".to_vec()]);
    }

    #[test]
    fn test_gzipped_text_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(b"a\nb\n").unwrap();
        encoder.finish().unwrap();

        let names: Vec<Vec<u8>> = read_names(&path, ReadsFormat::Text)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(names, vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_fastq_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reads.fq");
        std::fs::write(
            &path,
            "@r1!h!!chr1!100!+!4!0\nACGT\n+\nIIII\n@r2\nTTTT\n+\nIIII\n",
        )
        .unwrap();

        let names: Vec<Vec<u8>> = read_names(&path, ReadsFormat::Fastq)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(names, vec![b"r1!h!!chr1!100!+!4!0".to_vec(), b"r2".to_vec()]);
    }

    #[test]
    fn test_sam_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aln.sam");
        std::fs::write(
            &path,
            "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:1000\nr1!h!!chr1!10!+!4!0\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\tIIII\n",
        )
        .unwrap();

        let names: Vec<Vec<u8>> = read_names(&path, ReadsFormat::Sam)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(names, vec![b"r1!h!!chr1!10!+!4!0".to_vec()]);
    }

    #[test]
    fn test_missing_file() {
        let result = read_names(Path::new("/nonexistent/reads.txt"), ReadsFormat::Text);
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
