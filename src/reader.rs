//! Streaming FASTA and FASTQ record readers.
//!
//! Both readers are lazy and forward-only: a record is assembled while lines
//! are scanned and handed out as soon as it is complete, so at most one
//! record is held in memory at a time.

use std::io::BufRead;

use bytes::Bytes;

use crate::{error::KmerCountError, format::SequenceFormat, input::Input};

/// A single sequence record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Header line, including its leading `>` or `@`.
    pub id: Bytes,
    /// Concatenated sequence lines.
    pub seq: Bytes,
}

/// Strips leading and trailing ASCII whitespace, including the line terminator.
fn trim(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &line[start..end]
}

/// FASTA reader.
///
/// Lines starting with `>` open a new record; every other non-blank line is
/// appended to the current one. Sequence lines that appear before the first
/// header belong to no record and are dropped.
pub struct FastaReader<R> {
    reader: R,
    input: String,
    line: Vec<u8>,
    id: Option<Bytes>,
    seq: Vec<u8>,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    /// Wraps a buffered reader. `input` names the source in error messages.
    pub fn new(reader: R, input: impl Into<String>) -> Self {
        Self {
            reader,
            input: input.into(),
            line: Vec::new(),
            id: None,
            seq: Vec::new(),
            done: false,
        }
    }

    fn take_record(&mut self, next_id: Option<Bytes>) -> Option<SequenceRecord> {
        let id = std::mem::replace(&mut self.id, next_id)?;
        let seq = Bytes::from(std::mem::take(&mut self.seq));
        Some(SequenceRecord { id, seq })
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SequenceRecord, KmerCountError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => {
                    self.done = true;
                    return self.take_record(None).map(Ok);
                }
                Ok(_) => {}
                Err(source) => {
                    self.done = true;
                    return Some(Err(KmerCountError::InputRead {
                        source,
                        input: self.input.clone(),
                    }));
                }
            }

            let line = trim(&self.line);
            if line.is_empty() {
                continue;
            }
            if line[0] == b'>' {
                let header = Bytes::copy_from_slice(line);
                if let Some(record) = self.take_record(Some(header)) {
                    return Some(Ok(record));
                }
            } else if self.id.is_some() {
                self.seq.extend_from_slice(line);
            }
        }
        None
    }
}

/// FASTQ reader for strict four-line records.
///
/// Blank lines between records are tolerated. Once a header line has been
/// read, the sequence, separator and quality lines must all follow; a group
/// cut short is reported as [`KmerCountError::Format`] and ends iteration.
pub struct FastqReader<R> {
    reader: R,
    input: String,
    line: Vec<u8>,
    records: u64,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    /// Wraps a buffered reader. `input` names the source in error messages.
    pub fn new(reader: R, input: impl Into<String>) -> Self {
        Self {
            reader,
            input: input.into(),
            line: Vec::new(),
            records: 0,
            done: false,
        }
    }

    /// Reads one raw line into the internal buffer; `Ok(false)` at end of input.
    fn read_line(&mut self) -> Result<bool, KmerCountError> {
        self.line.clear();
        match self.reader.read_until(b'\n', &mut self.line) {
            Ok(n) => Ok(n > 0),
            Err(source) => Err(KmerCountError::InputRead {
                source,
                input: self.input.clone(),
            }),
        }
    }

    fn require_line(&mut self, what: &str) -> Result<(), KmerCountError> {
        if self.read_line()? {
            Ok(())
        } else {
            Err(KmerCountError::Format {
                record: self.records,
                details: format!("unexpected end of input, missing {what} line"),
            })
        }
    }

    fn read_record(&mut self) -> Result<Option<SequenceRecord>, KmerCountError> {
        let id = loop {
            if !self.read_line()? {
                return Ok(None);
            }
            let header = trim(&self.line);
            if !header.is_empty() {
                break Bytes::copy_from_slice(header);
            }
        };
        self.records += 1;

        self.require_line("sequence")?;
        let seq = Bytes::copy_from_slice(trim(&self.line));
        self.require_line("separator")?;
        self.require_line("quality")?;

        Ok(Some(SequenceRecord { id, seq }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<SequenceRecord, KmerCountError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.read_record();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result.transpose()
    }
}

/// Records from either format behind a single iterator type.
pub enum Records<R> {
    Fasta(FastaReader<R>),
    Fastq(FastqReader<R>),
}

impl<R: BufRead> Records<R> {
    /// Builds the reader matching `format` over an already opened stream.
    pub fn new(reader: R, format: SequenceFormat, input: impl Into<String>) -> Self {
        match format {
            SequenceFormat::Fasta => Self::Fasta(FastaReader::new(reader, input)),
            SequenceFormat::Fastq => Self::Fastq(FastqReader::new(reader, input)),
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<SequenceRecord, KmerCountError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Fasta(reader) => reader.next(),
            Self::Fastq(reader) => reader.next(),
        }
    }
}

/// Opens `input` and returns a lazy record iterator for `format`.
///
/// # Errors
///
/// Returns [`KmerCountError::InputOpen`] if the input file cannot be opened.
pub fn read(
    input: &Input,
    format: SequenceFormat,
) -> Result<Records<Box<dyn BufRead>>, KmerCountError> {
    tracing::debug!(%input, %format, gzip = input.is_gzip(), "Opening input");
    let stream = input.open()?;
    Ok(Records::new(stream, format, input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fasta(data: &str) -> Vec<SequenceRecord> {
        FastaReader::new(data.as_bytes(), "test")
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn fastq(data: &str) -> Result<Vec<SequenceRecord>, KmerCountError> {
        FastqReader::new(data.as_bytes(), "test").collect()
    }

    #[test]
    fn trim_strips_both_ends() {
        assert_eq!(trim(b"  ACGT \r\n"), b"ACGT");
        assert_eq!(trim(b" \t\n"), b"");
        assert_eq!(trim(b""), b"");
    }

    #[test]
    fn fasta_wrapped_lines_are_joined() {
        let records = fasta(">seq1 desc\nACGT\nTTGA\n\n>seq2\nGG\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Bytes::from_static(b">seq1 desc"));
        assert_eq!(records[0].seq, Bytes::from_static(b"ACGTTTGA"));
        assert_eq!(records[1].id, Bytes::from_static(b">seq2"));
        assert_eq!(records[1].seq, Bytes::from_static(b"GG"));
    }

    #[test]
    fn fasta_lines_before_header_are_dropped() {
        let records = fasta("ACGT\nGGGG\n>seq\nTT\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, Bytes::from_static(b"TT"));
    }

    #[test]
    fn fasta_without_trailing_newline() {
        let records = fasta(">seq\nACGT");
        assert_eq!(records[0].seq, Bytes::from_static(b"ACGT"));
    }

    #[test]
    fn fasta_header_without_body() {
        let records = fasta(">empty\n>full\nAC\n");
        assert_eq!(records.len(), 2);
        assert!(records[0].seq.is_empty());
        assert_eq!(records[1].seq, Bytes::from_static(b"AC"));
    }

    #[test]
    fn fasta_crlf_line_endings() {
        let records = fasta(">seq\r\nAC\r\nGT\r\n");
        assert_eq!(records[0].id, Bytes::from_static(b">seq"));
        assert_eq!(records[0].seq, Bytes::from_static(b"ACGT"));
    }

    #[test]
    fn fasta_empty_input() {
        assert!(fasta("").is_empty());
        assert!(fasta("ACGT\n").is_empty());
    }

    #[test]
    fn fastq_reads_four_line_groups() {
        let records = fastq("@r1\nACGT\n+\nIIII\n@r2\nGGNA\n+r2\nIIII\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Bytes::from_static(b"@r1"));
        assert_eq!(records[0].seq, Bytes::from_static(b"ACGT"));
        assert_eq!(records[1].seq, Bytes::from_static(b"GGNA"));
    }

    #[test]
    fn fastq_tolerates_trailing_blank_line() {
        let records = fastq("@r1\nACGT\n+\nIIII\n\n").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn fastq_truncated_group_is_format_error() {
        let err = fastq("@r1\nACGT\n+\nIIII\n@r2\nACGT\n").unwrap_err();
        match err {
            KmerCountError::Format { record, details } => {
                assert_eq!(record, 2);
                assert!(details.contains("separator"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fastq_missing_quality_is_format_error() {
        let err = fastq("@r1\nACGT\n+\n").unwrap_err();
        assert!(matches!(err, KmerCountError::Format { record: 1, .. }));
    }

    #[test]
    fn fastq_stops_after_error() {
        let mut reader = FastqReader::new("@r1\n".as_bytes(), "test");
        assert!(matches!(reader.next(), Some(Err(_))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn records_dispatch_on_format() {
        let data = "@r1\nACGT\n+\nIIII\n";
        let fq: Vec<_> = Records::new(data.as_bytes(), SequenceFormat::Fastq, "test")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(fq.len(), 1);

        // The same bytes read as FASTA contain no header.
        let fa: Vec<_> = Records::new(data.as_bytes(), SequenceFormat::Fasta, "test")
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(fa.is_empty());
    }
}
