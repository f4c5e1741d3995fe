use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::alignment::{Alignment, Record};

/// 比对 FASTA 的默认行宽
pub const DEFAULT_LINE_WIDTH: usize = 60;

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    /// Next record, with sequence bytes kept verbatim (case and gap
    /// characters preserved) apart from whitespace.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    let h = self.buf[1..].trim().to_string();
                    break h;
                }
            }
        };

        // Parse id and description
        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // Read sequence lines
        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                let h = self.buf[1..].trim().to_string();
                self.peek_header = Some(h);
                break;
            }
            seq.extend(self.buf.bytes().filter(|b| !b.is_ascii_whitespace()));
        }

        Ok(Some(Record { id, desc, seq }))
    }
}

/// Read every record of an aligned FASTA stream into a validated [`Alignment`].
pub fn read_alignment<R: BufRead>(reader: R) -> Result<Alignment> {
    let mut r = FastaReader::new(reader);
    let mut records = Vec::new();
    while let Some(rec) = r.next_record()? {
        records.push(rec);
    }
    Ok(Alignment::new(records)?)
}

pub fn read_alignment_file(path: &str) -> Result<Alignment> {
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open alignment FASTA '{}'", path))?;
    read_alignment(std::io::BufReader::new(fh))
        .with_context(|| format!("invalid alignment in '{}'", path))
}

/// 写出比对；`line_width` 为 0 时每条序列写成一行。
pub fn write_alignment<W: Write>(out: &mut W, aln: &Alignment, line_width: usize) -> Result<()> {
    for rec in aln.records() {
        match &rec.desc {
            Some(d) => writeln!(out, ">{} {}", rec.id, d)?,
            None => writeln!(out, ">{}", rec.id)?,
        }
        if line_width == 0 {
            out.write_all(&rec.seq)?;
            out.write_all(b"\n")?;
        } else {
            for chunk in rec.seq.chunks(line_width) {
                out.write_all(chunk)?;
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

pub fn write_alignment_file(path: &str, aln: &Alignment, line_width: usize) -> Result<()> {
    let fh = std::fs::File::create(path)
        .with_context(|| format!("cannot create output FASTA '{}'", path))?;
    let mut w = std::io::BufWriter::new(fh);
    write_alignment(&mut w, aln, line_width)?;
    w.flush()?;
    Ok(())
}
