use std::io::BufRead;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: Vec<u8>,
}

impl Record {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self { id: id.into(), seq: seq.into() }
    }
}

/// 按文件顺序保存的记录集合，可多次遍历。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// 解析 FASTA 流中的全部记录；一条记录都没有时报错。
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let records = FastaReader::new(reader).read_all()?;
        if records.is_empty() {
            return Err(Error::MalformedInput("no FASTA records found".to_string()));
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn sequences(&self) -> Vec<&[u8]> {
        self.records.iter().map(|r| r.seq.as_slice()).collect()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

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

    pub fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            if self.done && self.peek_header.is_none() {
                return Ok(None);
            }

            // Find header line; anything before the first header is skipped
            let id = if let Some(h) = self.peek_header.take() {
                h
            } else {
                match self.next_header()? {
                    Some(h) => h,
                    None => return Ok(None),
                }
            };

            // Read sequence lines
            let mut seq: Vec<u8> = Vec::new();
            while !self.done {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    break;
                }
                if let Some(h) = self.buf.strip_prefix('>') {
                    self.peek_header = Some(trim_newline(h).to_string());
                    break;
                }
                seq.extend_from_slice(trim_newline(&self.buf).as_bytes());
            }

            // records without an identifier are dropped
            if !id.is_empty() {
                return Ok(Some(Record { id, seq }));
            }
        }
    }

    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(rec) = self.next_record()? {
            records.push(rec);
        }
        Ok(records)
    }

    fn next_header(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                return Ok(None);
            }
            if let Some(h) = self.buf.strip_prefix('>') {
                return Ok(Some(trim_newline(h).to_string()));
            }
        }
    }
}

/// 只去掉行尾的 `\n` 或 `\r\n`
fn trim_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
