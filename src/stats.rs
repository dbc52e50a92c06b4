//! 单序列统计与两两比较：碱基计数、GC 含量、Hamming 距离、子串定位。

use std::fmt;

use memchr::memmem::Finder;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::io::fasta::RecordSet;
use crate::util::dna;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NucleotideCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl NucleotideCounts {
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }
}

impl fmt::Display for NucleotideCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.c, self.g, self.t)
    }
}

/// 统计 A/C/G/T 出现次数，其它字节忽略
pub fn nucleotide_counts(seq: &[u8]) -> NucleotideCounts {
    let mut counts = [0usize; 4];
    for &b in seq {
        if let Some(i) = dna::base_index(b) {
            counts[i] += 1;
        }
    }
    NucleotideCounts { a: counts[0], c: counts[1], g: counts[2], t: counts[3] }
}

/// (C + G) / len；空序列没有定义，返回 None
pub fn gc_content(seq: &[u8]) -> Option<f64> {
    if seq.is_empty() {
        return None;
    }
    let counts = nucleotide_counts(seq);
    Some((counts.c + counts.g) as f64 / seq.len() as f64)
}

/// GC 含量最高的记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GcHit {
    pub id: String,
    pub ratio: f64,
}

impl GcHit {
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }
}

impl fmt::Display for GcHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:.3}", self.id, self.percentage())
    }
}

/// 找出 GC 含量最高的记录。并列时取文件中第一个；空序列跳过。
pub fn highest_gc(records: &RecordSet) -> Result<GcHit> {
    let mut best: Option<(&str, f64)> = None;
    for rec in records {
        let Some(gc) = gc_content(&rec.seq) else { continue };
        match best {
            Some((_, high)) if gc <= high => {}
            _ => best = Some((rec.id.as_str(), gc)),
        }
    }

    match best {
        Some((id, ratio)) => Ok(GcHit { id: id.to_string(), ratio }),
        None => Err(Error::InputArity {
            operation: "GC content",
            required: 1,
            got: 0,
        }),
    }
}

pub fn hamming_distance(s: &[u8], t: &[u8]) -> Result<usize> {
    if s.len() != t.len() {
        return Err(Error::LengthMismatch { left: s.len(), right: t.len() });
    }
    Ok(s.iter().zip(t).filter(|(x, y)| x != y).count())
}

/// 所有出现位置（1-based，允许重叠，严格递增）
pub fn find_all_occurrences(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return positions;
    }

    let finder = Finder::new(needle);
    let mut start = 0usize;
    while let Some(off) = finder.find(&haystack[start..]) {
        let pos = start + off;
        positions.push(pos + 1);
        // 只前进一位，保证重叠匹配也被找到
        start = pos + 1;
        if start + needle.len() > haystack.len() {
            break;
        }
    }
    positions
}
