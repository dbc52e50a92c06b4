//! Profile 矩阵与共识序列。
//!
//! 输入是等长序列集合；每一列统计 A/C/G/T 的出现次数，
//! 共识序列逐列取计数最大的碱基，平局按 A、C、G、T 的固定顺序取第一个。

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::io::fasta::RecordSet;
use crate::util::dna::{self, BASES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// counts[i][col]，i 按 A、C、G、T 排列
    counts: [Vec<usize>; 4],
    /// 参与统计的序列条数
    depth: usize,
}

impl Profile {
    pub fn build(records: &RecordSet) -> Result<Self> {
        let first = records.first().ok_or(Error::InputArity {
            operation: "profile",
            required: 1,
            got: 0,
        })?;
        let width = first.seq.len();

        // 先整体校验，避免返回部分结果
        for (index, rec) in records.iter().enumerate() {
            if rec.seq.len() != width {
                return Err(Error::ShapeMismatch {
                    index,
                    id: rec.id.clone(),
                    expected: width,
                    got: rec.seq.len(),
                });
            }
        }

        let mut counts: [Vec<usize>; 4] = std::array::from_fn(|_| vec![0; width]);
        for rec in records {
            for (col, &b) in rec.seq.iter().enumerate() {
                if let Some(i) = dna::base_index(b) {
                    counts[i][col] += 1;
                }
            }
        }

        Ok(Self { counts, depth: records.len() })
    }

    pub fn width(&self) -> usize {
        self.counts[0].len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// 某个碱基在每一列的计数
    pub fn row(&self, base: u8) -> Option<&[usize]> {
        dna::base_index(base).map(|i| self.counts[i].as_slice())
    }

    /// 第 col 列的 A/C/G/T 计数；越界返回 None
    pub fn column(&self, col: usize) -> Option<[usize; 4]> {
        (col < self.width()).then(|| self.column_counts(col))
    }

    fn column_counts(&self, col: usize) -> [usize; 4] {
        std::array::from_fn(|i| self.counts[i][col])
    }

    pub fn consensus(&self) -> Vec<u8> {
        (0..self.width())
            .map(|col| {
                let column = self.column_counts(col);
                let mut best = 0usize;
                for i in 1..4 {
                    // 严格大于：平局保留靠前的碱基
                    if column[i] > column[best] {
                        best = i;
                    }
                }
                BASES[best]
            })
            .collect()
    }

    pub fn report(&self) -> ConsensusReport<'_> {
        ConsensusReport {
            consensus: String::from_utf8_lossy(&self.consensus()).into_owned(),
            profile: self,
        }
    }
}

/// 共识序列加 profile，Display 输出为五行文本
#[derive(Debug, Serialize)]
pub struct ConsensusReport<'a> {
    pub consensus: String,
    pub profile: &'a Profile,
}

impl fmt::Display for ConsensusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.consensus)?;
        for (i, &base) in BASES.iter().enumerate() {
            write!(f, "{}:", base as char)?;
            for n in &self.profile.counts[i] {
                write!(f, " {}", n)?;
            }
            if i + 1 < BASES.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
