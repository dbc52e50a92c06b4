use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::util::dna;

/// 反向回文命中：1-based 起点与长度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalindromeHit {
    pub position: usize,
    pub length: usize,
}

impl fmt::Display for PalindromeHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.length)
    }
}

/// 待检测的窗口长度范围，上下界都包含且必须为偶数
#[derive(Clone, Copy, Debug)]
pub struct PalindromeOpt {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for PalindromeOpt {
    fn default() -> Self {
        Self { min_len: 4, max_len: 12 }
    }
}

impl PalindromeOpt {
    pub fn validate(&self) -> Result<()> {
        if self.min_len < 2 || self.min_len % 2 != 0 || self.max_len % 2 != 0 {
            return Err(Error::InvalidParameter(format!(
                "palindrome lengths must be even and at least 2, got {}..={}",
                self.min_len, self.max_len
            )));
        }
        if self.min_len > self.max_len {
            return Err(Error::InvalidParameter(format!(
                "min length {} exceeds max length {}",
                self.min_len, self.max_len
            )));
        }
        Ok(())
    }
}

/// 长度 4..=12 的所有反向回文，按起点升序、同一起点按长度升序
pub fn reverse_palindromes(seq: &[u8]) -> Vec<PalindromeHit> {
    let opt = PalindromeOpt::default();
    scan(seq, opt.min_len, opt.max_len)
}

pub fn reverse_palindromes_with(seq: &[u8], opt: PalindromeOpt) -> Result<Vec<PalindromeHit>> {
    opt.validate()?;
    Ok(scan(seq, opt.min_len, opt.max_len))
}

fn scan(seq: &[u8], min_len: usize, max_len: usize) -> Vec<PalindromeHit> {
    let n = seq.len();
    let mut hits = Vec::new();
    for pos in 0..n {
        for length in (min_len..=max_len).step_by(2) {
            if pos + length > n {
                break;
            }
            if is_reverse_palindrome(&seq[pos..pos + length]) {
                hits.push(PalindromeHit { position: pos + 1, length });
            }
        }
    }
    hits
}

/// 前半段等于后半段的反向互补
#[inline]
fn is_reverse_palindrome(window: &[u8]) -> bool {
    let half = window.len() / 2;
    window[..half]
        .iter()
        .zip(window[half..].iter().rev())
        .all(|(&a, &b)| a == dna::complement(b))
}
