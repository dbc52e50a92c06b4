//! 模体搜索：多序列最长公共子串与反向回文（限制性酶切位点）扫描。
//!
//! 最长公共子串的结果固定为以下扫描得到的第一个候选：
//! 以最短序列（长度相同取输入中靠前者）为生成器，长度从长到短，起点从左到右，
//! 第一个同时出现在所有其它序列中的子串即为答案。
//! [`longest_common_substring`] 先用广义后缀数组求出最大长度，
//! 再只在该长度上做从左到右的扫描，结果与 [`longest_common_substring_scan`] 一致。

pub mod palindrome;
pub mod suffix;

use memchr::memmem::Finder;

use crate::error::{Error, Result};

pub use palindrome::{reverse_palindromes, reverse_palindromes_with, PalindromeHit, PalindromeOpt};
pub use suffix::GeneralizedSuffixArray;

pub fn longest_common_substring(seqs: &[&[u8]]) -> Result<Option<Vec<u8>>> {
    let (gi, generator) = generator(seqs)?;
    if seqs.len() == 1 {
        return Ok(non_empty(generator));
    }

    let len = GeneralizedSuffixArray::new(seqs).longest_common_len();
    if len == 0 {
        return Ok(None);
    }
    let others = others(seqs, gi);
    Ok(first_common_at(generator, &others, len))
}

/// 朴素扫描版本：逐个长度从长到短尝试
pub fn longest_common_substring_scan(seqs: &[&[u8]]) -> Result<Option<Vec<u8>>> {
    let (gi, generator) = generator(seqs)?;
    if seqs.len() == 1 {
        return Ok(non_empty(generator));
    }

    let others = others(seqs, gi);
    for len in (1..=generator.len()).rev() {
        if let Some(found) = first_common_at(generator, &others, len) {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// 最短序列及其下标（并列取第一个）
fn generator<'a>(seqs: &[&'a [u8]]) -> Result<(usize, &'a [u8])> {
    seqs.iter()
        .copied()
        .enumerate()
        .min_by_key(|(_, s)| s.len())
        .ok_or(Error::InputArity {
            operation: "longest common substring",
            required: 1,
            got: 0,
        })
}

fn others<'a>(seqs: &[&'a [u8]], skip: usize) -> Vec<&'a [u8]> {
    seqs.iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, s)| *s)
        .collect()
}

fn non_empty(seq: &[u8]) -> Option<Vec<u8>> {
    if seq.is_empty() {
        None
    } else {
        Some(seq.to_vec())
    }
}

/// 在给定长度上从左到右扫描生成器，返回第一个被所有序列包含的子串
fn first_common_at(generator: &[u8], others: &[&[u8]], len: usize) -> Option<Vec<u8>> {
    if len == 0 || len > generator.len() {
        return None;
    }
    generator
        .windows(len)
        .find(|candidate| {
            let finder = Finder::new(candidate);
            others.iter().all(|seq| finder.find(seq).is_some())
        })
        .map(<[u8]>::to_vec)
}
