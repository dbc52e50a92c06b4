/// 核苷酸固定顺序，计数、profile 和共识序列的平局处理都依赖此顺序
pub const BASES: [u8; 4] = *b"ACGT";

/// A/C/G/T 映射到 0..4，其它字符返回 None（U 视作 T）
#[inline]
pub fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

#[inline]
pub fn complement(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' | b'U' => b'A',
        _ => b'N',
    }
}

/// 逐位互补，不反转
pub fn complement_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| complement(b)).collect()
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq.iter().rev() {
        out.push(complement(b));
    }
    out
}

/// DNA -> RNA：T 逐位替换为 U
pub fn transcribe(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| if b == b'T' { b'U' } else { b })
        .collect()
}
