use crate::error::{Error, Result};

/// 终止密码子在表中的占位符，翻译输出中不出现
pub const STOP: u8 = b'*';

/// 标准遗传密码（RNA 字母表）。未知密码子返回 None。
pub fn amino_acid(codon: &[u8; 3]) -> Option<u8> {
    let aa = match codon {
        b"UUU" | b"UUC" => b'F',
        b"UUA" | b"UUG" | b"CUU" | b"CUC" | b"CUA" | b"CUG" => b'L',
        b"AUU" | b"AUC" | b"AUA" => b'I',
        b"AUG" => b'M',
        b"GUU" | b"GUC" | b"GUA" | b"GUG" => b'V',
        b"UCU" | b"UCC" | b"UCA" | b"UCG" | b"AGU" | b"AGC" => b'S',
        b"CCU" | b"CCC" | b"CCA" | b"CCG" => b'P',
        b"ACU" | b"ACC" | b"ACA" | b"ACG" => b'T',
        b"GCU" | b"GCC" | b"GCA" | b"GCG" => b'A',
        b"UAU" | b"UAC" => b'Y',
        b"UAA" | b"UAG" | b"UGA" => STOP,
        b"CAU" | b"CAC" => b'H',
        b"CAA" | b"CAG" => b'Q',
        b"AAU" | b"AAC" => b'N',
        b"AAA" | b"AAG" => b'K',
        b"GAU" | b"GAC" => b'D',
        b"GAA" | b"GAG" => b'E',
        b"UGU" | b"UGC" => b'C',
        b"UGG" => b'W',
        b"CGU" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => b'R',
        b"GGU" | b"GGC" | b"GGA" | b"GGG" => b'G',
        _ => return None,
    };
    Some(aa)
}

/// 按密码子逐个翻译 mRNA。
///
/// 终止密码子不产生输出，翻译继续向后进行；
/// 末尾不足三个碱基或表中不存在的密码子报错。
pub fn translate(rna: &[u8]) -> Result<String> {
    let chunks = rna.chunks_exact(3);
    if !chunks.remainder().is_empty() {
        return Err(Error::MalformedInput(format!(
            "RNA length {} is not a multiple of 3",
            rna.len()
        )));
    }

    let mut protein = String::with_capacity(rna.len() / 3);
    for (i, chunk) in chunks.enumerate() {
        let codon = [chunk[0], chunk[1], chunk[2]];
        match amino_acid(&codon) {
            Some(STOP) => {}
            Some(aa) => protein.push(aa as char),
            None => {
                return Err(Error::MalformedInput(format!(
                    "unknown codon '{}' at position {}",
                    String::from_utf8_lossy(&codon),
                    i * 3 + 1
                )))
            }
        }
    }
    Ok(protein)
}
