//! 广义后缀数组：把多条序列拼接成一个文本，每条序列后跟一个互不相同的分隔符，
//! 再用后缀数组 + LCP 滑动窗口求所有序列最长公共子串的长度。

use std::collections::VecDeque;

/// 构建后缀数组（基于倍增法，O(n log^2 n) 排序）。
/// 文本中的值越小排序越靠前，分隔符使用 [0, n_seqs) 保证互不相同且小于任何碱基。
pub fn build_sa(text: &[u32]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = text.iter().map(|&b| i64::from(b)).collect();
    let mut tmp: Vec<i64> = vec![0; n];

    let mut k = 1usize;
    loop {
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] } else { -1 });
        sa.sort_unstable_by_key(|&i| key(i));

        tmp[sa[0]] = 0;
        for w in 1..n {
            let (a, b) = (sa[w - 1], sa[w]);
            tmp[b] = tmp[a] + i64::from(key(a) != key(b));
        }

        rank.copy_from_slice(&tmp);
        if rank[sa[n - 1]] as usize == n - 1 || k >= n {
            break;
        }
        k <<= 1;
    }

    sa
}

/// Kasai 算法：lcp[i] 为 sa[i-1] 与 sa[i] 两个后缀的最长公共前缀，lcp[0] = 0。
pub fn build_lcp(text: &[u32], sa: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut inv = vec![0usize; n];
    for (i, &p) in sa.iter().enumerate() {
        inv[p] = i;
    }

    let mut lcp = vec![0usize; n];
    let mut h = 0usize;
    for p in 0..n {
        if inv[p] == 0 {
            h = 0;
            continue;
        }
        let q = sa[inv[p] - 1];
        while p + h < n && q + h < n && text[p + h] == text[q + h] {
            h += 1;
        }
        lcp[inv[p]] = h;
        h = h.saturating_sub(1);
    }
    lcp
}

pub struct GeneralizedSuffixArray {
    sa: Vec<usize>,
    lcp: Vec<usize>,
    /// 文本位置 -> 所属序列下标
    owner: Vec<usize>,
    n_seqs: usize,
}

impl GeneralizedSuffixArray {
    pub fn new(seqs: &[&[u8]]) -> Self {
        let n_seqs = seqs.len();
        let total: usize = seqs.iter().map(|s| s.len() + 1).sum();
        let mut text: Vec<u32> = Vec::with_capacity(total);
        let mut owner: Vec<usize> = Vec::with_capacity(total);

        for (i, seq) in seqs.iter().enumerate() {
            // 碱基整体上移 n_seqs，给分隔符腾出 [0, n_seqs)
            text.extend(seq.iter().map(|&b| u32::from(b) + n_seqs as u32));
            text.push(i as u32);
            owner.extend(std::iter::repeat(i).take(seq.len() + 1));
        }

        let sa = build_sa(&text);
        let lcp = build_lcp(&text, &sa);
        Self { sa, lcp, owner, n_seqs }
    }

    /// 所有序列共有的最长子串长度；任一序列为空或没有公共字符时为 0。
    pub fn longest_common_len(&self) -> usize {
        let m = self.n_seqs;
        let n = self.sa.len();
        if m == 0 {
            return 0;
        }
        if m == 1 {
            return n - 1;
        }

        // 以分隔符开头的后缀恰好排在前 m 位
        let start = m;
        let mut counts = vec![0usize; m];
        let mut covered = 0usize;
        // 单调队列，保存窗口 (left, right] 内 lcp 的下标，lcp 值递增
        let mut window_min: VecDeque<usize> = VecDeque::new();
        let mut best = 0usize;
        let mut left = start;

        for right in start..n {
            let o = self.owner[self.sa[right]];
            if counts[o] == 0 {
                covered += 1;
            }
            counts[o] += 1;

            if right > left {
                while window_min.back().is_some_and(|&i| self.lcp[i] >= self.lcp[right]) {
                    window_min.pop_back();
                }
                window_min.push_back(right);
            }

            while covered == m {
                if let Some(&i) = window_min.front() {
                    best = best.max(self.lcp[i]);
                }

                let o = self.owner[self.sa[left]];
                counts[o] -= 1;
                if counts[o] == 0 {
                    covered -= 1;
                }
                left += 1;
                while window_min.front().is_some_and(|&i| i <= left) {
                    window_min.pop_front();
                }
            }
        }

        best
    }
}
