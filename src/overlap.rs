//! 重叠图 O_k：记录 s 的长度 k 后缀等于记录 t 的长度 k 前缀时，连一条 s -> t 的边。
//!
//! 先按前缀建立索引，再用每条记录的后缀查桶，避免 O(n^2) 的两两比较。

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::io::fasta::RecordSet;

#[derive(Clone, Copy, Debug)]
pub struct OverlapOpt {
    /// 前后缀重叠长度
    pub k: usize,
}

impl Default for OverlapOpt {
    fn default() -> Self {
        Self { k: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.target)
    }
}

/// 有向图，边按（源记录顺序，目标记录顺序）排列；同一对 id 只出现一次，没有自环。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlapGraph {
    edges: Vec<Edge>,
}

impl OverlapGraph {
    pub fn build(records: &RecordSet, opt: OverlapOpt) -> Result<Self> {
        let k = opt.k;
        if k == 0 {
            return Err(Error::InvalidParameter("overlap length k must be at least 1".to_string()));
        }
        if records.is_empty() {
            return Err(Error::InputArity { operation: "overlap graph", required: 1, got: 0 });
        }

        // 前缀 -> 记录下标；短于 k 的记录不参与
        let mut by_prefix: HashMap<&[u8], Vec<usize>> = HashMap::new();
        for (i, rec) in records.iter().enumerate() {
            if rec.seq.len() >= k {
                by_prefix.entry(&rec.seq[..k]).or_default().push(i);
            }
        }

        let all = records.records();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();
        for rec in all {
            if rec.seq.len() < k {
                continue;
            }
            let suffix = &rec.seq[rec.seq.len() - k..];
            let Some(bucket) = by_prefix.get(suffix) else { continue };
            for &j in bucket {
                let target = &all[j];
                // id 相同视为同一节点，不连自环
                if target.id == rec.id {
                    continue;
                }
                if seen.insert((rec.id.as_str(), target.id.as_str())) {
                    edges.push(Edge { source: rec.id.clone(), target: target.id.clone() });
                }
            }
        }

        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.edges.iter().any(|e| e.source == source && e.target == target)
    }

    /// 从 `source` 出发一步可达的记录 id
    pub fn targets<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.source == source)
            .map(|e| e.target.as_str())
    }
}

impl fmt::Display for OverlapGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fasta::Record;
    use proptest::prelude::*;

    fn set(items: &[(&str, &str)]) -> RecordSet {
        items.iter().map(|(id, seq)| Record::new(*id, *seq)).collect()
    }

    #[test]
    fn rosalind_sample() {
        let records = set(&[
            ("Rosalind_0498", "AAATAAA"),
            ("Rosalind_2391", "AAATTTT"),
            ("Rosalind_2323", "TTTTCCC"),
            ("Rosalind_0442", "AAATCCC"),
            ("Rosalind_5013", "GGGTGGG"),
        ]);
        let graph = OverlapGraph::build(&records, OverlapOpt::default()).unwrap();
        assert_eq!(
            graph.to_string(),
            "Rosalind_0498 Rosalind_2391\nRosalind_0498 Rosalind_0442\nRosalind_2391 Rosalind_2323"
        );
    }

    #[test]
    fn shared_prefix_bucket_fans_out() {
        let records = set(&[
            ("Rosalind_0498", "AAATAAA"),
            ("Rosalind_2391", "AAATTTT"),
            ("Rosalind_2323", "AAATTTT"),
            ("Rosalind_0442", "AAATGGG"),
            ("Rosalind_5013", "GGGTGGG"),
        ]);
        let graph = OverlapGraph::build(&records, OverlapOpt { k: 3 }).unwrap();
        assert!(graph.contains("Rosalind_0498", "Rosalind_2391"));
        assert!(graph.contains("Rosalind_0498", "Rosalind_2323"));
        assert!(graph.contains("Rosalind_0498", "Rosalind_0442"));
        assert!(graph.contains("Rosalind_0442", "Rosalind_5013"));
        // 0498 前后缀相同，5013 亦然，都不应产生自环
        assert!(!graph.contains("Rosalind_0498", "Rosalind_0498"));
        assert!(!graph.contains("Rosalind_5013", "Rosalind_5013"));
        assert_eq!(graph.len(), 4);
        let from_0498: Vec<_> = graph.targets("Rosalind_0498").collect();
        assert_eq!(from_0498, vec!["Rosalind_2391", "Rosalind_2323", "Rosalind_0442"]);
    }

    #[test]
    fn duplicate_ids_collapse_edges() {
        let records = set(&[("a", "ACGTT"), ("b", "GTTAC"), ("b", "GTTCC")]);
        let graph = OverlapGraph::build(&records, OverlapOpt::default()).unwrap();
        assert_eq!(graph.edges(), &[Edge { source: "a".into(), target: "b".into() }]);
    }

    #[test]
    fn short_records_are_skipped() {
        let records = set(&[("a", "AC"), ("b", "ACGAC"), ("c", "")]);
        let graph = OverlapGraph::build(&records, OverlapOpt::default()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn k_is_configurable() {
        let records = set(&[("a", "TTACGT"), ("b", "CGTAAA"), ("c", "GTCCCC")]);
        let k2 = OverlapGraph::build(&records, OverlapOpt { k: 2 }).unwrap();
        assert!(k2.contains("a", "c"));
        assert!(!k2.contains("a", "b"));
        let k3 = OverlapGraph::build(&records, OverlapOpt { k: 3 }).unwrap();
        assert!(k3.contains("a", "b"));
        assert!(!k3.contains("a", "c"));
    }

    #[test]
    fn zero_k_is_rejected() {
        let records = set(&[("a", "ACGT")]);
        assert!(matches!(
            OverlapGraph::build(&records, OverlapOpt { k: 0 }),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(
            OverlapGraph::build(&RecordSet::default(), OverlapOpt::default()),
            Err(Error::InputArity { required: 1, got: 0, .. })
        ));
    }

    fn records_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
        // 用两种碱基提高前后缀碰撞的概率
        let base = prop_oneof![Just(b'A'), Just(b'C')];
        proptest::collection::vec(proptest::collection::vec(base, 0..8), 1..10)
    }

    proptest! {
        #[test]
        fn edges_agree_with_pairwise_check(seqs in records_strategy(), k in 1usize..4) {
            let records: RecordSet = seqs
                .iter()
                .enumerate()
                .map(|(i, s)| Record::new(format!("r{}", i), s.clone()))
                .collect();
            let graph = OverlapGraph::build(&records, OverlapOpt { k }).unwrap();

            let mut expected = HashSet::new();
            for s in &records {
                for t in &records {
                    if s.id != t.id
                        && s.seq.len() >= k
                        && t.seq.len() >= k
                        && s.seq[s.seq.len() - k..] == t.seq[..k]
                    {
                        expected.insert((s.id.clone(), t.id.clone()));
                    }
                }
            }

            let got: HashSet<_> = graph
                .edges()
                .iter()
                .map(|e| (e.source.clone(), e.target.clone()))
                .collect();
            prop_assert_eq!(got.len(), graph.len());
            prop_assert_eq!(got, expected);
            for e in graph.edges() {
                prop_assert_ne!(&e.source, &e.target);
            }
        }
    }
}
