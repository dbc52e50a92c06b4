//! # rosalind-rust
//!
//! 面向短 DNA/RNA 序列（约 1 kbp、至多约 100 条记录）的序列分析引擎。
//!
//! 所有组件共享同一个 FASTA 记录模型，包括：
//!
//! - **FASTA 读取**：多记录解析，物化为可多次遍历的 [`RecordSet`]
//! - **序列统计**：碱基计数、GC 含量、Hamming 距离、可重叠的子串定位
//! - **Profile / 共识序列**：按 A、C、G、T 固定优先级处理平局
//! - **重叠图**：基于前缀索引的 O_k 图构建
//! - **模体搜索**：多序列最长公共子串（广义后缀数组）与反向回文扫描
//!
//! ## 快速示例
//!
//! ```rust
//! use std::io::Cursor;
//! use rosalind_rust::io::fasta::RecordSet;
//! use rosalind_rust::overlap::{OverlapGraph, OverlapOpt};
//! use rosalind_rust::profile::Profile;
//!
//! let data = ">a\nATCCAGCT\n>b\nGGGCAACT\n>c\nATGGATCT\n";
//! let records = RecordSet::from_reader(Cursor::new(data)).unwrap();
//!
//! let profile = Profile::build(&records).unwrap();
//! assert_eq!(profile.consensus(), b"ATGCAACT");
//!
//! let graph = OverlapGraph::build(&records, OverlapOpt::default()).unwrap();
//! assert!(graph.is_empty());
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA 解析
//! - [`stats`] — 单序列统计与两两比较
//! - [`profile`] — profile 矩阵与共识序列
//! - [`overlap`] — 重叠图
//! - [`motif`] — 最长公共子串与限制性酶切位点
//! - [`util`] — 互补、转录、密码子翻译
//! - [`recurrence`] — 兔子递推与孟德尔概率

pub mod error;
pub mod io;
pub mod motif;
pub mod overlap;
pub mod profile;
pub mod recurrence;
pub mod stats;
pub mod util;

pub use error::{Error, Result};
pub use io::fasta::{Record, RecordSet};
