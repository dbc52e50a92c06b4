pub mod fasta;

pub use fasta::{FastaReader, Record, RecordSet};
