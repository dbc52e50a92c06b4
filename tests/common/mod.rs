#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

pub const CONS_FASTA: &str = ">Rosalind_1
ATCCAGCT
>Rosalind_2
GGGCAACT
>Rosalind_3
ATGGATCT
>Rosalind_4
AAGCAACC
>Rosalind_5
TTGGAACT
>Rosalind_6
ATGCCATT
>Rosalind_7
ATGGCACT
";

pub const GRPH_FASTA: &str = ">Rosalind_0498
AAATAAA
>Rosalind_2391
AAATTTT
>Rosalind_2323
TTTTCCC
>Rosalind_0442
AAATCCC
>Rosalind_5013
GGGTGGG
";

pub const GC_FASTA: &str = ">Rosalind_6404
CCTGCGGAAGATCGGCACTAGAATAGCCAGAACCGTTTCTCTGAGGCTTCCGGCCTTCCC
TCCCACTAATAATTCTGAGG
>Rosalind_5959
CCATCGGTAGCGCATCCTTAGTCCAATTAAGTCCCTATCCAGGCGCTCCGCCGAAGGTCT
ATATCCATTTGTCAGCAGACACGC
>Rosalind_0808
CCACCCTCGTGGTATGGCTAGGCATTCAGGAACCGGAGAACGCTTCAGACCAGCCCGGAC
TGGGAACCTGCGGGCAGTAGGTGGAAT
";

/// Write `content` to a fresh temporary file that lives as long as the handle.
pub fn dataset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn cli() -> Command {
    Command::cargo_bin("rosalind-rust").unwrap()
}

/// Run a subcommand on a dataset and return its stdout.
pub fn run(subcommand: &str, content: &str, extra: &[&str]) -> String {
    let input = dataset(content);
    let output = cli()
        .arg(subcommand)
        .arg(input.path())
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{} failed: {}",
        subcommand,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
