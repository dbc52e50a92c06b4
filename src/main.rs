use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use rosalind_rust::io::fasta::RecordSet;
use rosalind_rust::motif::{self, PalindromeOpt};
use rosalind_rust::overlap::{OverlapGraph, OverlapOpt};
use rosalind_rust::profile::Profile;
use rosalind_rust::util::{codon, dna};
use rosalind_rust::{recurrence, stats};

#[derive(Parser, Debug)]
#[command(
    name = "rosalind-rust",
    author,
    version,
    about = "Sequence analysis for short DNA/RNA datasets",
    arg_required_else_help = true
)]
struct Cli {
    /// Output path (stdout if omitted)
    #[arg(short, long, global = true)]
    out: Option<String>,
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
    /// Print progress lines to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count A, C, G and T in a DNA string
    Dna { dataset: String },
    /// Transcribe DNA into RNA
    Rna { dataset: String },
    /// Reverse complement of a DNA string
    Revc { dataset: String },
    /// FASTA record with the highest GC content
    Gc { dataset: String },
    /// Hamming distance between two equal-length strings (one per line)
    Hamm { dataset: String },
    /// 1-based positions of the second line inside the first
    Subs { dataset: String },
    /// Consensus string and profile matrix
    Cons { dataset: String },
    /// Overlap graph adjacency list
    Grph {
        dataset: String,
        /// Overlap length
        #[arg(short, long, default_value_t = 3)]
        k: usize,
    },
    /// Longest common substring of all FASTA records
    Lcsm { dataset: String },
    /// Reverse palindromes (restriction sites) in the first FASTA record
    Revp {
        dataset: String,
        #[arg(long = "min-len", default_value_t = 4)]
        min_len: usize,
        #[arg(long = "max-len", default_value_t = 12)]
        max_len: usize,
    },
    /// Translate RNA into protein
    Prot { dataset: String },
    /// Rabbit pairs after n months with litters of k (input: "n k")
    Fib { dataset: String },
    /// Rabbit pairs after n months when rabbits live m months (input: "n m")
    Fibd { dataset: String },
    /// Probability of a dominant phenotype (input: "k m n")
    Iprb { dataset: String },
}

struct Ctx {
    json: bool,
    verbose: bool,
}

impl Ctx {
    fn note(&self, msg: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", msg.as_ref());
        }
    }

    fn render<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(text(value))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Ctx { json: cli.json, verbose: cli.verbose };

    let report = match cli.command {
        Commands::Dna { dataset } => run_dna(&dataset, &ctx)?,
        Commands::Rna { dataset } => run_rna(&dataset, &ctx)?,
        Commands::Revc { dataset } => run_revc(&dataset, &ctx)?,
        Commands::Gc { dataset } => run_gc(&dataset, &ctx)?,
        Commands::Hamm { dataset } => run_hamm(&dataset, &ctx)?,
        Commands::Subs { dataset } => run_subs(&dataset, &ctx)?,
        Commands::Cons { dataset } => run_cons(&dataset, &ctx)?,
        Commands::Grph { dataset, k } => run_grph(&dataset, OverlapOpt { k }, &ctx)?,
        Commands::Lcsm { dataset } => run_lcsm(&dataset, &ctx)?,
        Commands::Revp { dataset, min_len, max_len } => {
            run_revp(&dataset, PalindromeOpt { min_len, max_len }, &ctx)?
        }
        Commands::Prot { dataset } => run_prot(&dataset, &ctx)?,
        Commands::Fib { dataset } => run_fib(&dataset, &ctx)?,
        Commands::Fibd { dataset } => run_fibd(&dataset, &ctx)?,
        Commands::Iprb { dataset } => run_iprb(&dataset, &ctx)?,
    };

    write_report(cli.out.as_deref(), &report)
}

fn write_report(out_path: Option<&str>, report: &str) -> Result<()> {
    let mut out: Box<dyn Write> = if let Some(p) = out_path {
        let fh = File::create(p).with_context(|| format!("cannot create output file '{}'", p))?;
        Box::new(BufWriter::new(fh))
    } else {
        Box::new(BufWriter::new(std::io::stdout()))
    };
    writeln!(out, "{}", report)?;
    out.flush()?;
    Ok(())
}

// ── 输入 ──────────────────────────────────────────────

fn read_fasta(path: &str, ctx: &Ctx) -> Result<RecordSet> {
    let fh = File::open(path).with_context(|| format!("cannot open FASTA '{}'", path))?;
    let records = RecordSet::from_reader(BufReader::new(fh))
        .with_context(|| format!("cannot parse FASTA '{}'", path))?;
    ctx.note(format!("records: {}", records.len()));
    Ok(records)
}

fn read_text(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read dataset '{}'", path))
}

/// 单条序列：去掉首尾空白
fn read_sequence(path: &str, ctx: &Ctx) -> Result<Vec<u8>> {
    let seq = read_text(path)?.trim().as_bytes().to_vec();
    ctx.note(format!("length: {}", seq.len()));
    Ok(seq)
}

/// 两行输入，分别为 s 和 t
fn read_pair(path: &str) -> Result<(Vec<u8>, Vec<u8>)> {
    let text = read_text(path)?;
    let mut lines = text.lines().map(str::trim_end).filter(|l| !l.is_empty());
    match (lines.next(), lines.next()) {
        (Some(s), Some(t)) => Ok((s.as_bytes().to_vec(), t.as_bytes().to_vec())),
        _ => bail!("dataset '{}' must contain two lines", path),
    }
}

fn read_numbers<const N: usize>(path: &str) -> Result<[u64; N]> {
    let text = read_text(path)?;
    let values = text
        .split_whitespace()
        .map(|tok| {
            tok.parse::<u64>()
                .with_context(|| format!("'{}' in '{}' is not a non-negative integer", tok, path))
        })
        .collect::<Result<Vec<_>>>()?;
    match <[u64; N]>::try_from(values) {
        Ok(arr) => Ok(arr),
        Err(v) => bail!("dataset '{}' must contain {} integers, found {}", path, N, v.len()),
    }
}

fn lossy(seq: &[u8]) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

// ── 子命令 ────────────────────────────────────────────

fn run_dna(path: &str, ctx: &Ctx) -> Result<String> {
    let counts = stats::nucleotide_counts(&read_sequence(path, ctx)?);
    ctx.render(&counts, ToString::to_string)
}

fn run_rna(path: &str, ctx: &Ctx) -> Result<String> {
    let rna = lossy(&dna::transcribe(&read_sequence(path, ctx)?));
    ctx.render(&rna, Clone::clone)
}

fn run_revc(path: &str, ctx: &Ctx) -> Result<String> {
    let rc = lossy(&dna::reverse_complement(&read_sequence(path, ctx)?));
    ctx.render(&rc, Clone::clone)
}

fn run_gc(path: &str, ctx: &Ctx) -> Result<String> {
    let records = read_fasta(path, ctx)?;
    let hit = stats::highest_gc(&records)?;
    ctx.render(&hit, ToString::to_string)
}

fn run_hamm(path: &str, ctx: &Ctx) -> Result<String> {
    let (s, t) = read_pair(path)?;
    let d = stats::hamming_distance(&s, &t)?;
    ctx.render(&d, ToString::to_string)
}

fn run_subs(path: &str, ctx: &Ctx) -> Result<String> {
    let (s, t) = read_pair(path)?;
    let positions = stats::find_all_occurrences(&s, &t);
    ctx.note(format!("occurrences: {}", positions.len()));
    ctx.render(&positions, |p| {
        p.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    })
}

fn run_cons(path: &str, ctx: &Ctx) -> Result<String> {
    let records = read_fasta(path, ctx)?;
    let profile = Profile::build(&records)?;
    ctx.note(format!("columns: {}", profile.width()));
    let report = profile.report();
    ctx.render(&report, ToString::to_string)
}

fn run_grph(path: &str, opt: OverlapOpt, ctx: &Ctx) -> Result<String> {
    let records = read_fasta(path, ctx)?;
    let graph = OverlapGraph::build(&records, opt)?;
    ctx.note(format!("edges: {}", graph.len()));
    ctx.render(&graph, ToString::to_string)
}

fn run_lcsm(path: &str, ctx: &Ctx) -> Result<String> {
    let records = read_fasta(path, ctx)?;
    let motif = motif::longest_common_substring(&records.sequences())?.map(|m| lossy(&m));
    ctx.note(format!("motif length: {}", motif.as_ref().map_or(0, String::len)));
    ctx.render(&motif, |m| m.clone().unwrap_or_default())
}

fn run_revp(path: &str, opt: PalindromeOpt, ctx: &Ctx) -> Result<String> {
    let records = read_fasta(path, ctx)?;
    // RecordSet::from_reader 保证至少一条记录
    let Some(first) = records.first() else { bail!("no FASTA records in '{}'", path) };
    let hits = motif::reverse_palindromes_with(&first.seq, opt)?;
    ctx.note(format!("sites: {}", hits.len()));
    ctx.render(&hits, |h| {
        h.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    })
}

fn run_prot(path: &str, ctx: &Ctx) -> Result<String> {
    let protein = codon::translate(&read_sequence(path, ctx)?)?;
    ctx.render(&protein, Clone::clone)
}

fn run_fib(path: &str, ctx: &Ctx) -> Result<String> {
    let [n, k] = read_numbers::<2>(path)?;
    let pairs = recurrence::fib(n, k)?;
    ctx.render(&pairs, ToString::to_string)
}

fn run_fibd(path: &str, ctx: &Ctx) -> Result<String> {
    let [n, m] = read_numbers::<2>(path)?;
    let pairs = recurrence::fibd(n, usize::try_from(m).unwrap_or(usize::MAX))?;
    ctx.render(&pairs, ToString::to_string)
}

fn run_iprb(path: &str, ctx: &Ctx) -> Result<String> {
    let [k, m, n] = read_numbers::<3>(path)?;
    let p = recurrence::dominant_probability(k, m, n)?;
    ctx.render(&p, |p| format!("{:.3}", p))
}
