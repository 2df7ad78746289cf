//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lidbench",
    about = "corpus sampling and language identification evaluation tool."
)]
/// Holds every command that is callable by the `lidbench` command.
pub enum Lidbench {
    #[structopt(about = "Build stratified per-language sample sets")]
    Sample(Sample),
    #[structopt(about = "Score an external classifier against ground truth")]
    Evaluate(Evaluate),
}

#[derive(Debug, StructOpt)]
/// Sample command and parameters.
pub struct Sample {
    #[structopt(parse(from_os_str), help = "document pool location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "sample sets destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "sizes",
        help = "bucket capacities, one independent run each",
        default_value = "1000,10000",
        use_delimiter = true
    )]
    pub sizes: Vec<usize>,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Evaluate command and parameters.
pub struct Evaluate {
    #[structopt(parse(from_os_str), help = "classifier binary under test")]
    pub classifier: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus to score")]
    pub corpus: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
}
