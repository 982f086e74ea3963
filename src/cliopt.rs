use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rwdump",
    about = "Decode persisted Prometheus remote-write records into readable JSON"
)]
pub struct CliOpt {
    /// File with concatenated {"b": [...]} records.
    #[structopt(long = "input", short = "i", parse(from_os_str))]
    pub input: PathBuf,

    /// Where to write the decoded documents [default: stdout].
    #[structopt(long = "output", short = "o", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON documents (true|false) [default: true].
    #[structopt(long = "pretty", parse(try_from_str))]
    pub pretty: Option<bool>,

    /// Precede each document with human-readable sample timestamps.
    #[structopt(long = "human-time", short = "t")]
    pub human_time: bool,
}

impl CliOpt {
    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }
}
