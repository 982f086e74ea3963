use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use chrono::Local;
use log::info;
use structopt::StructOpt;

use rwdump::cliopt::CliOpt;
use rwdump::error::{Error, ErrorKind, Result};
use rwdump::input::RecordReader;
use rwdump::output::{
    encoder::{Encoder, HumanTimeEncoder, JSONEncoder},
    writer::LineWriter,
    Output,
};
use rwdump::runner::Runner;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = CliOpt::from_args();

    let input = File::open(&opt.input)
        .map_err(|e| Error::from((ErrorKind::Setup, "couldn't open input file", e)))?;
    info!("reading records from {}", opt.input.display());

    let mut encoders: Vec<Box<dyn Encoder>> = vec![];
    if opt.human_time {
        encoders.push(Box::new(HumanTimeEncoder::new(Local)));
    }
    encoders.push(Box::new(JSONEncoder::new(opt.pretty())));

    let mut runner = Runner::new(
        RecordReader::new(BufReader::new(input)),
        Output::new(LineWriter::new(open_output(&opt)?), encoders),
        io::stdout(),
    );

    runner.run()?;
    Ok(())
}

fn open_output(opt: &CliOpt) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match &opt.output {
        Some(path) => {
            info!("writing documents to {}", path.display());
            Box::new(
                File::create(path)
                    .map_err(|e| (ErrorKind::Setup, "couldn't create output file", e))?,
            )
        }
        None => Box::new(io::stdout()),
    };
    Ok(BufWriter::new(sink))
}
