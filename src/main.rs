use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use quat::bufio;
use quat::config::Config;
use quat::error::QuatResult;
use quat::{Quaternion, ReadQuaternion};

fn main() {
    env_logger::init();

    let config = match Config::new(env::args().skip(1).collect()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    };
    log::debug!("{config}");

    if let Err(err) = run(&config) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn run(config: &Config) -> QuatResult<()> {
    let mut sink = io::stdout().lock();

    match &config.input {
        Some(path) => {
            let mut source = bufio::new_input_file(path)?;
            process(config, &mut source, &mut sink)
        }
        None => {
            let mut source = io::stdin().lock();
            process(config, &mut source, &mut sink)
        }
    }
}

fn process<R: BufRead, W: Write>(config: &Config, source: &mut R, sink: &mut W) -> QuatResult<()> {
    if config.pairs {
        print_pairs(source, sink)
    }
    else {
        print_singles(source, sink)
    }
}

/// Prints each quaternion read from the source along with its unary forms.
fn print_singles<R: BufRead, W: Write>(source: &mut R, sink: &mut W) -> QuatResult<()> {
    while let Some(q) = source.read_quaternion()? {
        writeln!(sink, "
            \rq       = {q}
            \r-q      = {}
            \rconj(q) = {}
            \r|q|     = {:.3}
            \rq/|q|   = {}
            \rq^-1    = {}",
            -q,
            q.conjugate(),
            q.len(),
            q.normalized(),
            q.inverse(),
        )?;
    }
    Ok(())
}

/// Reads quaternions two at a time and prints their binary forms.
/// A trailing unpaired quaternion is an error.
fn print_pairs<R: BufRead, W: Write>(source: &mut R, sink: &mut W) -> QuatResult<()> {
    while let Some(q) = source.read_quaternion()? {
        let mut r = Quaternion::default();
        r.read_from(source)?;
        writeln!(sink, "
            \rq     = {q}
            \rr     = {r}
            \rq + r = {}
            \rq - r = {}
            \rq * r = {}
            \rq / r = {}",
            q + r,
            q - r,
            q * r,
            q / r,
        )?;
    }
    Ok(())
}
