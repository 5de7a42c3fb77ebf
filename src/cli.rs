use crate::{Options, normalize_with_log};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --in-place            Rewrite INPUT with the normalized text\n\
               --check               Validate only; write nothing, exit 1 on failure\n\
               --compact             Emit compact JSON instead of 2-space indented\n\
               --log                 Print a log of edits to stderr\n\
               --no-line-comments    Do not strip // line comments\n\
               --no-block-comments   Do not strip /* */ block comments\n\
               --no-trailing-commas  Do not remove trailing commas\n\
               --no-blank-compact    Do not drop blank lines\n\
           -h, --help                Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    check: bool,
    log: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonclean".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut check = false;
    let mut log = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--in-place" => {
                in_place = true;
            }
            "--check" => {
                check = true;
            }
            "--compact" => {
                opts.compact = true;
            }
            "--log" => {
                log = true;
                opts.logging = true;
            }
            "--no-line-comments" => {
                opts.strip_line_comments = false;
            }
            "--no-block-comments" => {
                opts.strip_block_comments = false;
            }
            "--no-trailing-commas" => {
                opts.strip_trailing_commas = false;
            }
            "--no-blank-compact" => {
                opts.compact_blank_lines = false;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mode = CliMode {
        input,
        output,
        in_place,
        check,
        log,
    };
    (opts, mode)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    // Normalize before opening any output target so a failure leaves
    // existing files untouched.
    let (normalized, entries) = match normalize_with_log(&content, &opts) {
        Ok(res) => res,
        Err(e) => {
            match e.diagnostic() {
                Some(d) => eprintln!("{}", d.render()),
                None => eprintln!("{}", e),
            }
            std::process::exit(1);
        }
    };

    if mode.log {
        for entry in &entries {
            eprintln!("{:>6}  {}  {:?}", entry.position, entry.message, entry.context);
        }
    }

    if mode.check {
        return Ok(());
    }

    if mode.in_place {
        let path = mode
            .input
            .as_ref()
            .ok_or("--in-place requires INPUT file")?;
        fs::write(path, normalized)?;
        return Ok(());
    }

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    out_writer.write_all(normalized.as_bytes())?;
    out_writer.flush()?;
    Ok(())
}
