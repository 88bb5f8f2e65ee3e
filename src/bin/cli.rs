//
// Copyright, 2025.  Signal65 / Futurum Group.
//
//! CLI supporting `cat`, `put`, and `ls` over store URLs.
//!
//! Examples:
//! ```bash
//! s3text cat s3://bucket/logs/app.txt
//! s3text put s3://bucket/logs/app.txt --input app.txt
//! s3text put s3://bucket/logs/app.txt --gzip     # reads stdin, stores app.txt.gz
//! s3text ls  s3://bucket/logs/
//! ```

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, ErrorKind, Read, Write};
use std::path::PathBuf;

use s3textio::{list_immediate_children, read_lines, write_data};

/// Macro to safely print with broken pipe handling
macro_rules! safe_println {
    ($($arg:tt)*) => {
        match writeln!(io::stdout(), $($arg)*) {
            Ok(_) => {},
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                // Gracefully exit on broken pipe (e.g., when piped to head/tail)
                std::process::exit(0);
            }
            Err(e) => return Err(e.into())
        }
    };
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(
        short = 'v',
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity: -v = Info, -vv = Debug"
    )]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the lines of a text object.
    Cat {
        /// Store URL, e.g. s3://bucket/key.txt
        url: String,
    },

    /// Upload a file (or stdin) as an object's full content.
    Put {
        /// Store URL, e.g. s3://bucket/key.txt
        url: String,

        /// Gzip the payload and append .gz to the key.
        #[arg(long)]
        gzip: bool,

        /// Read this file instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// List the immediate children of a folder-style prefix.
    Ls {
        /// Folder URL, e.g. s3://bucket/prefix/
        url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.cmd {
        Command::Cat { url } => {
            for line in read_lines(&url)? {
                safe_println!("{line}");
            }
        }

        Command::Put { url, gzip, input } => {
            let data = match input {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            write_data(&data, &url, gzip)?;
        }

        Command::Ls { url } => {
            let mut children: Vec<String> =
                list_immediate_children(&url)?.into_iter().collect();
            children.sort();
            for child in children {
                safe_println!("{child}");
            }
        }
    }
    Ok(())
}
