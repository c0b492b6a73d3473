// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Common argument: input list
fn input_arg() -> Arg {
    Arg::new("input_file")
        .required(true)
        .help("Path to the input file or \"-\" for stdin. Must be a list of extensions.")
}

/// Common argument: CSV report destination
fn output_arg() -> Arg {
    Arg::new("output_file")
        .required(true)
        .help("Path to the output file or \"-\" for stdout. Will be a CSV file.")
}

fn skins_arg() -> Arg {
    Arg::new("skins")
        .long("skins")
        .action(ArgAction::SetTrue)
        .help("Look for skins instead of extensions")
}

fn survey_cli() -> Command {
    Command::new("extension-survey")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Survey MediaWiki extensions.")
        .arg(input_arg())
        .arg(output_arg())
        .arg(skins_arg())
        .arg(
            Arg::new("hooks")
                .long("hooks")
                .action(ArgAction::SetTrue)
                .help("List hook usage"),
        )
}

fn hook_usage_cli() -> Command {
    Command::new("list-hook-usage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List hook usage for MediaWiki extensions and skins.")
        .arg(input_arg())
        .arg(output_arg())
        .arg(skins_arg())
}

fn render(cmd: Command, man_dir: &Path) {
    let name = cmd.get_name().to_string();
    let mut buffer = Vec::new();

    if let Err(e) = Man::new(cmd).render(&mut buffer) {
        println!("cargo:warning=Failed to render man page for {}: {}", name, e);
        return;
    }

    let man_path = man_dir.join(format!("{name}.1"));
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page {}: {}", man_path.display(), e);
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    render(survey_cli(), &man_dir);
    render(hook_usage_cli(), &man_dir);
}
