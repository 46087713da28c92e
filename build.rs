use clap::CommandFactory;
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

#[path = "src/cli.rs"]
mod cli;

use cli::Cli;

const BIN_NAME: &str = "fancylists";

fn generate_completions(outdir: &Path) -> Result<()> {
    let mut cmd = Cli::command();
    for shell in [Shell::Bash, Shell::Fish, Shell::Zsh] {
        generate_to(shell, &mut cmd, BIN_NAME, outdir)?;
    }
    Ok(())
}

fn render_page(man: Man, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(path, buffer)
}

/// One page for the binary and one per subcommand, named like `git-log(1)`.
fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let cmd = Cli::command();
    render_page(Man::new(cmd.clone()), &out_dir.join(format!("{BIN_NAME}.1")))?;

    for subcommand in cmd.get_subcommands() {
        let name = subcommand.get_name();
        if name == "help" {
            continue;
        }
        let title = format!("{BIN_NAME}-{name}");
        let man = Man::new(subcommand.clone()).title(&title);
        render_page(man, &out_dir.join(format!("{title}.1")))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    if let Some(outdir) = env::var_os("OUT_DIR") {
        let outdir = PathBuf::from(outdir);
        generate_completions(&outdir)?;
        generate_man_pages(&outdir.join("man"))?;
    }

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
