use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use fancylists::{Config, parse, to_html};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = fancylists::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let document = parse(&input, Some(cfg));
            print!("{}", document.dump());
            Ok(())
        }
        Commands::Render {
            file,
            output,
            xhtml,
        } => {
            let mut cfg = load_config(cli.config.as_deref(), &file)?;
            if xhtml {
                cfg.xhtml = true;
            }

            let input = read_all(file.as_ref())?;
            let html = to_html(&input, Some(cfg));

            if let Some(path) = &output {
                fs::write(path, &html)?;
                log::info!("Wrote {}", path.display());
            } else {
                io::stdout().lock().write_all(html.as_bytes())?;
            }
            Ok(())
        }
    }
}
