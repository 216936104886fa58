use super::*;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sprview::{
    config::parse_config,
    modules::export::{export, ExportOptions},
};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct ExportCliStruct {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Export {
        /// Path to .spr file
        #[arg(short, long)]
        path: PathBuf,
        /// Folder to write .png into
        ///
        /// Defaults to the folder of the .spr file
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Also writes every frame side by side into one image
        #[arg(short, long)]
        strip: bool,
        /// Palette file, overriding config.toml
        #[arg(long)]
        palette: Option<PathBuf>,
    },
}

pub struct Export;
impl Cli for Export {
    fn name(&self) -> &'static str {
        "export"
    }

    fn cli(&self) -> CliRes {
        let cli = match ExportCliStruct::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let _ = err.print();
                self.cli_help();
                return CliRes::Err;
            }
        };

        let Commands::Export {
            path,
            out,
            strip,
            palette,
        } = cli.command;

        let config = match parse_config() {
            Ok(config) => config,
            Err(err) => {
                log::error!("Error parsing config.toml: {err}");
                return CliRes::Err;
            }
        };

        let options = ExportOptions {
            path,
            out_dir: out,
            strip,
            palette,
        };

        match export(&options, &config) {
            Ok(written) => {
                written
                    .iter()
                    .for_each(|path| println!("{}", path.display()));

                CliRes::Ok
            }
            Err(err) => {
                log::error!("{err:?}");
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        println!(
            "\
Exports every frame of a sprite as .png. Palette index 0 is transparent.

--path <.spr> [--out <folder>] [--strip] [--palette <palette.dta>]
"
        )
    }
}
