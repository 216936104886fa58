use super::*;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spr::Spr;
use sprview::{config::parse_config, modules::info::sprite_info};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct InfoCliStruct {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the size of every frame in a sprite
    Info {
        /// Path to .spr file
        path: PathBuf,
    },
}

pub struct Info;
impl Cli for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn cli(&self) -> CliRes {
        let cli = match InfoCliStruct::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let _ = err.print();
                self.cli_help();
                return CliRes::Err;
            }
        };

        let Commands::Info { path } = cli.command;

        let config = match parse_config() {
            Ok(config) => config,
            Err(err) => {
                log::error!("Error parsing config.toml: {err}");
                return CliRes::Err;
            }
        };

        let spr = match Spr::open_from_file_with(&path, config.out_of_bounds_policy()) {
            Ok(spr) => spr,
            Err(err) => {
                log::error!("{err}");
                return CliRes::Err;
            }
        };

        println!("{}: {} frame(s)", path.display(), spr.header.num_sprites);

        for frame in sprite_info(&spr) {
            println!("{frame}");
        }

        CliRes::Ok
    }

    fn cli_help(&self) {
        println!(
            "\
Prints frame count and the size of every frame

<.spr>
"
        )
    }
}
