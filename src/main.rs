//! discreta main: subcommands, interactive shell by default.
use clap::Parser; // trait import enables DiscretaCli::parse()

use discreta::cli::{Command, DiscretaCli};
use discreta::commands::{self, Settings};
use discreta::config::{resolve_config_path, Config};
use discreta::core::diagnostics::print_error;
use discreta::{logging, shell};

fn main() {
    let args = DiscretaCli::parse();
    logging::init(args.verbose);

    let cfg_path = resolve_config_path(&args.config);
    let cfg = Config::load(cfg_path.as_deref());
    if args.no_color || !cfg.output.color {
        colored::control::set_override(false);
    }
    let settings = Settings::new(&args, &cfg);

    let result = match args.cmd {
        // no subcommand: open the shell, like the index page
        None | Some(Command::Shell) => shell::start(&settings),
        Some(cmd) => commands::dispatch(cmd, &settings),
    };

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
