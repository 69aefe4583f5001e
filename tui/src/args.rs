//! Parsing command-line arguments.

use crate::{style::Style, tui::view};
use clap::{error::ErrorKind, value_parser, Arg, ArgAction, Command, Error as ClapError};
use rlifesim_lib::{Config, Ruleset, World2, World3};
use std::{error::Error, time::Duration};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) three_d: bool,
    pub(crate) every: Duration,
    pub(crate) style: Style,
    steps: u64,
    no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, ClapError> {
        let matches = Command::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .arg(
                Arg::new("N")
                    .help("Side length of the grid")
                    .index(1)
                    .default_value("16")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("RULE")
                    .help("Ruleset, by name")
                    .long_help(
                        "Ruleset, by name\n\
                         \"standard-2d\" (or \"conway\") is Conway's B3/S23; \
                         \"standard-3d\" (or \"bays-5766\") is Carter Bays' 3D Life.\n\
                         When not given, the standard rule for the chosen \
                         dimensionality is used.\n",
                    )
                    .short('r')
                    .long("rule")
                    .value_parser([
                        "conway",
                        "standard-2d",
                        "2d",
                        "bays-5766",
                        "standard-3d",
                        "3d",
                    ]),
            )
            .arg(
                Arg::new("SURVIVAL")
                    .help("Live-neighbor range for a live cell to stay alive")
                    .long("survival")
                    .num_args(2)
                    .value_names(["MIN", "MAX"])
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("BIRTH")
                    .help("Live-neighbor range for a dead cell to come alive")
                    .long("birth")
                    .num_args(2)
                    .value_names(["MIN", "MAX"])
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed for the initial random fill")
                    .short('s')
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("THREED")
                    .help("Simulates on a cubic grid instead of a square one")
                    .short('3')
                    .long("three-d")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("EVERY")
                    .help("Milliseconds between generation advances")
                    .short('e')
                    .long("every")
                    .default_value("250")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("STYLE")
                    .help("How cells are drawn")
                    .long("style")
                    .default_value("blocks")
                    .value_parser(["blocks", "dots", "color"]),
            )
            .arg(
                Arg::new("STEPS")
                    .help("Number of generations to run in --no-tui mode")
                    .long("steps")
                    .default_value("100")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("NOTUI")
                    .help("Runs without entering the TUI and prints the final generation")
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue),
            )
            .try_get_matches()?;

        let n = *matches.get_one::<u64>("N").unwrap() as usize;
        let three_d = matches.get_flag("THREED");

        let mut ruleset = match matches.get_one::<String>("RULE") {
            Some(name) => Ruleset::named(name)
                .map_err(|e| ClapError::raw(ErrorKind::InvalidValue, e.to_string()))?,
            None if three_d => Ruleset::bays_5766(),
            None => Ruleset::conway(),
        };
        if let Some(range) = matches.get_many::<usize>("SURVIVAL") {
            let range: Vec<_> = range.copied().collect();
            ruleset.survival_min = range[0];
            ruleset.survival_max = range[1];
        }
        if let Some(range) = matches.get_many::<usize>("BIRTH") {
            let range: Vec<_> = range.copied().collect();
            ruleset.birth_min = range[0];
            ruleset.birth_max = range[1];
        }
        if let Err(e) = ruleset.validate() {
            return Err(ClapError::raw(ErrorKind::InvalidValue, e.to_string()));
        }

        let config = Config::new(n)
            .set_ruleset(ruleset)
            .set_seed(matches.get_one::<u64>("SEED").copied());
        let every = Duration::from_millis(*matches.get_one::<u64>("EVERY").unwrap());
        let style = matches
            .get_one::<String>("STYLE")
            .and_then(|name| Style::from_name(name))
            .unwrap_or(Style::Blocks);
        let steps = *matches.get_one::<u64>("STEPS").unwrap();
        let no_tui = matches.get_flag("NOTUI");

        Ok(Args {
            config,
            three_d,
            every,
            style,
            steps,
            no_tui,
        })
    }

    /// Runs the simulation, in the TUI or headlessly.
    pub(crate) fn run(self) -> Result<(), Box<dyn Error>> {
        log::debug!(
            "starting with {:?}, three_d: {}, every: {:?}",
            self.config,
            self.three_d,
            self.every
        );
        if self.no_tui {
            self.run_headless()
        } else {
            view(self)
        }
    }

    /// Advances the world a fixed number of generations and prints the
    /// result.
    fn run_headless(&self) -> Result<(), Box<dyn Error>> {
        if self.three_d {
            let mut world: World3 = self.config.world()?;
            for _ in 0..self.steps {
                world.update();
            }
            for layer in 0..world.side() {
                println!("layer {}", layer);
                print!("{}", world.plaintext_layer(layer));
            }
        } else {
            let mut world: World2 = self.config.world()?;
            for _ in 0..self.steps {
                world.update();
            }
            print!("{}", world.plaintext());
        }
        Ok(())
    }
}
