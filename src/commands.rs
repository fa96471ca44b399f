use clap::{Parser, Subcommand};

pub const SAMPLES_FILE: &str = "samples.json";

#[derive(Parser, Debug)]
#[command(version, about = "Generate synthetic person records and benchmark operations on them")]
pub struct Args {
    /// The samples file to write or read
    #[arg(long, global = true, default_value = SAMPLES_FILE)]
    pub path: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the samples file
    Generate {
        /// The number of records to generate (negative counts produce none)
        #[arg(allow_negative_numbers = true)]
        count: i64,
        /// Seed for reproducible batches
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Load the samples file and time the operation groups
    Run,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_default_path() {
        let args = Args::try_parse_from(["benchrs", "generate", "25"]).unwrap();
        assert_eq!(args.path, SAMPLES_FILE);
        assert!(matches!(
            args.command,
            Some(Commands::Generate {
                count: 25,
                seed: None
            })
        ));
    }

    #[test]
    fn accepts_negative_count() {
        let args = Args::try_parse_from(["benchrs", "generate", "-5"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Generate { count: -5, .. })
        ));
    }

    #[test]
    fn global_path_after_subcommand() {
        let args = Args::try_parse_from(["benchrs", "run", "--path", "other.json"]).unwrap();
        assert_eq!(args.path, "other.json");
        assert!(matches!(args.command, Some(Commands::Run)));
    }

    #[test]
    fn rejects_non_integer_count() {
        assert!(Args::try_parse_from(["benchrs", "generate", "ten"]).is_err());
    }

    #[test]
    fn rejects_missing_count() {
        assert!(Args::try_parse_from(["benchrs", "generate"]).is_err());
    }

    #[test]
    fn run_takes_no_positional_arguments() {
        assert!(Args::try_parse_from(["benchrs", "run", "extra"]).is_err());
    }
}
