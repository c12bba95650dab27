//! Command-line argument parsing and help for lsr.
//!
//! Short flags may be combined (`-lart`). A bare argument selects the directory,
//! and `--` ends option parsing so names starting with `-` can be listed.

use crate::config::{General, ListingConfiguration};
use crate::core::SortKey;

use std::path::PathBuf;

/// What the binary should do after parsing its arguments.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    List(CliFlags),
    Help,
    Version,
    Init,
    /// Usage error, with the message to print.
    Invalid(String),
}

/// The flags and path given on the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliFlags {
    pub path: Option<PathBuf>,
    pub long_format: bool,
    pub show_hidden: bool,
    pub reverse: bool,
    pub by_time: bool,
    pub by_size: bool,
    pub human_sizes: bool,
}

impl CliFlags {
    /// Merges the flags over the `[general]` defaults.
    pub fn into_configuration(self, general: &General) -> ListingConfiguration {
        let sort_key = SortKey::from_flags(self.by_time, self.by_size);
        let path = self.path.unwrap_or_else(|| PathBuf::from("."));

        ListingConfiguration::builder(path, general)
            .show_hidden(self.show_hidden)
            .long_format(self.long_format)
            .reverse(self.reverse)
            .human_sizes(self.human_sizes)
            .sort_key(sort_key)
            .build()
    }
}

/// Parses the arguments that follow the program name.
pub fn handle_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let mut flags = CliFlags::default();
    let mut options_done = false;

    for arg in args {
        if !options_done && arg.starts_with('-') && arg.len() > 1 {
            match arg.as_str() {
                "--" => options_done = true,
                "--help" => return CliAction::Help,
                "--version" => return CliAction::Version,
                "--init" => return CliAction::Init,
                long if long.starts_with("--") => {
                    return CliAction::Invalid(format!("unrecognized option '{}'", long));
                }
                short => {
                    for c in short.chars().skip(1) {
                        match c {
                            'l' => flags.long_format = true,
                            'a' => flags.show_hidden = true,
                            'r' => flags.reverse = true,
                            't' => flags.by_time = true,
                            'S' => flags.by_size = true,
                            'h' => flags.human_sizes = true,
                            'v' => return CliAction::Version,
                            other => {
                                return CliAction::Invalid(format!(
                                    "invalid option -- '{}'",
                                    other
                                ));
                            }
                        }
                    }
                }
            }
            continue;
        }

        if flags.path.is_some() {
            return CliAction::Invalid("only one directory may be given".to_string());
        }
        flags.path = Some(PathBuf::from(arg));
    }

    CliAction::List(flags)
}

pub fn print_version() {
    println!("lsr {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"lsr - list information about a directory (the current directory by default)

USAGE:
  lsr [OPTIONS] [PATH]

PATH:
  Directory to list (defaults to the current directory)

OPTIONS:
  -l                      Use a long listing format
  -a                      Do not ignore entries starting with .
  -r                      Reverse order while sorting
  -t                      Sort by modification time, newest first
  -S                      Sort by file size, largest first
  -h                      With -l, print sizes in decimal units (1.2 kB)
      --init              Generate a default configuration file
      --help              Print help information
  -v, --version           Display the current installed version of lsr

ENVIRONMENT:
  LSR_CONFIG              Override the default config path
  LSR_LOG                 Log filter for diagnostics on stderr (e.g. "debug")
"#
    );
}

pub fn print_usage_hint() {
    eprintln!("Try 'lsr --help' for more information.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> CliAction {
        handle_args(args.iter().map(|s| s.to_string()))
    }

    fn flags(args: &[&str]) -> CliFlags {
        match parse(args) {
            CliAction::List(f) => f,
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn no_args_lists_current_dir() {
        let cfg = flags(&[]).into_configuration(&General::default());
        assert_eq!(cfg.target_path(), Path::new("."));
        assert_eq!(cfg.sort_key(), SortKey::Name);
        assert!(!cfg.long_format());
    }

    #[test]
    fn combined_short_flags() {
        let f = flags(&["-lart", "/tmp"]);
        assert!(f.long_format && f.show_hidden && f.reverse && f.by_time);
        assert!(!f.by_size);
        assert_eq!(f.path.as_deref(), Some(Path::new("/tmp")));
    }

    #[test]
    fn flags_may_follow_the_path() {
        let f = flags(&["/tmp", "-S"]);
        assert!(f.by_size);
        assert_eq!(f.path.as_deref(), Some(Path::new("/tmp")));
    }

    #[test]
    fn time_wins_over_size() {
        let cfg = flags(&["-S", "-t"]).into_configuration(&General::default());
        assert_eq!(cfg.sort_key(), SortKey::ModifiedTime);
    }

    #[test]
    fn help_version_and_init() {
        assert_eq!(parse(&["--help"]), CliAction::Help);
        assert_eq!(parse(&["-l", "--help"]), CliAction::Help);
        assert_eq!(parse(&["--version"]), CliAction::Version);
        assert_eq!(parse(&["-v"]), CliAction::Version);
        assert_eq!(parse(&["--init"]), CliAction::Init);
    }

    #[test]
    fn unknown_options_are_rejected() {
        assert_eq!(
            parse(&["-x"]),
            CliAction::Invalid("invalid option -- 'x'".to_string())
        );
        assert!(matches!(parse(&["--long"]), CliAction::Invalid(_)));
        assert!(matches!(parse(&["a", "b"]), CliAction::Invalid(_)));
    }

    #[test]
    fn double_dash_ends_options() {
        let f = flags(&["-l", "--", "-weird"]);
        assert!(f.long_format);
        assert_eq!(f.path.as_deref(), Some(Path::new("-weird")));
    }

    #[test]
    fn lone_dash_is_a_path() {
        let f = flags(&["-"]);
        assert_eq!(f.path.as_deref(), Some(Path::new("-")));
    }
}
