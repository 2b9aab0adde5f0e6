use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// atelier-check: inspect and validate installed themes.
#[derive(Parser, Debug)]
#[command(name = "atelier-check", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Themes directory override.
    #[arg(long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every static check against every theme.
    Validate {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List discoverable themes.
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show which theme a request with these signals would get.
    Resolve {
        /// Request `Host` header.
        #[arg(long)]
        host: Option<String>,

        /// Preview override cookie value.
        #[arg(long)]
        preview: Option<String>,

        /// Session override cookie value.
        #[arg(long)]
        session: Option<String>,

        /// Persisted setting, instead of reading the settings store.
        #[arg(long)]
        persisted: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print a theme's inheritance chain.
    Chain {
        slug: String,
        #[arg(long)]
        json: bool,
    },

    /// Find the file serving a logical path in a theme's chain.
    Locate {
        slug: String,
        /// Logical path, page route, layout name or component name.
        path: String,
        #[arg(long, value_enum, default_value_t = LocateKind::File)]
        kind: LocateKind,
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateKind {
    File,
    Page,
    Layout,
    Component,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_with_globals() {
        let args = Args::try_parse_from([
            "atelier-check",
            "validate",
            "--json",
            "--themes-dir",
            "/srv/themes",
        ])
        .unwrap();
        assert_eq!(args.themes_dir, Some(PathBuf::from("/srv/themes")));
        assert!(matches!(args.command, Command::Validate { json: true }));
    }

    #[test]
    fn resolve_flags() {
        let args = Args::try_parse_from([
            "atelier-check",
            "--log-level",
            "debug",
            "resolve",
            "--host",
            "shop.example.com",
            "--session",
            "noir",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Command::Resolve {
                host,
                preview,
                session,
                persisted,
                json,
            } => {
                assert_eq!(host.as_deref(), Some("shop.example.com"));
                assert_eq!(preview, None);
                assert_eq!(session.as_deref(), Some("noir"));
                assert_eq!(persisted, None);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn locate_kind_defaults_to_file() {
        let args =
            Args::try_parse_from(["atelier-check", "locate", "aurora", "pages/index"]).unwrap();
        match args.command {
            Command::Locate { slug, path, kind, .. } => {
                assert_eq!(slug, "aurora");
                assert_eq!(path, "pages/index");
                assert_eq!(kind, LocateKind::File);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::try_parse_from([
            "atelier-check",
            "locate",
            "aurora",
            "/blog",
            "--kind",
            "page",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Locate { kind: LocateKind::Page, .. }));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["atelier-check"]).is_err());
    }
}
