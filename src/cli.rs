//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catlist category fragment generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Category registry file path (relative to project root)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: catlist.toml)
    #[arg(short = 'C', long, default_value = "catlist.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared render arguments for Build and Render commands
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Minify the html fragments
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every registered tag into the output directory
    Build {
        #[command(flatten)]
        render_args: RenderArgs,
    },

    /// Render a single tag and print the fragment to stdout
    Render {
        /// Tag name to render (see `tags` for the registered names)
        tag: String,

        #[command(flatten)]
        render_args: RenderArgs,
    },

    /// List registered tags and their render modes
    Tags,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_render(&self) -> bool {
        matches!(self.command, Commands::Render { .. })
    }
    pub const fn is_tags(&self) -> bool {
        matches!(self.command, Commands::Tags)
    }

    /// Minify override from the active subcommand, if given
    pub fn minify(&self) -> Option<&bool> {
        match &self.command {
            Commands::Build { render_args } | Commands::Render { render_args, .. } => {
                render_args.minify.as_ref()
            }
            Commands::Tags => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command() {
        let cli = Cli::parse_from(["catlist", "build"]);

        assert!(cli.is_build());
        assert!(!cli.is_render());
        assert!(!cli.is_tags());
        assert_eq!(cli.minify(), None);
    }

    #[test]
    fn test_render_command_takes_tag() {
        let cli = Cli::parse_from(["catlist", "render", "category_list"]);

        assert!(cli.is_render());
        match &cli.command {
            Commands::Render { tag, .. } => assert_eq!(tag, "category_list"),
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_minify_flag_forms() {
        // Bare flag means true
        let cli = Cli::parse_from(["catlist", "build", "--minify"]);
        assert_eq!(cli.minify(), Some(&true));

        // Explicit value
        let cli = Cli::parse_from(["catlist", "build", "--minify", "false"]);
        assert_eq!(cli.minify(), Some(&false));

        // Absent flag leaves the config value alone
        let cli = Cli::parse_from(["catlist", "render", "category_tag_cloud"]);
        assert_eq!(cli.minify(), None);
    }

    #[test]
    fn test_tags_command_has_no_minify() {
        let cli = Cli::parse_from(["catlist", "tags"]);

        assert!(cli.is_tags());
        assert_eq!(cli.minify(), None);
    }

    #[test]
    fn test_global_path_args() {
        let cli = Cli::parse_from([
            "catlist", "--root", "/srv/blog", "--data", "reg.json", "--output", "out", "build",
        ]);

        assert_eq!(cli.root, Some(PathBuf::from("/srv/blog")));
        assert_eq!(cli.data, Some(PathBuf::from("reg.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.config, PathBuf::from("catlist.toml"));
    }
}
