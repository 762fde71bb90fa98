use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "indie-sync", version, about = "Indie Sync showcase preview")]
pub struct CliArgs {
    /// Print the default view and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Start in light theme
    #[arg(long)]
    pub light: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override catalog path
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.data {
            std::env::set_var("DATA_PATH", path);
        }
        if self.light {
            std::env::set_var("SYNC_THEME", "light");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn flags_parse() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "indie-sync",
            "--headless",
            "--json",
            "--data",
            "fixtures/catalog.json",
        ])?;

        assert!(args.headless);
        assert!(args.json);
        assert!(!args.light);
        assert_eq!(args.data.as_deref(), Some("fixtures/catalog.json"));
        Ok(())
    }

    #[test]
    fn help_mentions_data_flag() {
        assert!(CliArgs::help_text().contains("--data"));
    }
}
